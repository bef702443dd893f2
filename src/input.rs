use macroquad::prelude::{KeyCode, is_key_pressed};

/// Discrete key events the game reacts to. Each screen interprets the subset
/// it cares about; anything else pressed that frame produces no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Up,
    Down,
    Left,
    Right,
    /// Enter: confirm the highlighted menu entry.
    Confirm,
    /// P: pause toggle while playing.
    Pause,
    /// R: restart from the game-over screen.
    Restart,
    /// Q: quit from the game-over screen.
    Quit,
    /// Escape / window close: quit from anywhere.
    Close,
}

/// Poll all keys pressed since the last frame.
pub fn poll() -> Vec<KeyInput> {
    let mut keys = Vec::new();
    if is_key_pressed(KeyCode::Up) {
        keys.push(KeyInput::Up);
    }
    if is_key_pressed(KeyCode::Down) {
        keys.push(KeyInput::Down);
    }
    if is_key_pressed(KeyCode::Left) {
        keys.push(KeyInput::Left);
    }
    if is_key_pressed(KeyCode::Right) {
        keys.push(KeyInput::Right);
    }
    if is_key_pressed(KeyCode::Enter) {
        keys.push(KeyInput::Confirm);
    }
    if is_key_pressed(KeyCode::P) {
        keys.push(KeyInput::Pause);
    }
    if is_key_pressed(KeyCode::R) {
        keys.push(KeyInput::Restart);
    }
    if is_key_pressed(KeyCode::Q) {
        keys.push(KeyInput::Quit);
    }
    if is_key_pressed(KeyCode::Escape) {
        keys.push(KeyInput::Close);
    }
    keys
}
