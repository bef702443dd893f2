use crate::difficulty::{DifficultyPreset, DifficultySelector};
use crate::input::KeyInput;
use crate::session::Session;

/// Top-level screens. The main loop matches on the current screen each frame
/// and swaps in the next one; Terminated is absorbing and breaks the loop.
pub enum Screen {
    Menu(DifficultySelector),
    Playing(Session),
    GameOver { score: u32, entered_at: f64 },
    Terminated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome {
    Stay,
    Start(DifficultyPreset),
    Quit,
}

/// Fold one frame of input into the menu: up/down cycle the highlight,
/// Enter confirms, closing the window quits.
pub fn menu_step(selector: &mut DifficultySelector, keys: &[KeyInput]) -> MenuOutcome {
    for key in keys {
        match key {
            KeyInput::Up => selector.previous(),
            KeyInput::Down => selector.next(),
            KeyInput::Confirm => return MenuOutcome::Start(selector.confirm()),
            KeyInput::Close => return MenuOutcome::Quit,
            _ => {}
        }
    }
    MenuOutcome::Stay
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverOutcome {
    Stay,
    /// Back to the menu for a fresh session.
    Restart,
    Quit,
}

/// Fold one frame of input into the game-over screen. R and Q are ignored
/// until the display delay has elapsed; closing the window always quits.
pub fn game_over_step(keys: &[KeyInput], accepting_input: bool) -> GameOverOutcome {
    for key in keys {
        match key {
            KeyInput::Close => return GameOverOutcome::Quit,
            KeyInput::Restart if accepting_input => return GameOverOutcome::Restart,
            KeyInput::Quit if accepting_input => return GameOverOutcome::Quit,
            _ => {}
        }
    }
    GameOverOutcome::Stay
}
