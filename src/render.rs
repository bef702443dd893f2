use macroquad::prelude::*;

use crate::config::Config;
use crate::difficulty::DifficultySelector;
use crate::session::Session;

const SNAKE_COLOR: Color = GREEN;
const APPLE_COLOR: Color = RED;
const HIGHLIGHT_COLOR: Color = BLUE;
const TEXT_COLOR: Color = WHITE;

/// Text centered on (cx, cy), the way the classic HUD lays itself out.
fn draw_text_centered(text: &str, font_size: u16, color: Color, cx: f32, cy: f32) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text(
        text,
        cx - dims.width * 0.5,
        cy + dims.height * 0.5,
        font_size as f32,
        color,
    );
}

pub fn draw_menu(config: &Config, selector: &DifficultySelector) {
    let w = config.outer_width as f32;
    let h = config.outer_height as f32;

    clear_background(BLACK);
    draw_text_centered("Select Difficulty", 50, TEXT_COLOR, w / 2.0, h / 5.0);
    draw_text_centered(
        "Use UP/DOWN to navigate, ENTER to select",
        25,
        TEXT_COLOR,
        w / 2.0,
        h / 5.0 + 40.0,
    );

    for (i, preset) in selector.presets().iter().enumerate() {
        let color = if i == selector.index() {
            HIGHLIGHT_COLOR
        } else {
            TEXT_COLOR
        };
        draw_text_centered(&preset.name, 40, color, w / 2.0, h / 3.0 + i as f32 * 50.0);
    }
}

/// One playing frame: clear, boundary, HUD, snake, apple. Present happens in
/// the main loop.
pub fn draw_playing(config: &Config, session: &Session) {
    let w = config.outer_width as f32;
    let h = config.outer_height as f32;
    let margin = config.boundary_margin as f32;
    let cell = config.cell_size as f32;

    clear_background(BLACK);
    draw_rectangle_lines(margin, margin, w - 2.0 * margin, h - 2.0 * margin, 3.0, WHITE);

    draw_text_centered("Press P to Hold", 20, TEXT_COLOR, w - 100.0, 20.0);
    draw_text_centered(
        &format!("Score: {}", session.score),
        30,
        TEXT_COLOR,
        margin + 50.0,
        30.0,
    );
    draw_text_centered(
        &format!("Level: {}", session.difficulty.name),
        30,
        TEXT_COLOR,
        w / 2.0,
        30.0,
    );
    draw_text_centered("Made with macroquad", 20, TEXT_COLOR, w / 2.0, h - 30.0);

    for block in &session.snake.body {
        draw_rectangle(block.x as f32, block.y as f32, cell, cell, SNAKE_COLOR);
    }
    draw_rectangle(
        session.apple.x as f32,
        session.apple.y as f32,
        cell,
        cell,
        APPLE_COLOR,
    );
}

pub fn draw_game_over(config: &Config, score: u32) {
    let w = config.outer_width as f32;
    let h = config.outer_height as f32;

    clear_background(BLACK);
    draw_text_centered("Game Over!", 50, TEXT_COLOR, w / 2.0, h / 2.0 - 40.0);
    draw_text_centered(
        "Press R to Restart or Q to Quit",
        30,
        TEXT_COLOR,
        w / 2.0,
        h / 2.0 + 20.0,
    );
    draw_text_centered(&format!("Score: {score}"), 30, TEXT_COLOR, w / 2.0, h / 2.0 + 70.0);
}
