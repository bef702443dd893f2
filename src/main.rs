use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod audio;
mod board;
mod config;
mod difficulty;
mod flow;
mod grid;
mod input;
mod render;
mod session;
mod snake;

use audio::SoundBank;
use config::{CONFIG_PATH, Config, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use difficulty::DifficultySelector;
use flow::{GameOverOutcome, MenuOutcome, Screen};
use grid::Direction;
use input::KeyInput;
use session::{Session, TickOutcome};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: DEFAULT_WIDTH,
        window_height: DEFAULT_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load_or_default(CONFIG_PATH);
    if config.outer_width != DEFAULT_WIDTH || config.outer_height != DEFAULT_HEIGHT {
        request_new_screen_size(config.outer_width as f32, config.outer_height as f32);
    }

    let sounds = match SoundBank::load(config.sound_volume).await {
        Ok(sounds) => sounds,
        Err(err) => {
            error!("audio initialization failed: {err:#}");
            return;
        }
    };

    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let mut last_difficulty = config.default_difficulty;
    let mut screen = Screen::Menu(DifficultySelector::new(
        config.difficulties.clone(),
        last_difficulty,
    ));
    let mut last_tick = get_time();

    loop {
        let keys = input::poll();
        let now = get_time();
        let mut next_screen: Option<Screen> = None;

        match &mut screen {
            Screen::Menu(selector) => {
                render::draw_menu(&config, selector);
                match flow::menu_step(selector, &keys) {
                    MenuOutcome::Stay => {}
                    MenuOutcome::Start(preset) => {
                        last_difficulty = selector.index();
                        info!(
                            "starting session: difficulty={} tick_rate={}",
                            preset.name, preset.tick_rate
                        );
                        last_tick = now;
                        next_screen = Some(Screen::Playing(Session::new(&config, preset)));
                    }
                    MenuOutcome::Quit => next_screen = Some(Screen::Terminated),
                }
            }

            Screen::Playing(session) => {
                for key in &keys {
                    match key {
                        KeyInput::Up => session.steer(Direction::Up),
                        KeyInput::Down => session.steer(Direction::Down),
                        KeyInput::Left => session.steer(Direction::Left),
                        KeyInput::Right => session.steer(Direction::Right),
                        KeyInput::Pause => session.toggle_pause(),
                        KeyInput::Close => next_screen = Some(Screen::Terminated),
                        _ => {}
                    }
                }

                if next_screen.is_none() && now - last_tick >= session.tick_interval() {
                    last_tick = now;
                    match session.tick() {
                        TickOutcome::AteApple => sounds.play_eat(),
                        TickOutcome::GameOver => {
                            sounds.play_game_over();
                            info!("game over: score={}", session.score);
                            next_screen = Some(Screen::GameOver {
                                score: session.score,
                                entered_at: now,
                            });
                        }
                        TickOutcome::Moved | TickOutcome::Paused => {}
                    }
                }

                render::draw_playing(&config, session);
            }

            Screen::GameOver { score, entered_at } => {
                render::draw_game_over(&config, *score);
                let accepting_input = now - *entered_at >= config.game_over_delay as f64;
                match flow::game_over_step(&keys, accepting_input) {
                    GameOverOutcome::Stay => {}
                    GameOverOutcome::Restart => {
                        info!("restart requested, returning to menu");
                        next_screen = Some(Screen::Menu(DifficultySelector::new(
                            config.difficulties.clone(),
                            last_difficulty,
                        )));
                    }
                    GameOverOutcome::Quit => next_screen = Some(Screen::Terminated),
                }
            }

            // Absorbing; breaking the loop lets the window and audio
            // resources drop on the way out.
            Screen::Terminated => {
                info!("quitting");
                break;
            }
        }

        if let Some(next) = next_screen {
            screen = next;
        }

        next_frame().await;
    }
}
