//! Main entry point for the Snake game.
//!
//! Loads and validates settings, then opens the window and runs the game
//! loop. Any initialization failure is logged and the loop never starts.

use log::{error, info};

pub mod config;
mod engine;
mod error;
mod game;

use config::settings::Settings;
use engine::Engine;
use game::SnakeGame;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine = match Settings::load().and_then(Engine::create) {
        Ok(engine) => engine,
        Err(e) => {
            error!("[Engine] {}: {}", e.code(), e);
            std::process::exit(1);
        }
    };

    let (grid_width, grid_height) = engine.settings().grid_size();
    info!("[Engine] Playing field is {}x{} cells", grid_width, grid_height);

    engine.start(SnakeGame::load);
}
