//! Keyboard snapshot taken once per frame.

use macroquad::input::{KeyCode, is_key_down, is_quit_requested};

/// Which action keys are currently held, plus the window close request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub start: bool,
    pub back: bool,
    pub quit: bool,
}

impl InputSnapshot {
    /// Query the keyboard state. WASD and the arrow keys both steer.
    pub fn poll() -> Self {
        Self {
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            start: is_key_down(KeyCode::Space),
            back: is_key_down(KeyCode::Escape),
            quit: is_quit_requested(),
        }
    }
}
