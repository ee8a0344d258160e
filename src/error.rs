//! Engine error types.
//!
//! Only initialization can fail. Asset loading degrades to "nothing to render"
//! and logs instead of returning an error.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    SettingsRead { path: String, reason: String },
    SettingsParse { path: String, reason: String },
    WindowSize { width: u32, height: u32, cell_size: u32 },
    MoveRate { moves_per_second: f32 },
    StartingSnake { length: usize, x: i32, y: i32, grid_width: i32, grid_height: i32 },
    ParticleCapacity { capacity: usize },
}

impl EngineError {
    /// Stable code used as a log prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SettingsRead { .. } => "SETTINGS_READ",
            Self::SettingsParse { .. } => "SETTINGS_PARSE",
            Self::WindowSize { .. } => "WINDOW_SIZE",
            Self::MoveRate { .. } => "MOVE_RATE",
            Self::StartingSnake { .. } => "STARTING_SNAKE",
            Self::ParticleCapacity { .. } => "PARTICLE_CAPACITY",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SettingsRead { path, reason } => {
                write!(f, "could not read settings file {path}: {reason}")
            }
            Self::SettingsParse { path, reason } => {
                write!(f, "could not parse settings file {path}: {reason}")
            }
            Self::WindowSize {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "window {width}x{height} is not a non-empty whole number of {cell_size}px cells"
            ),
            Self::MoveRate { moves_per_second } => {
                write!(f, "moves per second must be positive, got {moves_per_second}")
            }
            Self::StartingSnake {
                length,
                x,
                y,
                grid_width,
                grid_height,
            } => write!(
                f,
                "starting snake of length {length} at ({x}, {y}) must fit a {grid_width}x{grid_height} grid and leave a free cell in its row"
            ),
            Self::ParticleCapacity { capacity } => {
                write!(f, "particle capacity must be at least 1, got {capacity}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = EngineError::WindowSize {
            width: 100,
            height: 0,
            cell_size: 32,
        };
        assert_eq!(err.code(), "WINDOW_SIZE");
        assert!(err.to_string().contains("100x0"));
    }
}
