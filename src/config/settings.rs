//! Runtime settings.
//!
//! Every field defaults to the constants in [`crate::config::engine`] and
//! [`crate::config::game`]. A JSON file may override any subset of them.

use std::env;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{engine, game};
use crate::error::EngineError;

/// RGBA colour, one byte per channel.
pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub game: GameSettings,
    pub assets: AssetPaths,
    pub palette: Palette,
    pub particles: ParticleSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    pub show_fps: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: engine::WINDOW_TITLE.to_string(),
            width: engine::WINDOW_WIDTH,
            height: engine::WINDOW_HEIGHT,
            vsync: engine::VSYNC,
            fullscreen: engine::FULLSCREEN,
            show_fps: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub cell_size: u32,
    pub moves_per_second: f32,
    pub starting_length: usize,
    pub start_x: i32,
    pub start_y: i32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            cell_size: game::CELL_SIZE,
            moves_per_second: game::MOVES_PER_SECOND,
            starting_length: game::STARTING_LENGTH,
            start_x: game::START_X,
            start_y: game::START_Y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub snake: String,
    pub apple: String,
    pub menu: String,
    pub particle: String,
    pub eat_sound: String,
    pub font: String,
    pub font_size: u16,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            snake: engine::SNAKE_TEXTURE.to_string(),
            apple: engine::APPLE_TEXTURE.to_string(),
            menu: engine::MENU_TEXTURE.to_string(),
            particle: engine::PARTICLE_TEXTURE.to_string(),
            eat_sound: engine::EAT_SOUND.to_string(),
            font: engine::FONT.to_string(),
            font_size: engine::FONT_SIZE,
        }
    }
}

/// Colours used by text and shape rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub text: Rgba,
    pub overlay: Rgba,
    pub marker: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [135, 206, 235, 255],
            text: [255, 255, 255, 255],
            overlay: [0, 0, 0, 160],
            marker: [255, 0, 0, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub capacity: usize,
    pub per_second: u32,
    pub lifetime_ms: f32,
    pub speed: f32,
    pub burst_ms: f32,
    pub start_size: f32,
    pub end_size: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            capacity: engine::MAX_PARTICLES,
            per_second: engine::PARTICLES_PER_SECOND,
            lifetime_ms: engine::PARTICLE_LIFETIME_MS,
            speed: engine::PARTICLE_SPEED,
            burst_ms: engine::PARTICLE_BURST_MS,
            start_size: 1.0,
            end_size: 0.0,
        }
    }
}

impl Settings {
    /// Load settings from `$SNAKE_SETTINGS`, else `settings.json` if it
    /// exists, else defaults.
    pub fn load() -> Result<Self, EngineError> {
        if let Ok(path) = env::var(engine::SETTINGS_ENV) {
            return Self::load_from(Path::new(&path));
        }
        let local = Path::new(engine::SETTINGS_FILE);
        if local.exists() {
            return Self::load_from(local);
        }
        info!("[Settings] No settings file, using defaults");
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self, EngineError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| EngineError::SettingsRead {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        let settings: Settings =
            serde_json::from_str(&raw).map_err(|e| EngineError::SettingsParse {
                path: display.clone(),
                reason: e.to_string(),
            })?;
        info!("[Settings] Loaded {}", display);
        Ok(settings)
    }

    /// Grid dimensions in cells, derived from the window and cell size.
    pub fn grid_size(&self) -> (i32, i32) {
        let cell = self.game.cell_size.max(1);
        (
            (self.window.width / cell) as i32,
            (self.window.height / cell) as i32,
        )
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let WindowSettings { width, height, .. } = self.window;
        let cell_size = self.game.cell_size;
        if cell_size == 0
            || width == 0
            || height == 0
            || width % cell_size != 0
            || height % cell_size != 0
        {
            return Err(EngineError::WindowSize {
                width,
                height,
                cell_size,
            });
        }

        let moves_per_second = self.game.moves_per_second;
        if !(moves_per_second.is_finite() && moves_per_second > 0.0) {
            return Err(EngineError::MoveRate { moves_per_second });
        }

        // The starting tail trails along the x axis and must leave a free cell
        // in its row, or the first step lands on the tail tip.
        let (grid_width, grid_height) = self.grid_size();
        let GameSettings {
            starting_length: length,
            start_x: x,
            start_y: y,
            ..
        } = self.game;
        if length == 0
            || length >= grid_width as usize
            || !(0..grid_width).contains(&x)
            || !(0..grid_height).contains(&y)
        {
            return Err(EngineError::StartingSnake {
                length,
                x,
                y,
                grid_width,
                grid_height,
            });
        }

        if self.particles.capacity == 0 {
            return Err(EngineError::ParticleCapacity {
                capacity: self.particles.capacity,
            });
        }
        Ok(())
    }
}
