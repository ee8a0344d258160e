/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid cell size,
/// snake speed and the starting layout.
pub const CELL_SIZE: u32 = 32; // Size of one grid cell in pixels.

/// Number of discrete snake moves per second.
pub const MOVES_PER_SECOND: f32 = 10.0;

/// Number of segments the snake starts with (head included).
pub const STARTING_LENGTH: usize = 6;

/// Starting head column.
pub const START_X: i32 = 8;

/// Starting head row.
pub const START_Y: i32 = 8;

/// Random draws tried before the apple respawn enumerates free cells.
pub const APPLE_RESPAWN_ATTEMPTS: usize = 64;
