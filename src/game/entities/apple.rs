//! Apple entity logic.
//!
//! This module places the apple on a cell the snake does not occupy.

use log::warn;
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::config::game::APPLE_RESPAWN_ATTEMPTS;
use crate::game::grid::Grid;
use crate::game::types::{Position, Snake};

/// Pick a random free cell for the apple.
///
/// Random draws are tried first; if they keep landing on the snake, a free
/// cell is picked from the full list instead, so a crowded board still
/// terminates. Returns `None` only when the snake covers the whole grid.
pub fn spawn_apple<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Position> {
    for _ in 0..APPLE_RESPAWN_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    let free = grid.cells().filter(|cell| !snake.occupies(*cell)).choose(rng);
    if free.is_none() {
        warn!("[Snake] No free cell left for the apple ({} cells)", grid.cell_count());
    }
    free
}
