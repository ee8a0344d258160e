use rand::Rng;

use crate::game::types::Position;

/// Toroidal playing field of `width` x `height` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Bring a position back onto the grid, reappearing on the opposite edge.
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: wrap_axis(self.width, pos.x),
            y: wrap_axis(self.height, pos.y),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position { x, y }))
    }

    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        Position {
            x: rng.random_range(0..self.width),
            y: rng.random_range(0..self.height),
        }
    }
}

/// Past the last index goes to 0, below 0 goes to the last index.
pub fn wrap_axis(size: i32, value: i32) -> i32 {
    value.rem_euclid(size)
}
