//! Snake movement system.
//!
//! This module computes where the head goes on the next step.

use crate::game::grid::Grid;
use crate::game::types::{Position, Snake};

/// One cell from the current head along the snake's direction, wrapped
/// around the grid edges.
pub fn next_head(snake: &Snake, grid: &Grid) -> Position {
    let head = snake.head();
    let (dx, dy) = snake.direction.delta();
    grid.wrap(Position::new(head.x + dx, head.y + dy))
}
