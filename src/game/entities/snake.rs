//! Snake entity logic.
//!
//! This module builds the starting snake and grows or shrinks its tail.

use std::collections::VecDeque;

use crate::game::grid::Grid;
use crate::game::types::{Direction, Position, Snake};

/// Build a snake whose head sits at `head` and whose tail trails behind it,
/// opposite to `direction`.
pub fn spawn_snake(grid: &Grid, head: Position, length: usize, direction: Direction) -> Snake {
    let (dx, dy) = direction.delta();
    let segments: VecDeque<Position> = (0..length as i32)
        .map(|i| grid.wrap(Position::new(head.x - dx * i, head.y - dy * i)))
        .collect();

    Snake {
        direction,
        heading: direction,
        segments,
        length,
    }
}

/// Put a new head in front. Growth is decided by the caller.
pub fn push_head(snake: &mut Snake, head: Position) {
    snake.segments.push_front(head);
}

/// The snake ate: keep the last segment so the tail grows by one.
pub fn grow(snake: &mut Snake) {
    snake.length += 1;
}

/// The snake did not eat: drop the last segment, length unchanged.
pub fn shrink_tail(snake: &mut Snake) {
    snake.segments.pop_back();
}
