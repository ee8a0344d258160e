use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A grid cell, column `x` and row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in grid coordinates; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Menu,
    Playing,
    Lose,
    /// Reserved. No transition enters it yet.
    Pause,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Direction applied on the next step.
    pub direction: Direction,
    /// Direction of the last step taken.
    pub heading: Direction,
    /// Head first.
    pub segments: VecDeque<Position>,
    pub length: usize,
}

impl Snake {
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apple {
    pub pos: Position,
}

/// What a single simulation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub head: Position,
    pub ate: bool,
    pub collided: bool,
}
