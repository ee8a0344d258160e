use rand::Rng;
use serde::Serialize;

use crate::config::settings::GameSettings;
use crate::game::entities::{push_head, shrink_tail, spawn_apple, spawn_snake};
use crate::game::grid::Grid;
use crate::game::systems::{eat_apple, hits_body, next_head};
use crate::game::types::{Apple, Direction, Position, Snake, StepOutcome};

/// Snake, apple and score for one round.
#[derive(Debug, Clone, Serialize)]
pub struct World {
    #[serde(skip)]
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
}

impl World {
    /// Starts a fresh round.
    pub fn new<R: Rng>(grid: Grid, settings: &GameSettings, rng: &mut R) -> Self {
        let snake = spawn_snake(
            &grid,
            Position::new(settings.start_x, settings.start_y),
            settings.starting_length,
            Direction::Right,
        );
        // A valid starting snake never fills the grid: it fits in one row.
        let apple = spawn_apple(&grid, &snake, rng).unwrap_or_else(|| grid.random_cell(rng));

        World {
            grid,
            snake,
            apple: Apple { pos: apple },
            score: 0,
        }
    }

    /// Advance the snake by one cell.
    ///
    /// Self-collision is checked against the body before the move. A fatal
    /// step still completes, so the overlapping head is what gets drawn on
    /// the losing frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        let head = next_head(&self.snake, &self.grid);
        debug_assert!(self.grid.contains(head));
        let collided = hits_body(&self.snake, head);

        push_head(&mut self.snake, head);
        self.snake.heading = self.snake.direction;

        let ate = head == self.apple.pos;
        if ate {
            eat_apple(self, rng);
        } else {
            shrink_tail(&mut self.snake);
        }

        StepOutcome {
            head,
            ate,
            collided,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn world(rng: &mut StdRng) -> World {
        let mut world = World::new(Grid::new(20, 15), &GameSettings::default(), rng);
        world.apple.pos = Position::new(0, 0);
        world
    }

    #[test]
    fn new_round_matches_starting_layout() {
        let mut rng = StdRng::seed_from_u64(21);
        let world = World::new(Grid::new(20, 15), &GameSettings::default(), &mut rng);
        assert_eq!(world.snake.head(), Position::new(8, 8));
        assert_eq!(world.snake.segments.len(), 6);
        assert_eq!(world.snake.direction, Direction::Right);
        assert!(!world.snake.occupies(world.apple.pos));
        assert_eq!(world.score, 0);
    }

    #[test]
    fn plain_step_keeps_length() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut world = world(&mut rng);
        let outcome = world.step(&mut rng);

        assert_eq!(outcome.head, Position::new(9, 8));
        assert!(!outcome.ate && !outcome.collided);
        assert_eq!(world.snake.segments.len(), 6);
        assert_eq!(world.snake.length, 6);
        assert_eq!(world.snake.segments.back(), Some(&Position::new(4, 8)));
    }

    #[test]
    fn eating_grows_by_one_and_keeps_the_tail() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut world = world(&mut rng);
        world.apple.pos = Position::new(9, 8);

        let outcome = world.step(&mut rng);

        assert!(outcome.ate);
        assert_eq!(world.score, 1);
        assert_eq!(world.snake.length, 7);
        assert_eq!(world.snake.segments.len(), 7);
        assert_eq!(world.snake.segments.back(), Some(&Position::new(3, 8)));
        assert!(!world.snake.occupies(world.apple.pos));
    }

    #[test]
    fn head_wraps_around_the_right_edge() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut world = world(&mut rng);
        world.apple.pos = Position::new(0, 0);
        for _ in 0..12 {
            world.step(&mut rng);
        }
        assert_eq!(world.snake.head(), Position::new(0, 8));
    }
}
