//! Step rules: self-collision, eating and tail length.

use log::debug;
use rand::Rng;

use crate::game::entities::{grow, spawn_apple};
use crate::game::state::World;
use crate::game::types::{Position, Snake};

/// True when `head` lands on a segment of the body as it was before the move.
pub fn hits_body(snake: &Snake, head: Position) -> bool {
    snake.occupies(head)
}

/// Score the apple, grow by one and respawn the apple off the snake.
pub fn eat_apple<R: Rng>(world: &mut World, rng: &mut R) {
    world.score += 1;
    grow(&mut world.snake);
    match spawn_apple(&world.grid, &world.snake, rng) {
        Some(pos) => world.apple.pos = pos,
        None => debug!("[Snake] Board full, apple stays at {:?}", world.apple.pos),
    }
    debug!(
        "[Snake] Ate apple, score={} length={} next apple at {:?}",
        world.score, world.snake.length, world.apple.pos
    );
}
