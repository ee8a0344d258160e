//! Game rendering system.
//!
//! Draws the board with the loaded textures, and formats it as text for logs.

use crate::engine::assets::TextureHandle;
use crate::game::state::World;
use crate::game::types::Position;

/// Apple first, then every snake segment on top of it.
pub fn render_board(world: &World, snake: &TextureHandle, apple: &TextureHandle, cell_size: f32) {
    apple.render(
        world.apple.pos.x as f32 * cell_size,
        world.apple.pos.y as f32 * cell_size,
    );
    for segment in world.snake.segments.iter().take(world.snake.length) {
        snake.render(segment.x as f32 * cell_size, segment.y as f32 * cell_size);
    }
}

/// Pixel coordinates of a cell's centre.
pub fn cell_center(pos: Position, cell_size: f32) -> (f32, f32) {
    (
        (pos.x as f32 + 0.5) * cell_size,
        (pos.y as f32 + 0.5) * cell_size,
    )
}

/// Text picture of the board: `@` head, `o` body, `A` apple, `.` empty.
pub fn format_board(world: &World) -> String {
    let mut out = String::new();
    for y in 0..world.grid.height {
        for x in 0..world.grid.width {
            let pos = Position { x, y };
            // Head wins over body, body over apple.
            let symbol = if world.snake.head() == pos {
                '@'
            } else if world.snake.occupies(pos) {
                'o'
            } else if world.apple.pos == pos {
                'A'
            } else {
                '.'
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
