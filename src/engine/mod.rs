//! Engine module.
//!
//! Window loop, frame timing, input, assets, drawable entities and particles.

pub mod assets;
pub mod entity;
pub mod frame_clock;
pub mod game_loop;
pub mod input;
pub mod particles;

pub use game_loop::{Engine, Game};
pub use input::InputSnapshot;
