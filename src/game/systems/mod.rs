pub mod input;
pub mod movement;
pub mod render;
pub mod rules;

pub use input::*;
pub use movement::*;
pub use render::*;
pub use rules::*;
