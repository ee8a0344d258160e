pub mod controller;
pub mod entities;
pub mod grid;
pub mod scheduler;
pub mod state;
pub mod systems;
pub mod tests;
pub mod types;

pub use controller::SnakeGame;
