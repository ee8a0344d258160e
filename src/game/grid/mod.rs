//! Playing-field geometry.

pub mod grid;

pub use grid::*;
