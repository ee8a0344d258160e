//! Game entities module.
//!
//! This module organizes snake and apple entity logic.

pub mod apple;
pub mod snake;

pub use apple::*;
pub use snake::*;
