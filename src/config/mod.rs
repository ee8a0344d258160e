/// Main configuration module.
///
/// Re-exports submodules for engine and game configuration.
pub mod engine;
pub mod game;
pub mod settings;
