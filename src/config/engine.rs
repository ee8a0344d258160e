/// Engine configuration constants.
///
/// Window defaults, asset locations and particle emitter defaults.
pub const WINDOW_TITLE: &str = "Snake";

/// Window width in pixels.
pub const WINDOW_WIDTH: u32 = 640;

/// Window height in pixels.
pub const WINDOW_HEIGHT: u32 = 480;

pub const VSYNC: bool = false;
pub const FULLSCREEN: bool = false;

/// Length of the frame-rate sampling window in milliseconds.
pub const FPS_WINDOW_MS: u64 = 1000;

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV: &str = "SNAKE_SETTINGS";

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "settings.json";

pub const SNAKE_TEXTURE: &str = "assets/snake.png";
pub const APPLE_TEXTURE: &str = "assets/apple.png";
pub const MENU_TEXTURE: &str = "assets/menu.png";
pub const PARTICLE_TEXTURE: &str = "assets/particle.png";
pub const EAT_SOUND: &str = "assets/nice.wav";
pub const FONT: &str = "assets/font.ttf";
pub const FONT_SIZE: u16 = 24;

/// Maximum number of live particle slots per emitter.
pub const MAX_PARTICLES: usize = 256;

/// New particles per second while an emitter is emitting.
pub const PARTICLES_PER_SECOND: u32 = 120;

/// Particle lifetime in milliseconds.
pub const PARTICLE_LIFETIME_MS: f32 = 600.0;

/// Particle speed in pixels per millisecond.
pub const PARTICLE_SPEED: f32 = 0.12;

/// How long an emitter keeps spawning after an apple is eaten, in milliseconds.
pub const PARTICLE_BURST_MS: f32 = 150.0;
