//! Frame timing.
//!
//! Produces the per-frame delta and a once-per-second frames-per-second sample.

use crate::config::engine::FPS_WINDOW_MS;

pub struct FrameClock {
    last_tick_ms: u64,
    window_start_ms: u64,
    frames_this_window: u32,
    current_fps: u32,
}

impl FrameClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_tick_ms: now_ms,
            window_start_ms: now_ms,
            frames_this_window: 0,
            current_fps: 0,
        }
    }

    /// Milliseconds elapsed since the previous tick.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let delta = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;
        delta as f32
    }

    /// Count one frame. Returns the frame count of the window that just
    /// closed once at least a second has passed since the window opened.
    pub fn sample(&mut self, now_ms: u64) -> Option<u32> {
        self.frames_this_window += 1;
        if now_ms.saturating_sub(self.window_start_ms) < FPS_WINDOW_MS {
            return None;
        }
        self.current_fps = self.frames_this_window;
        self.frames_this_window = 0;
        self.window_start_ms = now_ms;
        Some(self.current_fps)
    }

    pub fn current_fps(&self) -> u32 {
        self.current_fps
    }
}
