//! Move scheduler.
//!
//! Spreads a configured number of grid steps across each one-second window,
//! independent of the render frame rate. A window closes once its
//! accumulator reaches 1000ms; the accumulator and the move count then
//! restart from zero, dropping whatever time overshot the boundary. Step
//! timing can therefore drift slightly across windows.

const WINDOW_MS: f32 = 1000.0;

#[derive(Debug, Clone)]
pub struct MoveScheduler {
    moves_per_second: f32,
    accumulator_ms: f32,
    moves_this_window: u32,
}

impl MoveScheduler {
    pub fn new(moves_per_second: f32) -> Self {
        Self {
            moves_per_second,
            accumulator_ms: 0.0,
            moves_this_window: 0,
        }
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
        self.moves_this_window = 0;
    }

    pub fn moves_this_window(&self) -> u32 {
        self.moves_this_window
    }

    /// Advance by `delta_ms`; returns whether one step is due this frame.
    ///
    /// A step is due while the moves already made trail the moves the
    /// elapsed share of the window calls for. At most one step per frame.
    pub fn due(&mut self, delta_ms: f32) -> bool {
        self.accumulator_ms += delta_ms;
        if self.accumulator_ms >= WINDOW_MS {
            self.reset();
        }

        let target = self.accumulator_ms * self.moves_per_second / WINDOW_MS;
        if (self.moves_this_window as f32) < target {
            self.moves_this_window += 1;
            return true;
        }
        false
    }
}
