//! Frame timing.
//!
//! Measures the real time between frames and keeps a low-pass filtered
//! frame time for the FPS readout.

use std::time::Instant;

/// Weight of a new sample in the filtered frame time.
const FPS_FILTER_CUTOFF: f64 = 0.01;

const INITIAL_FRAME_MS: f64 = 16.7;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            frame_ms: INITIAL_FRAME_MS,
        }
    }

    /// Milliseconds since the previous tick; `0.0` on the first one.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f64() * 1000.0,
            None => 0.0,
        };
        self.last = Some(now);
        self.observe(elapsed);
        elapsed
    }

    /// Fold one frame time into the filter. Non-positive samples are ignored.
    pub fn observe(&mut self, elapsed_ms: f64) {
        if elapsed_ms > 0.0 && elapsed_ms.is_finite() {
            self.frame_ms += (elapsed_ms - self.frame_ms) * FPS_FILTER_CUTOFF;
        }
    }

    /// Filtered frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        self.frame_ms
    }

    pub fn fps_estimate(&self) -> f64 {
        1000.0 / self.frame_ms
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
