//! Threshold-crossing collect timer.
//!
//! The host loop calls `advance()` once per frame with a variable delta.
//! CollectTimer fires at most once per call when a whole interval has
//! accumulated, then resets to zero. The fractional remainder is dropped,
//! so a slow frame never produces a burst of catch-up ticks.

pub struct CollectTimer {
    /// Seconds between fires (1.0 for auto-collect).
    interval: f64,
    /// Seconds accumulated since the last fire.
    accumulator: f64,
    /// Total fires since creation.
    pub total_fires: u64,
}

impl CollectTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            total_fires: 0,
        }
    }

    /// Timer that fires once per whole second.
    pub fn per_second() -> Self {
        Self::new(1.0)
    }

    /// Feed the elapsed frame time in seconds.
    /// Returns true if the timer fired on this frame.
    pub fn advance(&mut self, delta_seconds: f64) -> bool {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return false;
        }
        self.accumulator += delta_seconds;
        if self.accumulator >= self.interval {
            self.accumulator = 0.0;
            self.total_fires += 1;
            true
        } else {
            false
        }
    }

    /// Seconds accumulated toward the next fire.
    pub fn pending(&self) -> f64 {
        self.accumulator
    }
}
