//! Breathing pulse applied to the timer digits.

use std::f32::consts::TAU;
use std::time::Duration;

const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Continuous oscillation; only its phase within [`PULSE_PERIOD`] is kept.
#[derive(Debug, Clone, Default)]
pub struct PulseEffect {
    phase: Duration,
}

impl PulseEffect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: Duration) {
        let period = PULSE_PERIOD.as_nanos();
        let next = (self.phase.as_nanos() + delta.as_nanos()) % period;
        self.phase = Duration::from_nanos(next as u64);
    }

    /// Brightness in `[0, 1]`: 1 at the start of each period, 0 halfway through.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        let t = self.phase.as_secs_f32() / PULSE_PERIOD.as_secs_f32();
        0.5 + 0.5 * (t * TAU).cos()
    }
}
