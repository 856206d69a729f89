//! Screen flash shown when the alert fires.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer, exponential_ramp};

/// Intensity at the start and end of a flash, matching the alert tone gain ramp.
const FLASH_START: f32 = 1.0;
const FLASH_END: f32 = 0.01 / 0.3;

#[derive(Debug, Clone)]
pub struct FlashEffect {
    timer: EffectTimer,
}

impl FlashEffect {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    /// Current intensity in `(0, 1]`, or `0.0` once finished.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        match self.phase() {
            AnimPhase::Running { progress } => exponential_ramp(FLASH_START, FLASH_END, progress),
            AnimPhase::Finished => 0.0,
        }
    }
}
