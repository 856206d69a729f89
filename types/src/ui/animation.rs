use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Exponential ramp from `start` to `end` at `progress` in `[0, 1]`.
///
/// Both endpoints must be positive; the curve is `start * (end / start)^progress`.
#[must_use]
pub fn exponential_ramp(start: f32, end: f32, progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    start * (end / start).powf(progress)
}

/// Lifecycle of a time-boxed effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Finished,
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Finished
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, exponential_ramp, normalized_progress};
    use std::time::Duration;

    #[test]
    fn zero_duration_is_immediately_complete() {
        assert!((normalized_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn timer_finishes_after_duration() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(50));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if (progress - 0.5).abs() < 0.01));
        timer.advance(Duration::from_millis(60));
        assert_eq!(timer.phase(), AnimPhase::Finished);
    }

    #[test]
    fn ramp_hits_both_endpoints() {
        assert!((exponential_ramp(0.3, 0.01, 0.0) - 0.3).abs() < 1e-6);
        assert!((exponential_ramp(0.3, 0.01, 1.0) - 0.01).abs() < 1e-6);
        let mid = exponential_ramp(0.3, 0.01, 0.5);
        assert!(mid < 0.3 && mid > 0.01);
    }
}
