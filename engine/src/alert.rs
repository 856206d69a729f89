//! Audible alert fired when the stopwatch reaches its threshold.

use std::f32::consts::TAU;
use std::io::{self, Write};
use std::time::Duration;

use lapwatch_types::ui::exponential_ramp;

/// A short sine tone with an exponential gain decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertTone {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub start_gain: f32,
    pub end_gain: f32,
}

impl Default for AlertTone {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            duration: Duration::from_millis(500),
            start_gain: 0.3,
            end_gain: 0.01,
        }
    }
}

impl AlertTone {
    /// Gain at `t` into the tone; zero once the tone has ended.
    #[must_use]
    pub fn gain_at(&self, t: Duration) -> f32 {
        if t >= self.duration {
            return 0.0;
        }
        let progress = t.as_secs_f32() / self.duration.as_secs_f32();
        exponential_ramp(self.start_gain, self.end_gain, progress)
    }

    /// Mono PCM samples in `[-1, 1]` for the whole tone.
    #[must_use]
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let count = (self.duration.as_secs_f64() * f64::from(sample_rate)).round() as usize;
        (0..count)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (TAU * self.frequency_hz * t).sin() * self.gain_at(Duration::from_secs_f32(t))
            })
            .collect()
    }
}

/// Where alerts go.
pub trait AlertSink: Send {
    fn play(&mut self, tone: &AlertTone);
}

/// Rings the terminal bell; the renderer adds a flash that follows the tone envelope.
#[derive(Debug, Default)]
pub struct BellSink;

impl AlertSink for BellSink {
    fn play(&mut self, tone: &AlertTone) {
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            tracing::warn!("Failed to ring terminal bell: {err}");
        } else {
            tracing::debug!(frequency_hz = tone.frequency_hz, "Alert bell rung");
        }
    }
}
