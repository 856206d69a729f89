//! Elapsed-time decomposition and display formatting.

use std::fmt;

const MS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// An elapsed duration split into the four fields the timer displays.
///
/// All fields come from integer division on the millisecond count, so the
/// decomposition never rounds up: 59_999ms is `00:00:59.99`, not `00:01:00.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub centis: u64,
}

impl ElapsedParts {
    #[must_use]
    pub const fn from_ms(ms: u64) -> Self {
        let total_seconds = ms / MS_PER_SECOND;
        Self {
            hours: total_seconds / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
            centis: (ms % MS_PER_SECOND) / 10,
        }
    }

    /// `MM:SS.CC` when under an hour, `HH:MM:SS.CC` otherwise.
    #[must_use]
    pub fn compact(self) -> String {
        if self.hours > 0 {
            self.to_string()
        } else {
            format!("{:02}:{:02}.{:02}", self.minutes, self.seconds, self.centis)
        }
    }
}

impl fmt::Display for ElapsedParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.centis
        )
    }
}

/// Whole seconds in an elapsed millisecond count.
#[must_use]
pub const fn whole_seconds(ms: u64) -> u64 {
    ms / MS_PER_SECOND
}
