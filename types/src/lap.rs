//! Lap records captured while the stopwatch runs.

use crate::elapsed::ElapsedParts;

/// A snapshot of elapsed time taken by a lap action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapRecord {
    index: u32,
    time_ms: u64,
}

impl LapRecord {
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn time_ms(&self) -> u64 {
        self.time_ms
    }

    /// `MM:SS.CC`, or `HH:MM:SS.CC` once the lap passes an hour.
    #[must_use]
    pub fn label(&self) -> String {
        ElapsedParts::from_ms(self.time_ms).compact()
    }
}

/// Laps for the current run, stored in capture order.
///
/// Indices are assigned here so they stay strictly increasing until the log is
/// cleared; callers never pick an index themselves.
#[derive(Debug, Clone, Default)]
pub struct LapLog {
    records: Vec<LapRecord>,
}

impl LapLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, time_ms: u64) -> LapRecord {
        let index = self.records.last().map_or(1, |last| last.index + 1);
        let lap = LapRecord { index, time_ms };
        self.records.push(lap);
        lap
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LapRecord> {
        self.records.last()
    }

    /// Display order: newest lap first.
    pub fn recent_first(&self) -> impl Iterator<Item = &LapRecord> {
        self.records.iter().rev()
    }
}
