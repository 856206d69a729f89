//! Core engine for lapwatch - stopwatch state machine and orchestration.
//!
//! This crate contains the App state machine without TUI dependencies.

mod alert;
mod app;
mod clock;
mod live_clock;
mod particles;
mod stopwatch;
mod tick;

pub use alert::{AlertSink, AlertTone, BellSink};
pub use app::{ALERT_STEP_SECS, App, AppInit};
pub use clock::{Clock, ManualClock, SystemClock};
pub use live_clock::{CLOCK_POLL_PERIOD, ClockSnapshot, LiveClock};
pub use particles::{PARTICLE_COUNT, Particle, ParticleField};
pub use stopwatch::{Stopwatch, TICK_PERIOD, TickContext, TickOutcome, TimerState};
pub use tick::TickTask;

// Re-export the shared types so the TUI only needs this crate for state.
pub use lapwatch_types::ui;
pub use lapwatch_types::{
    CITIES, City, DayPhase, ElapsedParts, LapLog, LapRecord, Preferences, THEME_CYCLE, Theme,
    ThemeMode,
};
