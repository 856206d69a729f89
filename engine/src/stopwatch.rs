//! Stopwatch state machine.
//!
//! # States
//!
//! ```text
//!            start()                 lap() (append record)
//!   ┌──────┐ ──────▶ ┌─────────┐ ◀──┐
//!   │ Idle │         │ Running │ ───┘
//!   └──────┘ ◀────── └─────────┘
//!     ▲  │    stop()       │
//!     └──┘ reset()         │ reset()
//!     ▲────────────────────┘
//! ```
//!
//! While running, a [`TickTask`] signals every [`TICK_PERIOD`]; [`Stopwatch::poll`]
//! turns pending signals into one [`Stopwatch::tick`] on the caller's loop.

use std::sync::Arc;
use std::time::Duration;

use lapwatch_types::{ElapsedParts, LapLog, LapRecord, Theme, ThemeMode, whole_seconds};

use crate::clock::Clock;
use crate::tick::TickTask;

pub const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Length of one cycle-theme slot, in elapsed seconds.
const CYCLE_SLOT_SECS: u64 = 30;

/// Raw timer fields.
///
/// `elapsed_ms` is authoritative while stopped; while running the true elapsed
/// time is `now - start_epoch_ms`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    pub is_running: bool,
    pub start_epoch_ms: u64,
    pub elapsed_ms: u64,
}

/// Settings a tick needs to evaluate its side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    pub theme_mode: ThemeMode,
    pub alert_time: u32,
    pub sound_enabled: bool,
}

/// What a tick produced for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub elapsed_ms: u64,
    /// Theme to apply, if this tick selected one.
    pub theme: Option<Theme>,
    /// The alert threshold was reached on this tick.
    pub alert: bool,
}

pub struct Stopwatch {
    clock: Arc<dyn Clock>,
    state: TimerState,
    laps: LapLog,
    ticker: Option<TickTask>,
    last_cycle_slot: Option<u64>,
    alerted_second: Option<u64>,
}

impl Stopwatch {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: TimerState::default(),
            laps: LapLog::new(),
            ticker: None,
            last_cycle_slot: None,
            alerted_second: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Whether a tick task is alive. Always equal to [`Self::is_running`].
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    #[must_use]
    pub fn laps(&self) -> &LapLog {
        &self.laps
    }

    /// Elapsed time as of the last tick (or stop), which is what the display shows.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.state.elapsed_ms
    }

    #[must_use]
    pub fn display(&self) -> ElapsedParts {
        ElapsedParts::from_ms(self.state.elapsed_ms)
    }

    fn live_elapsed_ms(&self) -> u64 {
        if self.state.is_running {
            self.clock.now_ms().saturating_sub(self.state.start_epoch_ms)
        } else {
            self.state.elapsed_ms
        }
    }

    /// Idle → Running. Returns `false` (and does nothing) if already running.
    ///
    /// Must be called inside a tokio runtime: it spawns the tick task.
    pub fn start(&mut self) -> bool {
        if self.state.is_running {
            return false;
        }
        self.state.start_epoch_ms = self.clock.now_ms().saturating_sub(self.state.elapsed_ms);
        self.state.is_running = true;
        self.ticker = Some(TickTask::spawn(TICK_PERIOD));
        tracing::debug!(elapsed_ms = self.state.elapsed_ms, "Stopwatch started");
        true
    }

    /// Running → Idle. Returns `false` (and does nothing) if not running.
    pub fn stop(&mut self) -> bool {
        if !self.state.is_running {
            return false;
        }
        self.cancel_ticker();
        self.state.elapsed_ms = self.live_elapsed_ms();
        self.state.is_running = false;
        tracing::debug!(elapsed_ms = self.state.elapsed_ms, "Stopwatch stopped");
        true
    }

    /// Back to a zeroed Idle state with no laps, from any state.
    pub fn reset(&mut self) {
        self.cancel_ticker();
        self.state = TimerState::default();
        self.laps.clear();
        self.last_cycle_slot = None;
        self.alerted_second = None;
        tracing::debug!("Stopwatch reset");
    }

    /// Record a lap while running. Idle laps are ignored.
    pub fn lap(&mut self) -> Option<LapRecord> {
        if !self.state.is_running {
            return None;
        }
        let lap = self.laps.record(self.live_elapsed_ms());
        tracing::debug!(index = lap.index(), time_ms = lap.time_ms(), "Lap recorded");
        Some(lap)
    }

    /// Drop all laps without touching the timer; numbering restarts at 1.
    pub fn clear_laps(&mut self) {
        self.laps.clear();
    }

    /// Forget the last cycle slot so the next cycle tick re-applies a theme.
    pub fn reset_cycle(&mut self) {
        self.last_cycle_slot = None;
    }

    /// Run one tick if the tick task signalled since the last poll.
    pub fn poll(&mut self, ctx: TickContext) -> Option<TickOutcome> {
        let pending = self.ticker.as_mut().map_or(0, TickTask::drain);
        (pending > 0).then(|| self.tick(ctx))
    }

    /// Recompute elapsed time and evaluate the per-tick side effects.
    ///
    /// Only meaningful while running; while idle it reports the frozen state
    /// and no side effects.
    pub fn tick(&mut self, ctx: TickContext) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome {
                elapsed_ms: self.state.elapsed_ms,
                theme: None,
                alert: false,
            };
        }

        let now_ms = self.clock.now_ms();
        let elapsed_ms = now_ms.saturating_sub(self.state.start_epoch_ms);
        self.state.elapsed_ms = elapsed_ms;
        let elapsed_secs = whole_seconds(elapsed_ms);

        let theme = match ctx.theme_mode {
            ThemeMode::Auto => Some(Theme::for_wall_second(whole_seconds(now_ms))),
            ThemeMode::Cycle => {
                let slot = elapsed_secs / CYCLE_SLOT_SECS;
                if self.last_cycle_slot == Some(slot) {
                    None
                } else {
                    self.last_cycle_slot = Some(slot);
                    Some(Theme::for_cycle_slot(slot))
                }
            }
            _ => None,
        };

        let threshold = u64::from(ctx.alert_time);
        let alert = ctx.sound_enabled
            && elapsed_secs == threshold
            && self.alerted_second != Some(threshold);
        if alert {
            self.alerted_second = Some(threshold);
            tracing::info!(threshold, "Alert threshold reached");
        }

        TickOutcome {
            elapsed_ms,
            theme,
            alert,
        }
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
