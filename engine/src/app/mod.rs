//! Application state machine for lapwatch.
//!
//! [`App`] owns the stopwatch, the live clock, the preferences and their store,
//! and the visual effects. The TUI layer (`lapwatch_tui`) reads state from `App`
//! and forwards input back to it. No rendering logic lives in this crate.
//!
//! # Tick model
//!
//! Two periodic tasks signal into the app: the stopwatch tick (10ms, only while
//! running) and the live-clock tick (100ms, always). Both are drained by
//! [`App::tick`] on the frame loop, so every state mutation happens on one
//! thread, one callback at a time.

mod settings;
#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::{Duration, Instant};

use lapwatch_config::{FileStore, KeyValueStore, LapwatchConfig, MemoryStore, load_preferences};
use lapwatch_types::ui::{FlashEffect, InputMode, PulseEffect, UiOptions};
use lapwatch_types::{LapRecord, Preferences, THEME_CYCLE, Theme, ThemeMode};

use crate::alert::{AlertSink, AlertTone, BellSink};
use crate::clock::{Clock, SystemClock};
use crate::live_clock::{CLOCK_POLL_PERIOD, ClockSnapshot, LiveClock};
use crate::particles::ParticleField;
use crate::stopwatch::{Stopwatch, TickContext, TickOutcome};
use crate::tick::TickTask;

pub use settings::ALERT_STEP_SECS;

/// Everything [`App::new`] needs from the outside world.
pub struct AppInit {
    pub clock: Arc<dyn Clock>,
    pub store: Box<dyn KeyValueStore>,
    pub alert_sink: Box<dyn AlertSink>,
    pub ui_options: UiOptions,
    /// Initial city key; unknown or missing keys show Tokyo.
    pub city: Option<String>,
}

impl AppInit {
    /// Production wiring: system clock, file-backed store, terminal bell.
    ///
    /// Falls back to an in-memory store when no storage path can be resolved.
    #[must_use]
    pub fn from_config(config: Option<&LapwatchConfig>) -> Self {
        let app = config.and_then(LapwatchConfig::app);
        let storage_path = config.map_or_else(
            lapwatch_config::default_storage_path,
            LapwatchConfig::storage_path,
        );

        let store: Box<dyn KeyValueStore> = match storage_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using preference storage");
                Box::new(FileStore::new(path))
            }
            None => {
                tracing::warn!("No home directory; preferences will not persist");
                Box::new(MemoryStore::new())
            }
        };

        Self {
            clock: Arc::new(SystemClock),
            store,
            alert_sink: Box::new(BellSink),
            ui_options: UiOptions {
                ascii_only: app.is_some_and(|a| a.ascii_only),
                high_contrast: app.is_some_and(|a| a.high_contrast),
                reduced_motion: app.is_some_and(|a| a.reduced_motion),
            },
            city: app.and_then(|a| a.city.clone()),
        }
    }
}

pub struct App {
    clock: Arc<dyn Clock>,
    stopwatch: Stopwatch,
    live_clock: LiveClock,
    clock_ticker: TickTask,
    clock_snapshot: ClockSnapshot,
    prefs: Preferences,
    store: Box<dyn KeyValueStore>,
    theme: Theme,
    alert_sink: Box<dyn AlertSink>,
    alert_tone: AlertTone,
    flash: Option<FlashEffect>,
    pulse: PulseEffect,
    particles: Option<ParticleField>,
    input_mode: InputMode,
    settings_open: bool,
    ui_options: UiOptions,
    notice: Option<String>,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    /// Build the app, load preferences and apply the stored theme.
    ///
    /// Must be called inside a tokio runtime: it spawns the live-clock tick task.
    #[must_use]
    pub fn new(init: AppInit) -> Self {
        let AppInit {
            clock,
            store,
            alert_sink,
            ui_options,
            city,
        } = init;

        let prefs = load_preferences(store.as_ref());
        let live_clock = city.as_deref().map(LiveClock::new).unwrap_or_default();
        let clock_snapshot = live_clock.snapshot(clock.now_utc());

        let mut app = Self {
            stopwatch: Stopwatch::new(Arc::clone(&clock)),
            clock,
            live_clock,
            clock_ticker: TickTask::spawn(CLOCK_POLL_PERIOD),
            clock_snapshot,
            prefs,
            store,
            theme: Theme::Day,
            alert_sink,
            alert_tone: AlertTone::default(),
            flash: None,
            pulse: PulseEffect::new(),
            particles: None,
            input_mode: InputMode::Normal,
            settings_open: false,
            ui_options,
            notice: None,
            last_frame: Instant::now(),
            should_quit: false,
        };
        app.enter_theme_mode(prefs.theme);
        tracing::info!(
            theme = %prefs.theme,
            city = app.live_clock.city().key,
            "lapwatch initialized"
        );
        app
    }

    // ---------------------------------------------------------------------
    // Stopwatch
    // ---------------------------------------------------------------------

    pub fn start(&mut self) {
        self.stopwatch.start();
    }

    pub fn stop(&mut self) {
        self.stopwatch.stop();
    }

    pub fn toggle_running(&mut self) {
        if self.stopwatch.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.stopwatch.reset();
        if self.prefs.theme == ThemeMode::Cycle {
            self.apply_theme(THEME_CYCLE[0]);
        }
    }

    pub fn lap(&mut self) -> Option<LapRecord> {
        self.stopwatch.lap()
    }

    pub fn clear_laps(&mut self) {
        self.stopwatch.clear_laps();
    }

    #[must_use]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    // ---------------------------------------------------------------------
    // Frame loop
    // ---------------------------------------------------------------------

    /// Advance effects and drain both tick tasks. Called once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance_effects(delta);

        if let Some(outcome) = self.stopwatch.poll(self.tick_context()) {
            self.apply_tick_outcome(outcome);
        }

        if self.clock_ticker.drain() > 0 {
            self.refresh_clock();
        }
    }

    /// Step the time-based effects by `delta`. Frozen under reduced motion.
    pub fn advance_effects(&mut self, delta: Duration) {
        if let Some(flash) = self.flash.as_mut() {
            flash.advance(delta);
            if flash.intensity() <= 0.0 {
                self.flash = None;
            }
        }
        if self.ui_options.reduced_motion {
            return;
        }
        if self.prefs.pulse_effect {
            self.pulse.advance(delta);
        }
        if let Some(field) = self.particles.as_mut() {
            field.step(delta);
        }
    }

    fn tick_context(&self) -> TickContext {
        TickContext {
            theme_mode: self.prefs.theme,
            alert_time: self.prefs.alert_time,
            sound_enabled: self.prefs.sound_enabled,
        }
    }

    fn apply_tick_outcome(&mut self, outcome: TickOutcome) {
        if let Some(theme) = outcome.theme {
            self.apply_theme(theme);
        }
        if outcome.alert {
            self.fire_alert();
        }
    }

    fn fire_alert(&mut self) {
        self.alert_sink.play(&self.alert_tone);
        if !self.ui_options.reduced_motion {
            self.flash = Some(FlashEffect::new(self.alert_tone.duration));
        }
    }

    fn refresh_clock(&mut self) {
        self.clock_snapshot = self.live_clock.snapshot(self.clock.now_utc());
    }

    fn apply_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            tracing::debug!(from = %self.theme, to = %theme, "Theme applied");
            self.theme = theme;
        }
    }

    // ---------------------------------------------------------------------
    // Read-only state for rendering
    // ---------------------------------------------------------------------

    /// Palette currently applied.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    #[must_use]
    pub fn clock_snapshot(&self) -> &ClockSnapshot {
        &self.clock_snapshot
    }

    #[must_use]
    pub fn live_clock(&self) -> LiveClock {
        self.live_clock
    }

    /// Alert flash strength, `0.0` when no flash is showing.
    #[must_use]
    pub fn flash_intensity(&self) -> f32 {
        self.flash.as_ref().map_or(0.0, FlashEffect::intensity)
    }

    /// Digit brightness when the pulse effect is on.
    #[must_use]
    pub fn pulse_intensity(&self) -> Option<f32> {
        self.prefs.pulse_effect.then(|| self.pulse.intensity())
    }

    /// The particle field sized to `width` x `height`, if particles are enabled.
    ///
    /// Creates the field on first use and follows terminal resizes.
    pub fn particle_field(&mut self, width: u16, height: u16) -> Option<&ParticleField> {
        if !self.prefs.particles_effect {
            return None;
        }
        match self.particles.as_mut() {
            Some(field) if field.bounds() != (width, height) => field.resize(width, height),
            Some(_) => {}
            None => self.particles = Some(ParticleField::new(width, height)),
        }
        self.particles.as_ref()
    }

    #[must_use]
    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    #[must_use]
    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
