//! Preference mutations. Every change here is persisted immediately.

use lapwatch_config::save_preferences;
use lapwatch_types::ui::{AlertDraft, InputMode};
use lapwatch_types::{Theme, ThemeMode, whole_seconds};

use super::App;

/// Step applied by the `+`/`-` alert shortcuts, in seconds.
pub const ALERT_STEP_SECS: u32 = 5;

impl App {
    /// Select a theme mode, apply its palette now, and persist it.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.prefs.theme = mode;
        self.enter_theme_mode(mode);
        self.persist();
    }

    /// Step to the next mode in picker order.
    pub fn cycle_theme_mode(&mut self) {
        self.set_theme_mode(self.prefs.theme.next());
    }

    /// Apply the palette for `mode` without persisting. Also used at startup.
    pub(super) fn enter_theme_mode(&mut self, mode: ThemeMode) {
        match mode {
            ThemeMode::Auto => {
                let now_secs = whole_seconds(self.clock.now_ms());
                self.apply_theme(Theme::for_wall_second(now_secs));
            }
            ThemeMode::Cycle => {
                self.stopwatch.reset_cycle();
                self.apply_theme(Theme::Day);
            }
            fixed => {
                if let Some(theme) = fixed.fixed() {
                    self.apply_theme(theme);
                }
            }
        }
    }

    pub fn toggle_sound(&mut self) {
        self.prefs.sound_enabled = !self.prefs.sound_enabled;
        self.persist();
    }

    /// Set the alert threshold. Zero falls back to the default.
    pub fn set_alert_time(&mut self, secs: u32) {
        self.prefs.alert_time = if secs == 0 {
            lapwatch_types::DEFAULT_ALERT_SECS
        } else {
            secs
        };
        self.persist();
    }

    /// Nudge the threshold by `steps` increments of [`ALERT_STEP_SECS`], never below one step.
    pub fn adjust_alert_time(&mut self, steps: i32) {
        let delta = i64::from(steps) * i64::from(ALERT_STEP_SECS);
        let next = (i64::from(self.prefs.alert_time) + delta)
            .clamp(i64::from(ALERT_STEP_SECS), i64::from(u32::MAX));
        self.set_alert_time(u32::try_from(next).unwrap_or(ALERT_STEP_SECS));
    }

    pub fn toggle_pulse(&mut self) {
        self.prefs.pulse_effect = !self.prefs.pulse_effect;
        self.persist();
    }

    /// Particles are dropped when turned off and re-seeded on the next frame when turned on.
    pub fn toggle_particles(&mut self) {
        self.prefs.particles_effect = !self.prefs.particles_effect;
        if !self.prefs.particles_effect {
            self.particles = None;
        }
        self.persist();
    }

    pub fn select_city(&mut self, key: &str) {
        self.live_clock.select(key);
        self.refresh_clock();
    }

    pub fn step_city(&mut self, step: isize) {
        self.live_clock.step(step);
        self.refresh_clock();
    }

    pub fn toggle_settings_panel(&mut self) {
        self.settings_open = !self.settings_open;
    }

    // ---------------------------------------------------------------------
    // Alert-time entry
    // ---------------------------------------------------------------------

    /// Focus the alert-time field, pre-filled with the current value.
    pub fn begin_alert_entry(&mut self) {
        let current = self.prefs.alert_time.to_string();
        self.input_mode = InputMode::AlertEntry(AlertDraft::new(&current));
    }

    pub fn push_alert_char(&mut self, c: char) {
        if let InputMode::AlertEntry(draft) = &mut self.input_mode {
            draft.push(c);
        }
    }

    pub fn alert_backspace(&mut self) {
        if let InputMode::AlertEntry(draft) = &mut self.input_mode {
            draft.backspace();
        }
    }

    /// Commit the draft; unparsable text commits the default.
    pub fn commit_alert_entry(&mut self) {
        if let InputMode::AlertEntry(draft) = std::mem::take(&mut self.input_mode) {
            self.set_alert_time(draft.seconds());
        }
    }

    pub fn cancel_alert_entry(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    fn persist(&mut self) {
        if save_preferences(self.store.as_mut(), &self.prefs) {
            self.notice = None;
        } else {
            self.notice = Some("Preferences could not be saved".to_string());
        }
    }
}
