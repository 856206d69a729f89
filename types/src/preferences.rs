//! User preferences persisted between sessions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::ThemeMode;

/// Alert threshold used when nothing valid was configured.
pub const DEFAULT_ALERT_SECS: u32 = 60;

/// Settings the user can change at runtime.
///
/// The serialized shape is the stored payload:
/// `{theme, soundEnabled, alertTime, pulseEffect, particlesEffect}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: ThemeMode,
    pub sound_enabled: bool,
    pub alert_time: u32,
    pub pulse_effect: bool,
    pub particles_effect: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            sound_enabled: true,
            alert_time: DEFAULT_ALERT_SECS,
            pulse_effect: false,
            particles_effect: false,
        }
    }
}

impl Preferences {
    /// Parse a stored payload, keeping defaults for anything missing or mistyped.
    ///
    /// Only a payload that is not JSON at all, or not an object, is an error.
    /// A bad value in one field never discards the others.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(fields) = value else {
            return Err(serde::de::Error::custom("preferences payload is not an object"));
        };

        let mut prefs = Self::default();

        if let Some(theme) = fields
            .get("theme")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<ThemeMode>().ok())
        {
            prefs.theme = theme;
        }
        if let Some(sound) = fields.get("soundEnabled").and_then(Value::as_bool) {
            prefs.sound_enabled = sound;
        }
        if let Some(alert) = fields
            .get("alertTime")
            .and_then(Value::as_u64)
            .and_then(|secs| u32::try_from(secs).ok())
            .filter(|secs| *secs > 0)
        {
            prefs.alert_time = alert;
        }
        if let Some(pulse) = fields.get("pulseEffect").and_then(Value::as_bool) {
            prefs.pulse_effect = pulse;
        }
        if let Some(particles) = fields.get("particlesEffect").and_then(Value::as_bool) {
            prefs.particles_effect = particles;
        }

        Ok(prefs)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Parse user-entered alert seconds.
///
/// Reads the leading run of digits, so `"90s"` is 90. Empty, non-numeric,
/// zero, negative and out-of-range input all fall back to
/// [`DEFAULT_ALERT_SECS`].
#[must_use]
pub fn parse_alert_time(input: &str) -> u32 {
    let digits: String = input
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits
        .parse::<u32>()
        .ok()
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_ALERT_SECS)
}
