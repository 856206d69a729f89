//! Theme selection: the user-facing mode and the concrete palettes it resolves to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A concrete palette the renderer can paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Day,
    Night,
    Ocean,
    Sunset,
    Forest,
    Purple,
    Pink,
    Minimal,
}

/// Fixed rotation used by [`ThemeMode::Cycle`].
pub const THEME_CYCLE: [Theme; 8] = [
    Theme::Day,
    Theme::Night,
    Theme::Ocean,
    Theme::Sunset,
    Theme::Forest,
    Theme::Purple,
    Theme::Pink,
    Theme::Minimal,
];

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Purple => "purple",
            Theme::Pink => "pink",
            Theme::Minimal => "minimal",
        }
    }

    /// Theme for a given 30-second cycle slot, wrapping around the rotation.
    #[must_use]
    pub const fn for_cycle_slot(slot: u64) -> Self {
        THEME_CYCLE[(slot % THEME_CYCLE.len() as u64) as usize]
    }

    /// Day for wall-clock seconds 0..=30, night for 31..=59.
    #[must_use]
    pub const fn for_wall_second(second: u64) -> Self {
        if second % 60 <= 30 {
            Theme::Day
        } else {
            Theme::Night
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user selected in the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Day/night keyed to the wall-clock second.
    #[default]
    Auto,
    /// Rotate through [`THEME_CYCLE`] every 30 elapsed seconds.
    Cycle,
    Day,
    Night,
    Ocean,
    Sunset,
    Forest,
    Purple,
    Pink,
    Minimal,
}

/// Picker order, used when stepping through modes with a single key.
pub const THEME_MODES: [ThemeMode; 10] = [
    ThemeMode::Auto,
    ThemeMode::Cycle,
    ThemeMode::Day,
    ThemeMode::Night,
    ThemeMode::Ocean,
    ThemeMode::Sunset,
    ThemeMode::Forest,
    ThemeMode::Purple,
    ThemeMode::Pink,
    ThemeMode::Minimal,
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Cycle => "cycle",
            ThemeMode::Day => "day",
            ThemeMode::Night => "night",
            ThemeMode::Ocean => "ocean",
            ThemeMode::Sunset => "sunset",
            ThemeMode::Forest => "forest",
            ThemeMode::Purple => "purple",
            ThemeMode::Pink => "pink",
            ThemeMode::Minimal => "minimal",
        }
    }

    /// The palette this mode pins, or `None` for the dynamic modes.
    #[must_use]
    pub const fn fixed(self) -> Option<Theme> {
        match self {
            ThemeMode::Auto | ThemeMode::Cycle => None,
            ThemeMode::Day => Some(Theme::Day),
            ThemeMode::Night => Some(Theme::Night),
            ThemeMode::Ocean => Some(Theme::Ocean),
            ThemeMode::Sunset => Some(Theme::Sunset),
            ThemeMode::Forest => Some(Theme::Forest),
            ThemeMode::Purple => Some(Theme::Purple),
            ThemeMode::Pink => Some(Theme::Pink),
            ThemeMode::Minimal => Some(Theme::Minimal),
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let pos = THEME_MODES.iter().position(|m| *m == self).unwrap_or(0);
        THEME_MODES[(pos + 1) % THEME_MODES.len()]
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        THEME_MODES
            .iter()
            .copied()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
