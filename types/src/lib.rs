//! Core domain types for lapwatch.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod city;
mod elapsed;
mod lap;
mod preferences;
mod theme;
pub mod ui;

pub use city::{CITIES, City, DEFAULT_CITY, DayPhase, city_by_key};
pub use elapsed::{ElapsedParts, whole_seconds};
pub use lap::{LapLog, LapRecord};
pub use preferences::{DEFAULT_ALERT_SECS, Preferences, parse_alert_time};
pub use theme::{THEME_CYCLE, THEME_MODES, Theme, ThemeMode, UnknownTheme};
