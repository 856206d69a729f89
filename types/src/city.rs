//! Static city catalog for the live clock.

/// A city the live clock can display.
///
/// Local time comes from the IANA `timezone`, so daylight saving applies.
/// `utc_offset_hours` is the standard offset, used for the `UTC+N` label and
/// as the fallback when the zone name cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub key: &'static str,
    pub name: &'static str,
    pub short: &'static str,
    pub timezone: &'static str,
    pub utc_offset_hours: i8,
}

impl City {
    /// `+9`, `+0`, `-5`: the signed offset label shown after `UTC`.
    #[must_use]
    pub fn offset_label(&self) -> String {
        format!("{:+}", self.utc_offset_hours)
    }

    #[must_use]
    pub fn offset_seconds(&self) -> i32 {
        i32::from(self.utc_offset_hours) * 3_600
    }
}

pub const CITIES: [City; 7] = [
    City {
        key: "tokyo",
        name: "Tokyo, Japan",
        short: "Tokyo",
        timezone: "Asia/Tokyo",
        utc_offset_hours: 9,
    },
    City {
        key: "london",
        name: "London, United Kingdom",
        short: "London",
        timezone: "Europe/London",
        utc_offset_hours: 0,
    },
    City {
        key: "newyork",
        name: "New York, United States",
        short: "New York",
        timezone: "America/New_York",
        utc_offset_hours: -5,
    },
    City {
        key: "losangeles",
        name: "Los Angeles, United States",
        short: "Los Angeles",
        timezone: "America/Los_Angeles",
        utc_offset_hours: -8,
    },
    City {
        key: "paris",
        name: "Paris, France",
        short: "Paris",
        timezone: "Europe/Paris",
        utc_offset_hours: 1,
    },
    City {
        key: "sydney",
        name: "Sydney, Australia",
        short: "Sydney",
        timezone: "Australia/Sydney",
        utc_offset_hours: 10,
    },
    City {
        key: "hongkong",
        name: "Hong Kong, China",
        short: "Hong Kong",
        timezone: "Asia/Hong_Kong",
        utc_offset_hours: 8,
    },
];

pub const DEFAULT_CITY: City = CITIES[0];

/// Look up a city by key; unknown keys resolve to Tokyo.
#[must_use]
pub fn city_by_key(key: &str) -> City {
    let key = key.trim().to_ascii_lowercase();
    CITIES
        .iter()
        .copied()
        .find(|city| city.key == key)
        .unwrap_or(DEFAULT_CITY)
}

/// Day between 06:00 and 17:59 local time, night otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        if hour >= 6 && hour < 18 {
            DayPhase::Day
        } else {
            DayPhase::Night
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DayPhase::Day => "Day",
            DayPhase::Night => "Night",
        }
    }
}
