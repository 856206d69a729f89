//! Live time-of-day display for a selectable city.

use std::time::Duration;

use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use lapwatch_types::{CITIES, City, DEFAULT_CITY, DayPhase, city_by_key};

pub const CLOCK_POLL_PERIOD: Duration = Duration::from_millis(100);

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Display strings derived from one instant in the selected city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
    /// `Sun · 09:05`
    pub hero_date: String,
    /// `Sunday, Oct 18, 2026`
    pub full_date: String,
    pub location_name: &'static str,
    pub location_short: &'static str,
    /// `UTC+9 · Day`
    pub meta: String,
    /// `09:05`
    pub city_time: String,
    pub phase: DayPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveClock {
    city: City,
}

impl Default for LiveClock {
    fn default() -> Self {
        Self { city: DEFAULT_CITY }
    }
}

impl LiveClock {
    #[must_use]
    pub fn new(city_key: &str) -> Self {
        Self {
            city: city_by_key(city_key),
        }
    }

    #[must_use]
    pub fn city(&self) -> City {
        self.city
    }

    pub fn select(&mut self, city_key: &str) {
        self.city = city_by_key(city_key);
    }

    /// Move through the catalog by `step`, wrapping at both ends.
    pub fn step(&mut self, step: isize) {
        let len = CITIES.len() as isize;
        let pos = CITIES
            .iter()
            .position(|c| c.key == self.city.key)
            .unwrap_or(0) as isize;
        self.city = CITIES[(pos + step).rem_euclid(len) as usize];
    }

    /// The city's IANA zone, if its name resolves.
    #[must_use]
    pub fn zone(&self) -> Option<Tz> {
        self.city.timezone.parse().ok()
    }

    /// Convert `now` into the city's local time, daylight saving included.
    ///
    /// Falls back to the standard offset when the zone is unknown.
    #[must_use]
    pub fn snapshot(&self, now: DateTime<Utc>) -> ClockSnapshot {
        match self.zone() {
            Some(zone) => self.format(&now.with_timezone(&zone)),
            None => {
                let offset = FixedOffset::east_opt(self.city.offset_seconds())
                    .unwrap_or_else(|| Utc.fix());
                self.format(&now.with_timezone(&offset))
            }
        }
    }

    fn format<Z: TimeZone>(&self, local: &DateTime<Z>) -> ClockSnapshot {
        let month0 = local.month0() as usize;
        let weekday = local.weekday().num_days_from_sunday() as usize;
        let hour = local.hour();
        let minute = local.minute();
        let phase = DayPhase::for_hour(hour);
        let meta = format!("UTC{} · {}", self.city.offset_label(), phase.label());

        ClockSnapshot {
            year: local.year().to_string(),
            month: format!("{:02}", month0 + 1),
            day: format!("{:02}", local.day()),
            hour: format!("{hour:02}"),
            minute: format!("{minute:02}"),
            second: format!("{:02}", local.second()),
            hero_date: format!("{} · {hour:02}:{minute:02}", WEEKDAYS_SHORT[weekday]),
            full_date: format!(
                "{}, {} {}, {}",
                WEEKDAYS[weekday],
                MONTHS[month0],
                local.day(),
                local.year()
            ),
            location_name: self.city.name,
            location_short: self.city.short,
            meta,
            city_time: format!("{hour:02}:{minute:02}"),
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use lapwatch_types::{CITIES, DayPhase};

    use super::LiveClock;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().expect("valid")
    }

    #[test]
    fn tokyo_is_nine_hours_ahead() {
        // 2026-10-18 00:05:07 UTC is a Sunday.
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 0, 5, 7).single().expect("valid");
        let snap = LiveClock::new("tokyo").snapshot(now);

        assert_eq!(
            (snap.year.as_str(), snap.month.as_str(), snap.day.as_str()),
            ("2026", "10", "18")
        );
        assert_eq!(
            (snap.hour.as_str(), snap.minute.as_str(), snap.second.as_str()),
            ("09", "05", "07")
        );
        assert_eq!(snap.hero_date, "Sun · 09:05");
        assert_eq!(snap.full_date, "Sunday, Oct 18, 2026");
        assert_eq!(snap.meta, "UTC+9 · Day");
        assert_eq!(snap.city_time, "09:05");
        assert_eq!(snap.location_name, "Tokyo, Japan");
    }

    #[test]
    fn negative_offset_crosses_back_a_day() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 3, 0, 0).single().expect("valid");
        let snap = LiveClock::new("losangeles").snapshot(now);

        assert_eq!(snap.full_date, "Wednesday, Dec 31, 2025");
        assert_eq!(snap.city_time, "19:00");
        assert_eq!(snap.phase, DayPhase::Night);
        assert_eq!(snap.meta, "UTC-8 · Night");
    }

    #[test]
    fn every_catalog_zone_resolves() {
        for city in CITIES {
            assert!(LiveClock::new(city.key).zone().is_some(), "{}", city.timezone);
        }
    }

    #[test]
    fn london_observes_summer_time() {
        let london = LiveClock::new("london");
        assert_eq!(london.snapshot(at(2026, 1, 15, 12, 0)).city_time, "12:00");

        let summer = london.snapshot(at(2026, 7, 1, 12, 0));
        assert_eq!(summer.city_time, "13:00");
        // The label keeps the standard offset.
        assert_eq!(summer.meta, "UTC+0 · Day");

        // 17:30 UTC is 18:30 BST, already night.
        assert_eq!(london.snapshot(at(2026, 7, 1, 17, 30)).phase, DayPhase::Night);
    }

    #[test]
    fn sydney_summer_time_runs_in_january() {
        let sydney = LiveClock::new("sydney");
        assert_eq!(sydney.snapshot(at(2026, 1, 1, 0, 0)).city_time, "11:00");
        assert_eq!(sydney.snapshot(at(2026, 7, 1, 0, 0)).city_time, "10:00");
    }

    #[test]
    fn new_york_shifts_with_daylight_saving() {
        let new_york = LiveClock::new("newyork");
        assert_eq!(new_york.snapshot(at(2026, 1, 15, 17, 0)).city_time, "12:00");
        assert_eq!(new_york.snapshot(at(2026, 7, 15, 17, 0)).city_time, "13:00");
    }

    #[test]
    fn unknown_city_falls_back_to_tokyo() {
        assert_eq!(LiveClock::new("gotham").city().key, "tokyo");
    }

    #[test]
    fn step_wraps_both_ways() {
        let mut clock = LiveClock::new("tokyo");
        clock.step(-1);
        assert_eq!(clock.city().key, "hongkong");
        clock.step(1);
        assert_eq!(clock.city().key, "tokyo");
        clock.step(2);
        assert_eq!(clock.city().key, "newyork");
    }
}
