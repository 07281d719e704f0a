//! Timestamp rendering for log lines and the start banner.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Source of the local wall-clock time stamped onto entries.
///
/// Swappable so tests can pin the time and assert exact lines.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Returns `None` when the components don't form a valid date and time.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Hour style for the `[HH:MM:SS]` stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

impl TimeFormat {
    #[must_use]
    pub const fn from_24_hour(use_24_hour: bool) -> Self {
        if use_24_hour {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }

    #[must_use]
    pub const fn is_24_hour(self) -> bool {
        matches!(self, Self::TwentyFourHour)
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::TwentyFourHour => "%H:%M:%S",
            // %I runs 01..=12, so noon is 12 PM and midnight is 12 AM.
            Self::TwelveHour => "%I:%M:%S %p",
        }
    }
}

/// `HH:MM:SS` or `HH:MM:SS AM|PM`.
#[must_use]
pub fn format_time(at: NaiveDateTime, format: TimeFormat) -> String {
    at.format(format.pattern()).to_string()
}

/// `MM/DD/YYYY`, one-based month.
#[must_use]
pub fn format_date(at: NaiveDateTime) -> String {
    at.format("%m/%d/%Y").to_string()
}
