use std::fmt;

use serde::{Deserialize, Serialize};

/// Duration used when the typed value is not a 32-bit integer
pub const DEFAULT_DURATION_HOURS: i32 = 1;

/// A completed booking. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingRecord {
    pub sport_type: String,
    pub date: String,
    pub time: String,
    pub duration: i32,
    pub name: String,
}

impl BookingRecord {
    pub fn new(
        sport_type: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        duration: i32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            sport_type: sport_type.into(),
            date: date.into(),
            time: time.into(),
            duration,
            name: name.into(),
        }
    }

    pub fn duration_label(&self) -> String {
        if self.duration == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", self.duration)
        }
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} at {} ({}) for {}",
            self.sport_type,
            self.date,
            self.time,
            self.duration_label(),
            self.name
        )
    }
}

/// Parses the duration field as typed, surrounding whitespace included.
/// Anything that is not a signed 32-bit integer falls back to
/// [`DEFAULT_DURATION_HOURS`].
pub fn parse_duration(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(DEFAULT_DURATION_HOURS)
}

/// Raw text of the four booking fields as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingDraft<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub duration: &'a str,
    pub name: &'a str,
}

impl<'a> BookingDraft<'a> {
    /// True when no field is blank. Duration is checked as text, not as a number.
    pub fn is_complete(&self) -> bool {
        [self.date, self.time, self.duration, self.name]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn to_record(&self, sport_type: &str) -> BookingRecord {
        BookingRecord::new(
            sport_type,
            self.date,
            self.time,
            parse_duration(self.duration),
            self.name,
        )
    }
}
