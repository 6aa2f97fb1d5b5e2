mod consts;
mod display;
mod prelude;
mod types;
mod validate;

pub use consts::*;
pub use display::{DateInput, format_for_display};
pub use types::{Day, Month, Year};
pub use validate::{Field, Rule, TripRange, Violation, validate_trip_dates};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A calendar day with no time-of-day and no timezone component.
///
/// Every value names a real day on the Gregorian calendar: the components are
/// validated at construction, and the canonical textual form is `YYYY-MM-DD`.
/// A day chosen on a local wall clock stays that day; nothing in this type
/// ever routes through a UTC conversion, so the "picked at 23:59, stored as
/// yesterday" failure mode cannot occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// The earliest representable date, `0001-01-01`.
    pub const MIN: Self = Self {
        year: Year::MIN,
        month: Month::MIN,
        day: Day::MIN,
    };

    /// Creates a date from numeric components, validating each of them.
    ///
    /// # Errors
    /// Returns a `ParseError` naming the first out-of-range component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Creates a date from any chrono date-like value, reading only its
    /// calendar fields (year, month, day).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for years outside `1..=MAX_YEAR`.
    pub fn from_datelike<D: Datelike>(value: &D) -> Result<Self, ParseError> {
        let year =
            u16::try_from(value.year()).map_err(|_| ParseError::InvalidYear(value.year()))?;
        // chrono months and days always fit in u8
        let month = u8::try_from(value.month()).unwrap_or(u8::MAX);
        let day = u8::try_from(value.day()).unwrap_or(u8::MAX);
        Self::new(year, month, day)
    }

    /// Today's calendar day on the local wall clock.
    pub fn today() -> Self {
        // The local clock always falls inside the supported year range.
        Self::from_datelike(&Local::now().date_naive()).unwrap_or(Self::MIN)
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The same calendar day as a chrono `NaiveDate`.
    pub fn to_naive(self) -> NaiveDate {
        // Components are validated at construction, so chrono accepts them.
        NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        )
        .unwrap_or(NaiveDate::MIN)
    }

    /// Local midnight for this calendar day. Hour, minute and second are all
    /// zero; no timezone offset is applied.
    pub fn midnight(self) -> NaiveDateTime {
        self.to_naive().and_time(NaiveTime::MIN)
    }
}

/// Encodes a date-like value as the canonical `YYYY-MM-DD` string.
///
/// Only the value's calendar fields are read. The output never depends on a
/// UTC conversion, so encoding a datetime picked at 23:59 local time keeps
/// the picked calendar day rather than rolling into an adjacent one.
pub fn encode<D: Datelike>(date: &D) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Decodes a canonical `YYYY-MM-DD` string to local midnight of that day.
///
/// # Errors
/// Returns a `ParseError` for malformed input or a non-existent calendar day.
pub fn decode(input: &str) -> Result<NaiveDateTime, ParseError> {
    input.parse::<CalendarDate>().map(CalendarDate::midnight)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != DATE_SEGMENTS {
            return Err(ParseError::InvalidFormat(format!(
                "expected year{sep}month{sep}day, found {found} segment(s) in {trimmed:?}",
                sep = DATE_SEPARATOR,
                found = parts.len(),
            )));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::CalendarDate;

    pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("test date must be a real calendar day")
    }
}
