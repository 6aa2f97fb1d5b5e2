//! Display formatting for itinerary dates that arrive in mixed shapes.
//!
//! Upstream records carry dates inconsistently: bare `YYYY-MM-DD` strings,
//! ISO 8601 datetimes with a spurious time suffix, or raw epoch-second
//! timestamps. This module is the single choke point that turns all of them
//! into one display convention without ever shifting the calendar day.

use crate::CalendarDate;
use crate::consts::{DISPLAY_FORMAT, INVALID_DATE, NO_DATE, TIME_SUFFIX_SEPARATOR};
use chrono::{DateTime, Local};
use log::warn;

/// A date value as it arrives from an upstream record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// Textual date: canonical `YYYY-MM-DD`, possibly with an ISO 8601 time
    /// suffix (`...T...`) appended by the backend.
    Text(&'a str),
    /// Whole seconds since the Unix epoch, from a server-side timestamp.
    EpochSeconds(i64),
    /// No value present in the record.
    Missing,
}

/// Outcome of rendering, kept as a tagged union so the three-way fallback
/// policy stays explicit even though the public surface returns a `String`.
enum Rendered {
    /// A successfully formatted date label.
    Formatted(String),
    /// A fixed placeholder for absent or unconvertible input.
    Placeholder(&'static str),
    /// The original text, passed through because it could not be decoded.
    Fallback(String),
}

impl Rendered {
    fn into_string(self) -> String {
        match self {
            Self::Formatted(s) | Self::Fallback(s) => s,
            Self::Placeholder(s) => s.to_owned(),
        }
    }
}

/// Produces a human-readable date label ("Feb 5, 2026") from whatever shape
/// the upstream value has.
///
/// Absent input yields the `NO_DATE` placeholder, an unconvertible timestamp
/// yields `INVALID_DATE`, and undecodable text is returned unchanged so the
/// caller can still show something. Never panics.
pub fn format_for_display(input: DateInput<'_>) -> String {
    render(input).into_string()
}

fn render(input: DateInput<'_>) -> Rendered {
    match input {
        DateInput::Missing => Rendered::Placeholder(NO_DATE),
        DateInput::Text(raw) if raw.trim().is_empty() => Rendered::Placeholder(NO_DATE),
        DateInput::Text(raw) => render_text(raw),
        DateInput::EpochSeconds(seconds) => render_timestamp(seconds),
    }
}

fn render_text(raw: &str) -> Rendered {
    // A time suffix says nothing about which day the trip falls on; only the
    // calendar-date prefix matters.
    let day_part = raw
        .split_once(TIME_SUFFIX_SEPARATOR)
        .map_or(raw, |(date, _)| date);

    match day_part.trim().parse::<CalendarDate>() {
        Ok(date) => Rendered::Formatted(date.to_naive().format(DISPLAY_FORMAT).to_string()),
        Err(err) => {
            warn!("unparseable itinerary date {raw:?}: {err}");
            Rendered::Fallback(raw.to_owned())
        }
    }
}

fn render_timestamp(seconds: i64) -> Rendered {
    // A timestamp is an exact instant, so converting it through the local
    // zone is unambiguous here, unlike for bare calendar-day strings.
    match DateTime::from_timestamp(seconds, 0) {
        Some(instant) => Rendered::Formatted(
            instant
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
        ),
        None => Rendered::Placeholder(INVALID_DATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_string() {
        assert_eq!(
            format_for_display(DateInput::Text("2026-02-05")),
            "Feb 5, 2026"
        );
        assert_eq!(
            format_for_display(DateInput::Text("2025-12-31")),
            "Dec 31, 2025"
        );
    }

    #[test]
    fn test_day_numbers_are_not_padded() {
        assert_eq!(
            format_for_display(DateInput::Text("2025-06-09")),
            "Jun 9, 2025"
        );
    }

    #[test]
    fn test_iso_time_suffix_is_discarded() {
        // The backend sometimes stores a spurious time-of-day; the label must
        // reflect the date prefix, not a zone-shifted rendering of the instant.
        assert_eq!(
            format_for_display(DateInput::Text("2026-02-05T23:30:00Z")),
            "Feb 5, 2026"
        );
        assert_eq!(
            format_for_display(DateInput::Text("2026-02-05T00:00:00.000+11:00")),
            "Feb 5, 2026"
        );
    }

    #[test]
    fn test_missing_and_empty_yield_placeholder() {
        assert_eq!(format_for_display(DateInput::Missing), NO_DATE);
        assert_eq!(format_for_display(DateInput::Text("")), NO_DATE);
        assert_eq!(format_for_display(DateInput::Text("   ")), NO_DATE);
    }

    #[test]
    fn test_undecodable_text_falls_back_to_original() {
        assert_eq!(
            format_for_display(DateInput::Text("sometime next week")),
            "sometime next week"
        );
        // Overflowed calendar days are undecodable, not silently rolled over
        assert_eq!(
            format_for_display(DateInput::Text("2025-02-30")),
            "2025-02-30"
        );
    }

    #[test]
    fn test_epoch_seconds_format_with_local_clock() {
        let seconds = 1_770_000_000;
        let expected = DateTime::from_timestamp(seconds, 0)
            .expect("in-range timestamp")
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
        assert_eq!(format_for_display(DateInput::EpochSeconds(seconds)), expected);
    }

    #[test]
    fn test_out_of_range_timestamp_yields_placeholder() {
        assert_eq!(
            format_for_display(DateInput::EpochSeconds(i64::MAX)),
            INVALID_DATE
        );
        assert_eq!(
            format_for_display(DateInput::EpochSeconds(i64::MIN)),
            INVALID_DATE
        );
    }
}
