//! Trip date-range validation.
//!
//! Rules are checked without short-circuiting so the caller can render every
//! violated rule as per-field form feedback in one pass. "Today" is supplied
//! by the caller, computed once per validation, which keeps these functions
//! pure and lets tests pin the clock.

use crate::CalendarDate;
use crate::prelude::*;

/// Form field a violation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "startDate")]
    StartDate,
    #[display(fmt = "endDate")]
    EndDate,
}

/// The business rule a violation was raised under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The field must be non-empty.
    Required,
    /// The field is present but is not a decodable calendar date.
    Unparseable,
    /// The start date is earlier than today.
    InPast,
    /// The end date is earlier than the start date.
    OutOfOrder,
}

/// A violated trip-date rule, carrying the field it applies to and a fixed
/// human-readable message for direct rendering as form feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Violation {
    #[error("Start date is required")]
    StartRequired,
    #[error("End date is required")]
    EndRequired,
    #[error("Start date is not a valid calendar date")]
    StartUnparseable,
    #[error("End date is not a valid calendar date")]
    EndUnparseable,
    #[error("Start date cannot be in the past")]
    StartInPast,
    #[error("End date must be after start date")]
    EndBeforeStart,
}

impl Violation {
    /// The form field this violation is attached to.
    pub const fn field(self) -> Field {
        match self {
            Self::StartRequired | Self::StartUnparseable | Self::StartInPast => Field::StartDate,
            Self::EndRequired | Self::EndUnparseable | Self::EndBeforeStart => Field::EndDate,
        }
    }

    /// The rule that was violated.
    pub const fn rule(self) -> Rule {
        match self {
            Self::StartRequired | Self::EndRequired => Rule::Required,
            Self::StartUnparseable | Self::EndUnparseable => Rule::Unparseable,
            Self::StartInPast => Rule::InPast,
            Self::EndBeforeStart => Rule::OutOfOrder,
        }
    }

    /// Human-readable message, suitable for per-field error text.
    pub fn message(self) -> String {
        self.to_string()
    }
}

/// Checks a proposed trip's start and end date strings against every rule
/// and reports all violations, not just the first.
///
/// A start date equal to `today` is valid, as is a single-day trip where
/// start and end coincide. Malformed-but-present strings are reported as
/// unparseable; they never crash the validator and never pass silently.
/// An empty result means the range is acceptable.
pub fn validate_trip_dates(start: &str, end: &str, today: CalendarDate) -> Vec<Violation> {
    let mut violations = Vec::new();
    let start = start.trim();
    let end = end.trim();

    if start.is_empty() {
        violations.push(Violation::StartRequired);
    }
    if end.is_empty() {
        violations.push(Violation::EndRequired);
    }

    let start_date = decode_present(start, Violation::StartUnparseable, &mut violations);
    let end_date = decode_present(end, Violation::EndUnparseable, &mut violations);

    if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
        if start_date < today {
            violations.push(Violation::StartInPast);
        }
        if end_date < start_date {
            violations.push(Violation::EndBeforeStart);
        }
    }

    violations
}

fn decode_present(
    value: &str,
    on_failure: Violation,
    violations: &mut Vec<Violation>,
) -> Option<CalendarDate> {
    if value.is_empty() {
        return None;
    }
    match value.parse::<CalendarDate>() {
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(on_failure);
            None
        }
    }
}

/// A validated (start, end) pair of calendar days, ready to be placed in an
/// itinerary payload as two canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct TripRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl TripRange {
    /// Validates the user-entered strings and builds the pair.
    ///
    /// # Errors
    /// Returns every violated rule when the strings do not form an
    /// acceptable range.
    pub fn from_strs(start: &str, end: &str, today: CalendarDate) -> Result<Self, Vec<Violation>> {
        let violations = validate_trip_dates(start, end, today);
        if !violations.is_empty() {
            return Err(violations);
        }
        // An empty violation list implies both strings decode.
        let start = start
            .trim()
            .parse()
            .map_err(|_| vec![Violation::StartUnparseable])?;
        let end = end
            .trim()
            .parse()
            .map_err(|_| vec![Violation::EndUnparseable])?;
        Ok(Self { start, end })
    }

    /// Returns the start date of the trip
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the trip
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Number of nights between start and end; zero for a single-day trip.
    pub fn nights(&self) -> i64 {
        self.end
            .to_naive()
            .signed_duration_since(self.start.to_naive())
            .num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use crate::{decode, encode};
    use chrono::Duration;

    fn today() -> CalendarDate {
        date(2025, 6, 10)
    }

    #[test]
    fn test_start_equal_to_today_is_valid() {
        let violations = validate_trip_dates("2025-06-10", "2025-06-15", today());
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn test_start_in_past_is_flagged() {
        let violations = validate_trip_dates("2025-06-09", "2025-06-15", today());
        assert_eq!(violations, vec![Violation::StartInPast]);
        assert_eq!(violations[0].field(), Field::StartDate);
        assert_eq!(violations[0].rule(), Rule::InPast);
        assert_eq!(violations[0].message(), "Start date cannot be in the past");
    }

    #[test]
    fn test_end_before_start_is_flagged() {
        let violations = validate_trip_dates("2025-06-15", "2025-06-10", today());
        assert_eq!(violations, vec![Violation::EndBeforeStart]);
        assert_eq!(violations[0].field(), Field::EndDate);
        assert_eq!(violations[0].message(), "End date must be after start date");
    }

    #[test]
    fn test_single_day_trip_is_valid() {
        let violations = validate_trip_dates("2025-06-10", "2025-06-10", today());
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn test_required_fields() {
        let violations = validate_trip_dates("", "", today());
        assert_eq!(
            violations,
            vec![Violation::StartRequired, Violation::EndRequired]
        );
        assert_eq!(violations[0].field(), Field::StartDate);
        assert_eq!(violations[1].field(), Field::EndDate);
        assert_eq!(violations[0].message(), "Start date is required");
        assert_eq!(violations[1].message(), "End date is required");

        let violations = validate_trip_dates("  ", "2025-06-15", today());
        assert_eq!(violations, vec![Violation::StartRequired]);
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        // Past start and reversed order are both reported, not just the first
        let violations = validate_trip_dates("2025-06-08", "2025-06-05", today());
        assert_eq!(
            violations,
            vec![Violation::StartInPast, Violation::EndBeforeStart]
        );
    }

    #[test]
    fn test_malformed_input_never_passes_silently() {
        let violations = validate_trip_dates("2025-02-30", "2025-06-15", today());
        assert_eq!(violations, vec![Violation::StartUnparseable]);
        assert_eq!(violations[0].rule(), Rule::Unparseable);

        let violations = validate_trip_dates("2025-06-12", "not a date", today());
        assert_eq!(violations, vec![Violation::EndUnparseable]);
    }

    #[test]
    fn test_field_display_names() {
        assert_eq!(Field::StartDate.to_string(), "startDate");
        assert_eq!(Field::EndDate.to_string(), "endDate");
    }

    #[test]
    fn test_trip_range_from_strs() {
        let range = TripRange::from_strs("2025-06-10", "2025-06-17", today())
            .expect("valid range must build");
        assert_eq!(range.start(), date(2025, 6, 10));
        assert_eq!(range.end(), date(2025, 6, 17));
        assert_eq!(range.dates(), (date(2025, 6, 10), date(2025, 6, 17)));
        assert_eq!(range.nights(), 7);
        assert_eq!(range.to_string(), "2025-06-10/2025-06-17");
    }

    #[test]
    fn test_trip_range_single_day() {
        let range = TripRange::from_strs("2025-06-10", "2025-06-10", today())
            .expect("single-day trip must build");
        assert_eq!(range.nights(), 0);
    }

    #[test]
    fn test_trip_range_surfaces_violations() {
        let err = TripRange::from_strs("2025-06-09", "2025-06-05", today())
            .expect_err("invalid range must not build");
        assert_eq!(err, vec![Violation::StartInPast, Violation::EndBeforeStart]);
    }

    #[test]
    fn test_late_evening_pick_end_to_end() {
        // User picks a start date at 23:59 local time and an end date a week
        // later. The encoded strings keep the picked calendar day, and the
        // validator accepts the pair with today set to the pick's day.
        let picked_start = date(2025, 11, 28)
            .to_naive()
            .and_hms_opt(23, 59, 0)
            .expect("valid time");
        let picked_end = picked_start + Duration::days(7);

        let start_str = encode(&picked_start);
        let end_str = encode(&picked_end);
        assert_eq!(start_str, "2025-11-28");
        assert_eq!(end_str, "2025-12-05");

        let pick_day = CalendarDate::from_datelike(&picked_start).expect("in-range date");
        let violations = validate_trip_dates(&start_str, &end_str, pick_day);
        assert!(violations.is_empty(), "unexpected: {violations:?}");

        // And the wire strings still decode to local midnight of those days
        assert_eq!(
            decode(&start_str).expect("valid date").date(),
            pick_day.to_naive()
        );
    }
}
