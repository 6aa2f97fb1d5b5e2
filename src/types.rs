use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999).
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Year 1, the earliest supported year.
    pub const MIN: Self = Self(NonZeroU16::MIN);

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(i32::from(value)));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(i32::from(value)))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// January.
    pub const MIN: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// The first of the month.
    pub const MIN: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating it against the given year and month.
    /// Calendar overflow (`2025-02-30` and the like) is rejected here rather
    /// than silently rolling into the next month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or exceeds the
    /// month's length (leap-February included).
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
