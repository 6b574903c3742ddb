use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR, MONTH_NAMES};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Names one component of a date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// A single out-of-range date component, carrying the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldError {
    #[display(fmt = "Day must be between {} and {} (got {})", MIN_DAY, MAX_DAY, "_0")]
    Day(i64),
    #[display(fmt = "Month must be between {} and {} (got {})", MIN_MONTH, MAX_MONTH, "_0")]
    Month(i64),
    #[display(fmt = "Year must be between {} and {} (got {})", MIN_YEAR, MAX_YEAR, "_0")]
    Year(i64),
}

impl FieldError {
    /// The component that failed validation
    pub const fn field(&self) -> Field {
        match self {
            Self::Day(_) => Field::Day,
            Self::Month(_) => Field::Month,
            Self::Year(_) => Field::Year,
        }
    }

    /// The rejected value
    pub const fn value(&self) -> i64 {
        match *self {
            Self::Day(v) | Self::Month(v) | Self::Year(v) => v,
        }
    }
}

impl std::error::Error for FieldError {}

/// Narrows `value` into `lo..=hi`, returning `None` when it falls outside.
fn in_range<T>(value: i64, lo: T, hi: T) -> Option<T>
where
    T: TryFrom<i64> + PartialOrd,
{
    T::try_from(value).ok().filter(|v| *v >= lo && *v <= hi)
}

/// A day value guaranteed to be in the range `1..=MAX_DAY` (1..=31).
/// No per-month check is made: day 31 of February is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day
    ///
    /// # Errors
    /// Returns `FieldError::Day` if the value is outside `1..=31`.
    pub fn new(value: i64) -> Result<Self, FieldError> {
        in_range(value, MIN_DAY, MAX_DAY)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(FieldError::Day(value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month
    ///
    /// # Errors
    /// Returns `FieldError::Month` if the value is outside `1..=12`.
    pub fn new(value: i64) -> Result<Self, FieldError> {
        in_range(value, MIN_MONTH, MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(FieldError::Month(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.0.get() - MIN_MONTH) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=2500)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year
    ///
    /// # Errors
    /// Returns `FieldError::Year` if the value is outside `1..=2500`.
    pub fn new(value: i64) -> Result<Self, FieldError> {
        in_range(value, MIN_YEAR, MAX_YEAR)
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(FieldError::Year(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Last two digits of the year (`year mod 100`)
    #[inline]
    pub const fn two_digit(self) -> u16 {
        self.0.get() % 100
    }
}

impl TryFrom<u16> for Year {
    type Error = FieldError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
