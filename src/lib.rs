//! Mathematical patterns hidden in calendar dates.
//!
//! [`analyze`] takes a day, month and year, derives seven candidate
//! integers from them and reports which candidates are prime, palindromic,
//! perfect powers or narcissistic. It also checks whether the raw
//! components form a Pythagorean triple or an arithmetic identity, and
//! derives hex and HSL colour fingerprints of the date.
//!
//! ```
//! let result = math_date::analyze(3, 4, 5).unwrap();
//! assert!(result.pythagorean);
//! assert!(result.primes.contains(&5));
//! ```

mod candidates;
mod color;
mod consts;
mod predicates;
mod prelude;
mod relations;
mod report;
mod types;

pub use candidates::{CandidateSet, derive_candidates};
pub use color::{ColorPair, DigitOrder, Hsl, Rgb, hex_color, hex_colors, hsl_color, hsl_colors};
pub use consts::*;
pub use predicates::{PerfectPower, is_narcissistic, is_palindrome, is_perfect_power, is_prime};
pub use relations::{Equation, Operator, discover_equations, is_pythagorean};
pub use types::{Day, Field, FieldError, Month, Year};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// A day, month and year that passed range validation.
///
/// Ranges are `1..=31`, `1..=12` and `1..=2500`. Real calendar rules are
/// not applied, so `2/30/2024` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInput {
    day: Day,
    month: Month,
    year: Year,
}

/// Every out-of-range field of a rejected date, in day, month, year order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid date input: {}", join_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// The individual field failures
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The fields that failed
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(FieldError::field).collect()
    }

    /// The failure for `field`, if that field was rejected
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}

/// Error type for textual date input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but whitespace was given.
    #[error("Empty date string")]
    EmptyInput,

    /// Input is not `M/D/YYYY` with numeric parts.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Input parsed but a component is out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DateInput {
    /// Validates each component independently.
    ///
    /// # Errors
    /// Returns a `ValidationError` naming every out-of-range field.
    pub fn new(day: i64, month: i64, year: i64) -> Result<Self, ValidationError> {
        match (Day::new(day), Month::new(month), Year::new(year)) {
            (Ok(day), Ok(month), Ok(year)) => Ok(Self { day, month, year }),
            (day, month, year) => Err(ValidationError {
                errors: [day.err(), month.err(), year.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            }),
        }
    }

    /// Builds from already validated components
    pub const fn from_parts(day: Day, month: Month, year: Year) -> Self {
        Self { day, month, year }
    }

    /// Returns the day as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{MONTH_FIRST_SEPARATOR}{}{MONTH_FIRST_SEPARATOR}{}",
            self.month, self.day, self.year
        )
    }
}

impl FromStr for DateInput {
    type Err = ParseError;

    /// Parses month-first `M/D/YYYY`, tolerating whitespace around parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected M{sep}D{sep}YYYY, found {} {sep} separators",
                parts.len() - 1,
                sep = MONTH_FIRST_SEPARATOR
            )));
        };

        let month = parse_component(month)?;
        let day = parse_component(day)?;
        let year = parse_component(year)?;
        Ok(Self::new(day, month, year)?)
    }
}

fn parse_component(s: &str) -> Result<i64, ParseError> {
    s.parse::<i64>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Everything found in one date.
///
/// Match lists keep candidate order and may repeat a value when two
/// candidates coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analysed date
    pub date: DateInput,
    /// The integers every predicate was run over
    pub candidates: CandidateSet,
    pub primes: Vec<u64>,
    pub palindromes: Vec<u64>,
    pub perfect_powers: Vec<PerfectPower>,
    pub narcissistic: Vec<u64>,
    /// `day² + month² == year²`
    pub pythagorean: bool,
    /// Satisfied identities such as `"2 + 3 = 5"`
    pub equations: Vec<String>,
    pub hex_colors: ColorPair,
    pub hsl_colors: ColorPair,
}

/// Validates `day`, `month` and `year`, then analyses the date.
///
/// # Errors
/// Returns a `ValidationError` naming each out-of-range field; no analysis
/// is performed in that case.
pub fn analyze(day: i64, month: i64, year: i64) -> Result<AnalysisResult, ValidationError> {
    debug!(day, month, year, "analyzing date");
    let date = DateInput::new(day, month, year).inspect_err(|err| {
        debug!(fields = ?err.fields(), "rejected date input");
    })?;
    Ok(analyze_date(&date))
}

/// Analyses an already validated date. Never fails.
pub fn analyze_date(date: &DateInput) -> AnalysisResult {
    let candidates = CandidateSet::derive(date);

    let primes = filter_candidates(&candidates, is_prime);
    let palindromes = filter_candidates(&candidates, is_palindrome);
    let perfect_powers: Vec<PerfectPower> = candidates
        .iter()
        .filter_map(|&n| is_perfect_power(n))
        .collect();
    let narcissistic = filter_candidates(&candidates, is_narcissistic);

    trace!(
        %date,
        primes = primes.len(),
        palindromes = palindromes.len(),
        perfect_powers = perfect_powers.len(),
        narcissistic = narcissistic.len(),
        "predicate scan complete"
    );

    AnalysisResult {
        date: *date,
        candidates,
        primes,
        palindromes,
        perfect_powers,
        narcissistic,
        pythagorean: is_pythagorean(date),
        equations: discover_equations(date)
            .iter()
            .map(ToString::to_string)
            .collect(),
        hex_colors: hex_colors(date),
        hsl_colors: hsl_colors(date),
    }
}

fn filter_candidates(candidates: &CandidateSet, predicate: fn(u64) -> bool) -> Vec<u64> {
    candidates.iter().copied().filter(|&n| predicate(n)).collect()
}
