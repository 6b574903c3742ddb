//! Derivation of the integers a date is scanned for.
//!
//! A date yields seven candidates: the raw day, month and year, then four
//! digit concatenations of the zero-padded components. The concatenations
//! behave like building the digit string and parsing it back as a decimal
//! integer, so a leading zero is lost (`01|05|24` becomes `10524`).

use serde::{Deserialize, Serialize};

use crate::{CANDIDATE_COUNT, DateInput, consts::PAD_WIDTH, prelude::*};

/// The ordered integers derived from one date.
///
/// Order is `day, month, year, mmddyy, ddmmyy, mmddyyyy, ddmmyyyy`.
/// Values are never deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet([u64; CANDIDATE_COUNT]);

impl CandidateSet {
    /// Builds the candidate set for a validated date.
    pub fn derive(date: &DateInput) -> Self {
        let d = u64::from(date.day());
        let m = u64::from(date.month());
        let y = u64::from(date.year());
        let yy = u64::from(date.year_typed().two_digit());

        Self([
            d,
            m,
            y,
            concat_digits(&[(m, PAD_WIDTH), (d, PAD_WIDTH), (yy, PAD_WIDTH)]),
            concat_digits(&[(d, PAD_WIDTH), (m, PAD_WIDTH), (yy, PAD_WIDTH)]),
            concat_digits(&[(m, PAD_WIDTH), (d, PAD_WIDTH), (y, 0)]),
            concat_digits(&[(d, PAD_WIDTH), (m, PAD_WIDTH), (y, 0)]),
        ])
    }

    /// The raw day, month and year candidates
    pub fn raw(&self) -> &[u64] {
        &self.0[..3]
    }

    /// The four concatenated candidates
    pub fn concatenated(&self) -> &[u64] {
        &self.0[3..]
    }
}

/// Shorthand for [`CandidateSet::derive`].
pub fn derive_candidates(date: &DateInput) -> CandidateSet {
    CandidateSet::derive(date)
}

/// Number of decimal digits in `n` (`0` has one digit).
pub(crate) const fn digit_count(n: u64) -> u32 {
    match n.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Concatenates `(value, min_width)` parts as zero-padded decimal strings
/// and reads the result back as an integer.
///
/// Each part occupies `max(min_width, digit_count(value))` digits, which is
/// exactly what left-padding with zeros and parsing does.
fn concat_digits(parts: &[(u64, u32)]) -> u64 {
    parts.iter().fold(0, |acc, &(value, min_width)| {
        let width = digit_count(value).max(min_width);
        acc * 10u64.pow(width) + value
    })
}
