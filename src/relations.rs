//! Relations between the raw day, month and year.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DateInput, prelude::*};

/// Arithmetic operators tried by [`discover_equations`], in test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Operator {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Subtract,
    #[display(fmt = "×")]
    Multiply,
    #[display(fmt = "÷")]
    Divide,
    #[display(fmt = "^")]
    Power,
}

impl Operator {
    /// All operators in the order they are tested
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Applies `lhs op rhs`, or `None` when the result is not an integer
    /// (inexact or zero division) or does not fit.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs != 0 && lhs % rhs == 0 {
                    lhs.checked_div(rhs)
                } else {
                    None
                }
            }
            Self::Power => u32::try_from(rhs).ok().and_then(|exp| lhs.checked_pow(exp)),
        }
    }
}

/// A satisfied identity `day op month = year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equation {
    pub day: u8,
    pub month: u8,
    pub year: u16,
    pub operator: Operator,
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::Power => write!(f, "{}^{} = {}", self.day, self.month, self.year),
            op => write!(f, "{} {op} {} = {}", self.day, self.month, self.year),
        }
    }
}

/// `day² + month² == year²` on the raw components.
pub fn is_pythagorean(date: &DateInput) -> bool {
    let d = u32::from(date.day());
    let m = u32::from(date.month());
    let y = u32::from(date.year());
    d * d + m * m == y * y
}

/// Every operator for which `day op month == year`, in the fixed order
/// `+ - × ÷ ^`. All matches are reported.
pub fn discover_equations(date: &DateInput) -> Vec<Equation> {
    let (day, month, year) = (date.day(), date.month(), date.year());
    Operator::ALL
        .into_iter()
        .filter(|op| op.apply(i64::from(day), i64::from(month)) == Some(i64::from(year)))
        .map(|operator| Equation {
            day,
            month,
            year,
            operator,
        })
        .collect()
}
