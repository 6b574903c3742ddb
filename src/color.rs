//! Colour fingerprints of a date.
//!
//! Each colour is computed twice: once with the month leading (`mmddyy`)
//! and once with the day leading (`ddmmyy`). The channel formulas are fixed
//! so the same date always yields the same colours.

use serde::{Deserialize, Serialize};

use crate::{
    DateInput,
    consts::{
        BLUE_BASE, BLUE_FACTOR, BLUE_SPAN, GREEN_BASE, GREEN_FACTOR, GREEN_SPAN, HUE_DEGREES,
        LIGHTNESS_MAX, LIGHTNESS_MIN, RED_BASE, RED_FACTOR, RED_SPAN, SATURATION_MAX,
        SATURATION_MIN,
    },
    prelude::*,
};

/// Which component leads in a colour variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DigitOrder {
    /// Month first, then day
    #[display(fmt = "MM/DD/YY")]
    MonthFirst,
    /// Day first, then month
    #[display(fmt = "DD/MM/YY")]
    DayFirst,
}

impl DigitOrder {
    /// Returns `(leading, trailing)` components for this order.
    pub const fn arrange(self, day: u8, month: u8) -> (u32, u32) {
        match self {
            Self::MonthFirst => (month as u32, day as u32),
            Self::DayFirst => (day as u32, month as u32),
        }
    }

    /// Slope and offset of `(saturation, lightness)` for this order.
    const fn hsl_coefficients(self) -> ((u32, u32), (u32, u32)) {
        match self {
            Self::MonthFirst => ((3, 30), (2, 40)),
            Self::DayFirst => ((4, 25), (3, 35)),
        }
    }
}

/// An sRGB colour formatted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "#{:02x}{:02x}{:02x}", r, g, b)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Channel mapping from a leading component `a`, a trailing component
    /// `b` and a two-digit year `yy`.
    ///
    /// Every channel stays within `60..=199`, so the narrowing never clips.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_components(a: u32, b: u32, yy: u32) -> Self {
        Self {
            r: (RED_BASE + (a * RED_FACTOR) % RED_SPAN) as u8,
            g: (GREEN_BASE + (b * GREEN_FACTOR) % GREEN_SPAN) as u8,
            b: (BLUE_BASE + ((yy % 100) * BLUE_FACTOR) % BLUE_SPAN) as u8,
        }
    }
}

/// A colour formatted as `hsl(H, S%, L%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "hsl({}, {}%, {}%)", hue, saturation, lightness)]
pub struct Hsl {
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
}

impl Hsl {
    /// Hue is `(a * b + year) mod 360`; saturation and lightness are linear
    /// in `a` and `b` respectively, clamped to `40..=90` and `35..=75`.
    pub fn from_date(order: DigitOrder, date: &DateInput) -> Self {
        let (a, b) = order.arrange(date.day(), date.month());
        let ((k1, c1), (k2, c2)) = order.hsl_coefficients();
        Self {
            hue: (a * b + u32::from(date.year())) % HUE_DEGREES,
            saturation: (a * k1 + c1).clamp(SATURATION_MIN, SATURATION_MAX),
            lightness: (b * k2 + c2).clamp(LIGHTNESS_MIN, LIGHTNESS_MAX),
        }
    }
}

/// One colour string per digit order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub mmddyy: String,
    pub ddmmyy: String,
}

impl ColorPair {
    fn build(f: impl Fn(DigitOrder) -> String) -> Self {
        Self {
            mmddyy: f(DigitOrder::MonthFirst),
            ddmmyy: f(DigitOrder::DayFirst),
        }
    }

    /// The colour for the given order
    pub fn get(&self, order: DigitOrder) -> &str {
        match order {
            DigitOrder::MonthFirst => &self.mmddyy,
            DigitOrder::DayFirst => &self.ddmmyy,
        }
    }
}

/// Hex colour from a leading component, a trailing component and a
/// two-digit year, e.g. `hex_color(1, 1, 24) == "#574976"`.
pub fn hex_color(a: u32, b: u32, yy: u32) -> String {
    Rgb::from_components(a, b, yy).to_string()
}

/// HSL colour of `date` for the given order.
pub fn hsl_color(order: DigitOrder, date: &DateInput) -> String {
    Hsl::from_date(order, date).to_string()
}

/// Both hex variants of `date`.
pub fn hex_colors(date: &DateInput) -> ColorPair {
    let yy = u32::from(date.year_typed().two_digit());
    ColorPair::build(|order| {
        let (a, b) = order.arrange(date.day(), date.month());
        hex_color(a, b, yy)
    })
}

/// Both HSL variants of `date`.
pub fn hsl_colors(date: &DateInput) -> ColorPair {
    ColorPair::build(|order| hsl_color(order, date))
}
