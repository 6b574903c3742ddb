/// First valid day of a month
pub const MIN_DAY: u8 = 1;
/// Largest day accepted (no per-month calendar check)
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 2500;

/// Number of integers derived from a date
pub const CANDIDATE_COUNT: usize = 7;

/// Width that day, month and two-digit year are zero-padded to
pub(crate) const PAD_WIDTH: u32 = 2;

/// Smallest exponent tried by the perfect-power test
pub const MIN_POWER: u32 = 2;
/// Largest exponent tried by the perfect-power test
pub const MAX_POWER: u32 = 9;

/// English month names, index 0 is January
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Hex channels: base + ((component * factor) mod span)
pub(crate) const RED_BASE: u32 = 80;
pub(crate) const RED_FACTOR: u32 = 7;
pub(crate) const RED_SPAN: u32 = 120;

pub(crate) const GREEN_BASE: u32 = 60;
pub(crate) const GREEN_FACTOR: u32 = 13;
pub(crate) const GREEN_SPAN: u32 = 140;

pub(crate) const BLUE_BASE: u32 = 70;
pub(crate) const BLUE_FACTOR: u32 = 2;
pub(crate) const BLUE_SPAN: u32 = 130;

/// Degrees in the hue circle
pub(crate) const HUE_DEGREES: u32 = 360;

/// HSL saturation clamp (percent)
pub(crate) const SATURATION_MIN: u32 = 40;
pub(crate) const SATURATION_MAX: u32 = 90;
/// HSL lightness clamp (percent)
pub(crate) const LIGHTNESS_MIN: u32 = 35;
pub(crate) const LIGHTNESS_MAX: u32 = 75;

/// Month-first separator used for textual input and display (`M/D/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';
