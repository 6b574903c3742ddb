//! Plain-text rendering of an [`AnalysisResult`], one line per finding.

use std::fmt::{self, Display};

use crate::{AnalysisResult, ColorPair, DigitOrder};

const FOUND: &str = "✓ Found:";
const NONE_FOUND: &str = "✗ None found";

struct Matches<'a, T>(&'a [T]);

impl<T: Display> Display for Matches<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return f.write_str(NONE_FOUND);
        };
        write!(f, "{FOUND} {first}")?;
        rest.iter().try_for_each(|item| write!(f, ", {item}"))
    }
}

struct Colors<'a>(&'a ColorPair);

impl Display for Colors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = [DigitOrder::MonthFirst, DigitOrder::DayFirst];
        write!(
            f,
            "{} ({first}), {} ({second})",
            self.0.get(first),
            self.0.get(second)
        )
    }
}

impl Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = &self.date;
        writeln!(f, "Results for {date}")?;
        writeln!(f, "Prime Numbers: {}", Matches(&self.primes))?;
        writeln!(f, "Palindromes: {}", Matches(&self.palindromes))?;
        if self.pythagorean {
            writeln!(
                f,
                "Pythagorean Triple: ✓ {}² + {}² = {}²",
                date.day(),
                date.month(),
                date.year()
            )?;
        } else {
            writeln!(f, "Pythagorean Triple: ✗ Not a triple")?;
        }
        writeln!(f, "Perfect Powers: {}", Matches(&self.perfect_powers))?;
        writeln!(f, "Narcissistic Numbers: {}", Matches(&self.narcissistic))?;
        if self.equations.is_empty() {
            writeln!(f, "Date Equations: ✗ No equations")?;
        } else {
            writeln!(f, "Date Equations: {}", Matches(&self.equations))?;
        }
        writeln!(f, "Hex Colors: {}", Colors(&self.hex_colors))?;
        write!(f, "HSL Colors: {}", Colors(&self.hsl_colors))
    }
}
