//! Number-theoretic tests applied to every candidate.

use serde::{Deserialize, Serialize};

use crate::{MAX_POWER, MIN_POWER, candidates::digit_count, prelude::*};

/// A number written as `base^power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}={}^{}", num, base, power)]
pub struct PerfectPower {
    pub num: u64,
    pub base: u64,
    pub power: u32,
}

/// Trial division by odd numbers up to `floor(sqrt(n))`.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // i <= n / i is i * i <= n without overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// True when the decimal digits of `n` read the same in both directions.
pub fn is_palindrome(n: u64) -> bool {
    let digits = n.to_string();
    digits.bytes().eq(digits.bytes().rev())
}

/// Finds the smallest exponent in `MIN_POWER..=MAX_POWER` for which `n`
/// has an integer root.
///
/// Squares win over higher powers: `64` is reported as `8^2`, not `4^3`
/// or `2^6`.
pub fn is_perfect_power(n: u64) -> Option<PerfectPower> {
    (MIN_POWER..=MAX_POWER).find_map(|power| {
        exact_root(n, power).map(|base| PerfectPower {
            num: n,
            base,
            power,
        })
    })
}

/// Integer `power`-th root of `n`, if there is one.
///
/// The float estimate is only a starting point; a root is accepted solely
/// when raising it back with integer arithmetic gives `n`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn exact_root(n: u64, power: u32) -> Option<u64> {
    let estimate = (n as f64).powf(1.0 / f64::from(power)).round() as u64;
    (estimate.saturating_sub(1)..=estimate.saturating_add(1))
        .find(|root| root.checked_pow(power) == Some(n))
}

/// True when `n` equals the sum of its digits each raised to the digit count.
///
/// Every single-digit number qualifies.
pub fn is_narcissistic(n: u64) -> bool {
    let width = digit_count(n);
    let mut rest = n;
    let mut sum: u128 = 0;
    loop {
        sum += u128::from(rest % 10).pow(width);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    sum == u128::from(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_prime(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_is_prime_small() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(is_prime(17));
        assert!(!is_prime(25));
        assert!(!is_prime(10403)); // 101 * 103
    }

    #[test]
    fn test_is_prime_matches_naive() {
        for n in 0..5000 {
            assert_eq!(is_prime(n), naive_prime(n), "n = {n}");
        }
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime(999_999_937));
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(2_147_483_649));
        assert!(!is_prime(31_122_500));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(0));
        assert!(is_palindrome(7));
        assert!(is_palindrome(121));
        assert!(is_palindrome(2002));
        assert!(is_palindrome(12321));
        assert!(!is_palindrome(10));
        assert!(!is_palindrome(2024));
        assert!(!is_palindrome(10524));
    }

    #[test]
    fn test_perfect_power_prefers_square() {
        let found = is_perfect_power(64).unwrap();
        assert_eq!(found, PerfectPower { num: 64, base: 8, power: 2 });
    }

    #[test]
    fn test_perfect_power_higher_exponents() {
        assert_eq!(is_perfect_power(8).map(|p| (p.base, p.power)), Some((2, 3)));
        assert_eq!(is_perfect_power(27).map(|p| (p.base, p.power)), Some((3, 3)));
        assert_eq!(is_perfect_power(32).map(|p| (p.base, p.power)), Some((2, 5)));
        assert_eq!(is_perfect_power(128).map(|p| (p.base, p.power)), Some((2, 7)));
        assert_eq!(is_perfect_power(512).map(|p| (p.base, p.power)), Some((8, 3)));
    }

    #[test]
    fn test_perfect_power_beyond_range() {
        // 2^11 is only a power with exponent 11
        assert_eq!(is_perfect_power(2048), None);
    }

    #[test]
    fn test_perfect_power_large_squares() {
        assert_eq!(
            is_perfect_power(9_272_025),
            Some(PerfectPower { num: 9_272_025, base: 3045, power: 2 })
        );
        assert_eq!(
            is_perfect_power(999_998_000_001).map(|p| p.base),
            Some(999_999)
        );
        assert_eq!(is_perfect_power(9_999_800_000), None);
    }

    #[test]
    fn test_perfect_power_none() {
        assert_eq!(is_perfect_power(2), None);
        assert_eq!(is_perfect_power(2024), None);
        assert_eq!(is_perfect_power(31_122_500), None);
    }

    #[test]
    fn test_perfect_power_trivial() {
        assert_eq!(is_perfect_power(0).map(|p| p.base), Some(0));
        assert_eq!(
            is_perfect_power(1),
            Some(PerfectPower { num: 1, base: 1, power: 2 })
        );
    }

    #[test]
    fn test_perfect_power_display() {
        let found = is_perfect_power(12321).unwrap();
        assert_eq!(found.to_string(), "12321=111^2");
    }

    #[test]
    fn test_is_narcissistic() {
        for n in 0..10 {
            assert!(is_narcissistic(n), "{n} is a single digit");
        }
        assert!(is_narcissistic(153));
        assert!(is_narcissistic(370));
        assert!(is_narcissistic(371));
        assert!(is_narcissistic(407));
        assert!(is_narcissistic(9474));
        assert!(is_narcissistic(54748));
        assert!(!is_narcissistic(10));
        assert!(!is_narcissistic(372));
        assert!(!is_narcissistic(2024));
    }

    #[test]
    fn test_is_narcissistic_does_not_overflow() {
        assert!(!is_narcissistic(u64::MAX));
        assert!(!is_narcissistic(99_999_999_999_999_999));
    }
}
