//! Property-based tests for the predicates and the analysis entry point.

use math_date::{Field, analyze, is_narcissistic, is_palindrome, is_perfect_power, is_prime};
use proptest::prelude::*;

fn reverse_digits(n: u64) -> u64 {
    n.to_string()
        .chars()
        .rev()
        .collect::<String>()
        .parse()
        .unwrap()
}

fn naive_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d: &u64| d * d <= n).all(|d| n % d != 0)
}

proptest! {
    /// A palindrome reversed is itself.
    #[test]
    fn palindrome_reversal_is_identity(n in 0u64..100_000_000) {
        if is_palindrome(n) {
            prop_assert_eq!(reverse_digits(n), n);
        }
    }

    /// Numbers without trailing zeros keep their palindrome status when reversed.
    #[test]
    fn palindrome_symmetric_under_reversal(n in 1u64..100_000_000) {
        prop_assume!(n % 10 != 0);
        prop_assert_eq!(is_palindrome(n), is_palindrome(reverse_digits(n)));
    }

    #[test]
    fn primality_agrees_with_trial_division(n in 0u64..200_000) {
        prop_assert_eq!(is_prime(n), naive_prime(n));
    }

    /// Any reported perfect power is an exact witness with the smallest exponent.
    #[test]
    fn perfect_power_witness_is_exact(n in 0u64..100_000_000) {
        if let Some(found) = is_perfect_power(n) {
            prop_assert_eq!(found.num, n);
            prop_assert!((2..=9).contains(&found.power));
            prop_assert_eq!(found.base.checked_pow(found.power), Some(n));
        }
    }

    /// Every base^power that fits is recognised, possibly at a smaller exponent.
    #[test]
    fn perfect_powers_are_found(base in 2u64..1000, power in 2u32..=9) {
        let Some(n) = base.checked_pow(power) else {
            return Ok(());
        };
        let found = is_perfect_power(n);
        prop_assert!(found.is_some(), "{} = {}^{} not found", n, base, power);
        prop_assert!(found.is_some_and(|f| f.power <= power));
    }

    #[test]
    fn single_digits_are_narcissistic(n in 0u64..10) {
        prop_assert!(is_narcissistic(n));
    }

    #[test]
    fn analyze_is_idempotent(day in 1i64..=31, month in 1i64..=12, year in 1i64..=2500) {
        let first = analyze(day, month, year);
        let second = analyze(day, month, year);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn analyze_scans_seven_candidates(day in 1i64..=31, month in 1i64..=12, year in 1i64..=2500) {
        let result = analyze(day, month, year).unwrap();
        prop_assert_eq!(result.candidates.len(), 7);
        prop_assert_eq!(result.candidates.raw(), &[day as u64, month as u64, year as u64][..]);
        for n in &result.primes {
            prop_assert!(result.candidates.contains(n));
        }
    }

    #[test]
    fn out_of_range_day_is_reported(day in prop_oneof![i64::MIN..1i64, 32i64..i64::MAX]) {
        let err = analyze(day, 6, 2000).unwrap_err();
        prop_assert_eq!(err.fields(), vec![Field::Day]);
    }

    #[test]
    fn out_of_range_fields_are_independent(
        month in prop_oneof![-1000i64..1, 13i64..1000],
        year in prop_oneof![-1000i64..1, 2501i64..100_000],
    ) {
        let err = analyze(15, month, year).unwrap_err();
        prop_assert_eq!(err.fields(), vec![Field::Month, Field::Year]);
    }
}
