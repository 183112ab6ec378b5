//! Bias adaptation, thresholds, and the digit alphabet.

use acekit::punycode::params::{BASE, DAMP, INITIAL_BIAS, T_MAX, T_MIN};
use acekit::{adapt_bias, char_to_digit, digit_to_char, threshold};
use proptest::prelude::*;

#[test]
fn test_known_bias_values() {
    assert_eq!(adapt_bias(0, 1, true), 0);
    assert_eq!(adapt_bias(100, 2, false), 23);
    assert_eq!(adapt_bias(910, 1, false), 50);
    assert_eq!(adapt_bias(10_000, 5, false), 65);
    assert_eq!(adapt_bias(1_000_000, 1, true), 60);
}

#[test]
fn test_initial_bias_gives_min_threshold() {
    // With the initial bias the first two weights sit at or below it.
    assert_eq!(threshold(BASE, INITIAL_BIAS), T_MIN);
    assert_eq!(threshold(2 * BASE, INITIAL_BIAS), T_MIN);
    assert_eq!(threshold(3 * BASE, INITIAL_BIAS), T_MAX);
}

proptest! {
    /// Property: adapt_bias is bounded for every input.
    #[test]
    fn prop_bias_bounded(delta in any::<u32>(), num_points in any::<u32>(), first in any::<bool>()) {
        prop_assert!(adapt_bias(delta, num_points, first) < 10 * BASE);
    }

    /// Property: the first adaptation damps harder than later ones.
    #[test]
    fn prop_first_time_damps_more(delta in 0u32..(u32::MAX / 2), num_points in 1u32..1000) {
        prop_assert!(adapt_bias(delta, num_points, true) <= adapt_bias(delta, num_points, false));
    }

    /// Property: small first deltas always reset the bias to zero.
    #[test]
    fn prop_small_first_delta_zero_bias(delta in 0..DAMP, num_points in 1u32..1000) {
        prop_assert_eq!(adapt_bias(delta, num_points, true), 0);
    }

    /// Property: adapt_bias is monotonic in delta.
    #[test]
    fn prop_bias_monotonic(a in any::<u32>(), b in any::<u32>(), num_points in 1u32..1000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(adapt_bias(lo, num_points, false) <= adapt_bias(hi, num_points, false));
    }

    /// Property: threshold is clamped to [T_MIN, T_MAX].
    #[test]
    fn prop_threshold_clamped(k in any::<u32>(), bias in any::<u32>()) {
        let t = threshold(k, bias);
        prop_assert!((T_MIN..=T_MAX).contains(&t));
    }

    /// Property: the alphabet maps only [a-z0-9], and exactly onto 0..BASE.
    #[test]
    fn prop_alphabet(c in any::<char>()) {
        match char_to_digit(c) {
            Some(d) => {
                prop_assert!(c.is_ascii_lowercase() || c.is_ascii_digit());
                prop_assert!(d < BASE);
                prop_assert_eq!(digit_to_char(d), Some(c));
            }
            None => prop_assert!(!(c.is_ascii_lowercase() || c.is_ascii_digit())),
        }
    }
}
