// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bootstring parameters for Punycode, and the arithmetic built directly on them.
//!
//! Everything here is a pure function of its arguments. The alphabet is a
//! `match`, not a table, so there is no shared state to get wrong.
//!
//! # References
//!
//! - **RFC 3492 §5**: the Punycode parameter values.
//! - **RFC 3492 §4**: the constraints any bootstring parameter set must satisfy
//!   (checked below at compile time).
//! - **RFC 3492 §6.1**: bias adaptation.

// ============================================================================
// PARAMETERS (RFC 3492 §5)
// ============================================================================

pub const BASE: u32 = 36;
pub const T_MIN: u32 = 1;
pub const T_MAX: u32 = 26;
pub const SKEW: u32 = 38;
pub const DAMP: u32 = 700;
pub const INITIAL_BIAS: u32 = 72;
pub const INITIAL_N: u32 = 0x80;
pub const DELIMITER: char = '-';

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

// INVARIANT: bootstring parameter constraints (RFC 3492 §4).
// If one of these fails, the crate won't build.
const _: () = {
    assert!(T_MIN <= T_MAX);
    assert!(T_MAX < BASE);
    assert!(SKEW >= 1);
    assert!(DAMP >= 2);
    assert!(INITIAL_BIAS % BASE <= BASE - T_MIN);
    // Digits must fit the 36-symbol alphabet exactly.
    assert!(BASE == 26 + 10);
};

// ============================================================================
// THRESHOLD AND BIAS
// ============================================================================

/// Digit threshold for position weight `k` under the current `bias`.
///
/// Always in `[T_MIN, T_MAX]`.
#[inline]
pub fn threshold(k: u32, bias: u32) -> u32 {
    // `bias + T_MAX` cannot overflow: bias is at most `adapt_bias`'s ceiling.
    if k <= bias {
        T_MIN
    } else if k >= bias.saturating_add(T_MAX) {
        T_MAX
    } else {
        k - bias
    }
}

/// Bias adaptation (RFC 3492 §6.1).
///
/// `num_points` is the length of the output so far, counting the code point
/// this delta produces. It is never zero in either algorithm.
///
/// The loop divides `delta` by 35 until it drops to 455 or below, so it runs
/// `O(log delta)` times and `k` stays small.
#[inline]
pub fn adapt_bias(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points.max(1);

    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }

    k + ((BASE - T_MIN + 1) * delta) / (delta + SKEW)
}

// ============================================================================
// ALPHABET
// ============================================================================

/// Map a digit value to its symbol: `0..=25` → `a..=z`, `26..=35` → `0..=9`.
#[inline]
pub fn digit_to_char(digit: u32) -> Option<char> {
    match digit {
        0..=25 => Some((b'a' + digit as u8) as char),
        26..=35 => Some((b'0' + (digit - 26) as u8) as char),
        _ => None,
    }
}

/// Map a symbol back to its digit value. Only lowercase letters and ASCII
/// digits are in the alphabet.
#[inline]
pub fn char_to_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}


// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================
//
// Run with: cargo kani
//
// Verified properties:
// 1. adapt_bias never panics for any input
// 2. threshold is always within [T_MIN, T_MAX]
// 3. digit_to_char / char_to_digit are inverse on 0..BASE

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_adapt_bias_no_panic() {
        let delta: u32 = kani::any();
        let num_points: u32 = kani::any();
        let first_time: bool = kani::any();

        let bias = adapt_bias(delta, num_points, first_time);
        kani::assert(bias < 10 * BASE, "bias must stay below 10 * BASE");
    }

    #[kani::proof]
    fn verify_threshold_in_range() {
        let k: u32 = kani::any();
        let bias: u32 = kani::any();

        let t = threshold(k, bias);
        kani::assert(t >= T_MIN && t <= T_MAX, "threshold must be within [T_MIN, T_MAX]");
    }

    #[kani::proof]
    fn verify_digit_roundtrip() {
        let digit: u32 = kani::any_where(|&d| d < BASE);
        let c = digit_to_char(digit);
        kani::assert(c.is_some(), "every digit below BASE has a symbol");
        kani::assert(
            c.and_then(char_to_digit) == Some(digit),
            "symbol must map back to the same digit",
        );
    }
}
