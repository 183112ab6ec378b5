// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the acekit bootstring arithmetic.
//!
//! This standalone crate extracts the Punycode parameters, the threshold and
//! bias functions, and the digit alphabet, and proves properties the codec
//! leans on.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: adapt_bias never panics, for any delta and point count
//! 2. **Bounds**: threshold always lands in [T_MIN, T_MAX]
//! 3. **Alphabet**: digit_to_char and char_to_digit are inverse on 0..BASE
//!
//! `cargo xtask verify` checks the constants below against
//! `src/punycode/params.rs`.

// ============================================================================
// PARAMETERS (copied from src/punycode/params.rs)
// ============================================================================

pub const BASE: u32 = 36;
pub const T_MIN: u32 = 1;
pub const T_MAX: u32 = 26;
pub const SKEW: u32 = 38;
pub const DAMP: u32 = 700;
pub const INITIAL_BIAS: u32 = 72;
pub const INITIAL_N: u32 = 0x80;

// ============================================================================
// ARITHMETIC (copied from src/punycode/params.rs)
// ============================================================================

/// Digit threshold for position weight `k` under `bias`.
pub fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias.saturating_add(T_MAX) {
        T_MAX
    } else {
        k - bias
    }
}

/// Bias adaptation (RFC 3492 §6.1).
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

pub fn digit_to_char(digit: u32) -> Option<char> {
    match digit {
        0..=25 => Some((b'a' + digit as u8) as char),
        26..=35 => Some((b'0' + (digit - 26) as u8) as char),
        _ => None,
    }
}

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

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify adapt_bias never panics and stays bounded.
    #[kani::proof]
    #[kani::unwind(8)] // u32::MAX / 35^6 < 455, so at most 6 iterations
    fn verify_adapt_bias_no_panic() {
        let delta: u32 = kani::any();
        let num_points: u32 = kani::any();
        let first_time: bool = kani::any();

        let bias = adapt_bias(delta, num_points, first_time);

        kani::assert(bias < 10 * BASE, "adapt_bias must stay below 10 * BASE");
    }

    /// Verify threshold is clamped for any weight and reachable bias.
    #[kani::proof]
    fn verify_threshold_in_range() {
        let k: u32 = kani::any();
        let bias: u32 = kani::any_where(|&b| b < 10 * BASE);

        let t = threshold(k, bias);

        kani::assert(t >= T_MIN, "threshold must be at least T_MIN");
        kani::assert(t <= T_MAX, "threshold must be at most T_MAX");
    }

    /// Verify threshold never panics, even for biases adapt_bias can't produce.
    #[kani::proof]
    fn verify_threshold_total() {
        let k: u32 = kani::any();
        let bias: u32 = kani::any();
        let _ = threshold(k, bias);
    }

    /// Verify the alphabet is a bijection on 0..BASE.
    #[kani::proof]
    fn verify_digit_roundtrip() {
        let digit: u32 = kani::any_where(|&d| d < BASE);

        let c = digit_to_char(digit);
        kani::assert(c.is_some(), "every digit below BASE has a symbol");

        let c = c.unwrap();
        kani::assert(
            c.is_ascii_lowercase() || c.is_ascii_digit(),
            "symbols are lowercase letters or digits",
        );
        kani::assert(char_to_digit(c) == Some(digit), "roundtrip must preserve digit");
    }

    /// Verify digits at or above BASE have no symbol.
    #[kani::proof]
    fn verify_digit_out_of_range() {
        let digit: u32 = kani::any_where(|&d| d >= BASE);
        kani::assert(digit_to_char(digit).is_none(), "no symbol above BASE - 1");
    }
}
