// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the codec's numeric and structural invariants.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure** during development and under `cargo test`/fuzzing
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Invariant                                      |
//! |--------------------------|------------------------------------------------|
//! | `check_threshold`        | `T_MIN <= t <= T_MAX`                          |
//! | `check_digit`            | every emitted/consumed digit is `< BASE`       |
//! | `check_insert_position`  | decode never inserts past the end of output    |
//! | `check_encoded_output`   | encoder output is pure ASCII                   |
//! | `check_basic_prefix`     | basic code points lead the output, in order    |

use crate::punycode::params::{BASE, T_MAX, T_MIN};

// ============================================================================
// ARITHMETIC CONTRACTS
// ============================================================================

/// INVARIANT: threshold stays within `[T_MIN, T_MAX]`.
#[inline]
pub fn check_threshold(t: u32) {
    debug_assert!(
        (T_MIN..=T_MAX).contains(&t),
        "Contract violation: threshold {} outside [{}, {}]",
        t,
        T_MIN,
        T_MAX
    );
}

/// INVARIANT: digit values are in `[0, BASE)`.
#[inline]
pub fn check_digit(digit: u32) {
    debug_assert!(
        digit < BASE,
        "Contract violation: digit {} >= BASE {}",
        digit,
        BASE
    );
}

// ============================================================================
// STRUCTURAL CONTRACTS
// ============================================================================

/// INVARIANT: insertion position is at most the current output length.
#[inline]
pub fn check_insert_position(position: usize, len: usize) {
    debug_assert!(
        position <= len,
        "Contract violation: insert at {} into output of length {}",
        position,
        len
    );
}

/// INVARIANT: the encoder only ever produces ASCII.
#[inline]
pub fn check_encoded_output(output: &str) {
    debug_assert!(
        output.is_ascii(),
        "Contract violation: encoded output {:?} is not ASCII",
        output
    );
}

/// INVARIANT: the encoded output starts with the input's basic code points,
/// in their original order.
#[inline]
pub fn check_basic_prefix(output: &str, input: &[u32]) {
    if cfg!(debug_assertions) {
        let basic = input.iter().filter(|&&c| c < 0x80).count();
        let matches = input
            .iter()
            .filter(|&&c| c < 0x80)
            .zip(output.bytes())
            .all(|(&c, b)| c == u32::from(b));

        debug_assert!(
            matches && output.len() >= basic,
            "Contract violation: output {:?} does not begin with the {} basic code points",
            output,
            basic
        );
    }
}
