// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Punycode → Unicode.
//!
//! The basic region (everything before the last `-`) is copied verbatim. The
//! rest is a run of generalized variable-length integers, each of which moves
//! the decoder's `(n, i)` state forward and inserts one code point.
//!
//! No delimiter means no basic code points: `"abc"` is three digit groups, not
//! a passthrough. That is what RFC 3492 §6.2 says, and what the encoder relies
//! on for labels with no ASCII at all.

use crate::contracts;
use crate::error::PunycodeError;

use super::params::{
    adapt_bias, char_to_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};

/// One insertion made by the decoder, borrowed from the input.
pub(crate) struct Insertion<'a> {
    pub digits: &'a str,
    pub delta: u32,
    pub bias: u32,
    pub code_point: char,
    pub position: usize,
}

/// Split Punycode into `(basic, digits)` at the last delimiter.
///
/// ```
/// assert_eq!(acekit::split_basic("bcher-kva"), ("bcher", "kva"));
/// assert_eq!(acekit::split_basic("abc"), ("", "abc"));
/// assert_eq!(acekit::split_basic("-abc"), ("", "abc"));
/// ```
pub fn split_basic(input: &str) -> (&str, &str) {
    match input.rfind(DELIMITER) {
        Some(position) => (&input[..position], &input[position + 1..]),
        None => ("", input),
    }
}

/// Decode Punycode into a Unicode string.
///
/// ```
/// assert_eq!(acekit::decode("mnchen-3ya").unwrap(), "münchen");
/// ```
pub fn decode(input: &str) -> Result<String, PunycodeError> {
    Ok(decode_to_chars(input)?.into_iter().collect())
}

/// Decode Punycode into its sequence of code points.
pub fn decode_to_chars(input: &str) -> Result<Vec<char>, PunycodeError> {
    let mut output = Vec::with_capacity(input.len());
    decode_into(input, &mut output, |_| {})?;
    Ok(output)
}

/// The decoder proper. `observe` sees every insertion after it is made.
pub(crate) fn decode_into<F>(
    input: &str,
    output: &mut Vec<char>,
    mut observe: F,
) -> Result<(), PunycodeError>
where
    F: FnMut(Insertion<'_>),
{
    let (basic, digits) = split_basic(input);

    for (position, c) in basic.char_indices() {
        if !c.is_ascii() {
            return Err(PunycodeError::MalformedInput { position, found: c });
        }
        output.push(c);
    }

    // Byte offset of the digit region, for error positions.
    let offset = input.len() - digits.len();

    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut chars = digits.char_indices().peekable();

    while let Some(&(start, _)) = chars.peek() {
        let old_i = i;
        let mut weight: u32 = 1;
        let mut k = BASE;

        let end = loop {
            let (at, c) = chars.next().ok_or(PunycodeError::UnexpectedEnd {
                position: input.len(),
            })?;
            let digit = char_to_digit(c).ok_or(PunycodeError::MalformedInput {
                position: offset + at,
                found: c,
            })?;
            contracts::check_digit(digit);

            let t = threshold(k, bias);
            contracts::check_threshold(t);

            i = digit
                .checked_mul(weight)
                .and_then(|step| i.checked_add(step))
                .ok_or(PunycodeError::Overflow)?;

            if digit < t {
                break at + c.len_utf8();
            }

            weight = weight
                .checked_mul(BASE - t)
                .ok_or(PunycodeError::Overflow)?;
            k = k.saturating_add(BASE);
        };

        let len = u32::try_from(output.len() + 1).map_err(|_| PunycodeError::Overflow)?;
        let delta = i - old_i;
        bias = adapt_bias(delta, len, old_i == 0);

        n = n.checked_add(i / len).ok_or(PunycodeError::Overflow)?;
        i %= len;

        if n < INITIAL_N {
            return Err(PunycodeError::InvalidCodePoint { value: n });
        }
        let code_point = char::from_u32(n).ok_or(PunycodeError::InvalidCodePoint { value: n })?;

        let position = i as usize;
        contracts::check_insert_position(position, output.len());
        output.insert(position, code_point);

        observe(Insertion {
            digits: &digits[start..end],
            delta,
            bias,
            code_point,
            position,
        });

        i += 1;
    }

    Ok(())
}
