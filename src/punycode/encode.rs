// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unicode → Punycode.
//!
//! Basic code points go first, verbatim, then (if there were any) a delimiter,
//! then one variable-length integer per non-basic code point. Code points are
//! handled in increasing numeric order, not order of appearance, which keeps
//! the deltas small.
//!
//! A string that is all ASCII and contains no `-` is its own encoding. An
//! all-ASCII string *with* a `-` goes through the general path and picks up a
//! trailing delimiter, otherwise the decoder would split it at that `-`.

use crate::contracts;
use crate::error::PunycodeError;

use super::params::{
    adapt_bias, digit_to_char, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};

/// Scalars the encoder accepts outside the basic range.
///
/// This is deliberately wider than Unicode: it admits the low half of the
/// surrogate block and values up to `0x1F_FFFF`. The decoder is strict, so
/// such input encodes fine but will not decode.
#[inline]
pub(crate) fn is_encodable(value: u32) -> bool {
    value < 0xD880 || (0xE000..=0x1F_FFFF).contains(&value)
}

/// Encode a Unicode string as Punycode.
///
/// ```
/// assert_eq!(acekit::encode("bücher").unwrap(), "bcher-kva");
/// assert_eq!(acekit::encode("example").unwrap(), "example");
/// ```
pub fn encode(input: &str) -> Result<String, PunycodeError> {
    let code_points: Vec<u32> = input.chars().map(u32::from).collect();
    encode_code_points(&code_points)
}

/// Encode a sequence of chars as Punycode.
pub fn encode_chars(input: &[char]) -> Result<String, PunycodeError> {
    let code_points: Vec<u32> = input.iter().map(|&c| u32::from(c)).collect();
    encode_code_points(&code_points)
}

/// Encode raw scalar values as Punycode.
///
/// Unlike [`encode`], the input here is not guaranteed to be valid Unicode, so
/// every non-basic value is checked against the accepted range first.
pub fn encode_code_points(input: &[u32]) -> Result<String, PunycodeError> {
    let mut output = String::with_capacity(input.len() * 2);

    for &value in input {
        if value < INITIAL_N {
            output.push(char::from(value as u8));
        } else if !is_encodable(value) {
            return Err(PunycodeError::InvalidCodePoint { value });
        }
    }

    let basic_len = output.len();
    if basic_len == input.len() && !output.contains(DELIMITER) {
        return Ok(output);
    }
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let input_len = u32::try_from(input.len()).map_err(|_| PunycodeError::Overflow)?;
    let basic_len = basic_len as u32;

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    while handled < input_len {
        // Everything below n has been handled; find the next value up.
        let m = input
            .iter()
            .copied()
            .filter(|&c| c >= n)
            .min()
            .ok_or(PunycodeError::InvalidCodePoint { value: n })?;

        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|step| delta.checked_add(step))
            .ok_or(PunycodeError::Overflow)?;
        n = m;

        for &c in input {
            if c < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }
            if c == n {
                push_integer(&mut output, delta, bias);
                bias = adapt_bias(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n = n.checked_add(1).ok_or(PunycodeError::Overflow)?;
    }

    contracts::check_encoded_output(&output);
    contracts::check_basic_prefix(&output, input);
    Ok(output)
}

/// Append `q` as a generalized variable-length integer.
fn push_integer(output: &mut String, mut q: u32, bias: u32) {
    let mut k = BASE;
    loop {
        let t = threshold(k, bias);
        contracts::check_threshold(t);
        if q < t {
            break;
        }
        push_digit(output, t + (q - t) % (BASE - t));
        q = (q - t) / (BASE - t);
        k += BASE;
    }
    push_digit(output, q);
}

#[inline]
fn push_digit(output: &mut String, digit: u32) {
    contracts::check_digit(digit);
    if let Some(c) = digit_to_char(digit) {
        output.push(c);
    }
}
