// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the codec and the label wrapper.
//!
//! Every failure is terminal for the call that produced it. There is no partial
//! output: either you get the whole string back, or you get one of these.

use thiserror::Error;

/// Why a Punycode encode or decode was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PunycodeError {
    /// A character outside the base-36 alphabet in the digit region, or a
    /// non-ASCII character in the basic region.
    #[error("malformed input: {found:?} at position {position}")]
    MalformedInput { position: usize, found: char },

    /// Input ended in the middle of a variable-length integer.
    #[error("input ends inside a digit sequence at position {position}")]
    UnexpectedEnd { position: usize },

    /// A source or decoded scalar falls outside the accepted range.
    #[error("invalid code point U+{value:04X}")]
    InvalidCodePoint { value: u32 },

    /// An intermediate value would not fit in 32 bits.
    #[error("arithmetic overflow")]
    Overflow,
}

/// A hostname failed because one of its labels did.
///
/// Only the first failing label is reported; the wrapper stops there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("label {index} ({label:?}): {source}")]
pub struct IdnaError {
    /// Zero-based position of the label within the hostname.
    pub index: usize,
    /// The label as it appeared in the input.
    pub label: String,
    #[source]
    pub source: PunycodeError,
}
