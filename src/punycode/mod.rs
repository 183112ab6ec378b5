// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The RFC 3492 Punycode codec.
//!
//! Two pure functions and the arithmetic they share. No state survives a call,
//! so everything here is reentrant and safe to call from any thread.
//!
//! ```text
//! "bücher" ──encode──▶ "bcher-kva"
//!            ◀──decode──
//!
//!  bcher  -  kva
//!  ─────     ───
//!  basic     one variable-length integer: insert U+00FC at position 1
//! ```

mod decode;
mod encode;
mod inspect;
pub mod params;

pub use decode::{decode, decode_to_chars, split_basic};
pub use encode::{encode, encode_chars, encode_code_points};
pub use inspect::{inspect, Inspection, InsertionStep};
pub use params::{adapt_bias, char_to_digit, digit_to_char, threshold};
