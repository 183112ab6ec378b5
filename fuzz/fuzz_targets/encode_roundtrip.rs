// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for encode → decode.
//!
//! Every valid string either encodes to itself (delimiter-free ASCII) or
//! round-trips exactly through the decoder.

#![no_main]

use acekit::{decode, encode, encode_code_points, PunycodeError};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input {
    Text(String),
    /// Raw scalars, including surrogates and values past U+10FFFF
    CodePoints(Vec<u32>),
}

fuzz_target!(|input: Input| {
    match input {
        Input::Text(s) => {
            let encoded = match encode(&s) {
                Ok(encoded) => encoded,
                // Only very long inputs can push delta past u32
                Err(PunycodeError::Overflow) => return,
                Err(e) => panic!("valid string {:?} failed to encode: {}", s, e),
            };

            assert!(encoded.is_ascii(), "encoder output must be ASCII");

            if s.is_ascii() && !s.contains('-') {
                assert_eq!(encoded, s, "delimiter-free ASCII is a fixed point");
            } else {
                assert_eq!(decode(&encoded).as_deref(), Ok(s.as_str()));
            }
        }
        Input::CodePoints(points) => {
            // May fail, must not panic
            if let Ok(encoded) = encode_code_points(&points) {
                assert!(encoded.is_ascii());
                let _ = decode(&encoded);
            }
        }
    }
});
