// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Punycode decoder.
//!
//! Decode takes untrusted input straight off the wire. It must return Err on
//! garbage, never panic, never overflow.

#![no_main]

use acekit::{decode, decode_to_chars, encode, inspect};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Property 1: decode never panics
    let Ok(decoded) = decode(input) else {
        return;
    };

    // Property 2: both decode entry points agree
    let chars = decode_to_chars(input).expect("decode succeeded, decode_to_chars must too");
    assert_eq!(chars.iter().collect::<String>(), decoded);

    // Property 3: inspect reconstructs the same string
    let report = inspect(input).expect("decode succeeded, inspect must too");
    assert_eq!(report.decoded(), decoded);

    // Property 4: the canonical re-encoding decodes back. It need not equal
    // the input ("abc" decodes to "\u{82}\u{81}\u{80}", which re-encodes differently).
    let Ok(reencoded) = encode(&decoded) else {
        return;
    };
    if !decoded.is_ascii() || decoded.contains('-') || decoded.is_empty() {
        assert_eq!(decode(&reencoded).as_deref(), Ok(decoded.as_str()));
    }
});
