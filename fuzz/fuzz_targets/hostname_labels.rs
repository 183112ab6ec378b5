// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the per-label hostname wrapper.
//!
//! Labels are converted independently, so the label count and every
//! pass-through label must survive intact.

#![no_main]

use acekit::{encode, idna_decode, idna_encode, is_ace_label, needs_encoding, ACE_PREFIX};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|hostname: &str| {
    // Decoding never panics
    let _ = idna_decode(hostname);

    let Ok(ascii) = idna_encode(hostname) else {
        return;
    };

    let sources: Vec<&str> = hostname.split('.').collect();
    let outputs: Vec<&str> = ascii.split('.').collect();
    assert_eq!(sources.len(), outputs.len(), "label count must survive");

    for (source, output) in sources.iter().zip(&outputs) {
        if !needs_encoding(source) {
            assert_eq!(source, output, "host-safe labels pass through");
            continue;
        }

        assert!(is_ace_label(output), "{:?} -> {:?} lacks the ACE prefix", source, output);

        // Lowercased ASCII without '-' is its own encoding, so only the
        // general path is guaranteed to decode back.
        let lowered = source.to_lowercase();
        if lowered.is_ascii() && !lowered.contains('-') && !lowered.is_empty() {
            assert_eq!(encode(&lowered).as_deref(), Ok(lowered.as_str()));
            continue;
        }

        let unicode = idna_decode(output).expect("encoded label must decode");
        assert_eq!(unicode, lowered);
        assert_eq!(&output[..ACE_PREFIX.len()], ACE_PREFIX);
    }
});
