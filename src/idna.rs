// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-label hostname conversion: the `xn--` wrapper around the codec.
//!
//! A hostname is split on `.`, each label is handled on its own, and the
//! results are joined back with `.`. Empty labels (`a..b`, a trailing dot)
//! survive untouched. There is no normalization and no IDNA2008/UTS #46
//! validation here; a label that needs Punycode is lowercased and encoded,
//! nothing more.
//!
//! ```
//! use acekit::{idna_decode, idna_encode};
//!
//! assert_eq!(idna_encode("bücher.example").unwrap(), "xn--bcher-kva.example");
//! assert_eq!(idna_decode("xn--bcher-kva.example").unwrap(), "bücher.example");
//! ```

use std::borrow::Cow;

use log::{debug, trace};

use crate::error::{IdnaError, PunycodeError};
use crate::punycode;

/// ASCII Compatible Encoding prefix marking a Punycode label.
pub const ACE_PREFIX: &str = "xn--";

/// Separator between labels.
pub const LABEL_SEPARATOR: char = '.';

/// Punctuation allowed in a label as-is, besides `-`.
const URL_SAFE_PUNCTUATION: &[char] = &[
    '_', '~', '!', '$', '&', '\'', '(', ')', '*', '+', ',', ';', '=',
];

/// Whether `c` may appear in a label without Punycode.
#[inline]
pub fn is_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || URL_SAFE_PUNCTUATION.contains(&c)
}

/// Whether a label has to go through the codec.
pub fn needs_encoding(label: &str) -> bool {
    !label.chars().all(is_host_char)
}

/// Whether a label carries the ACE prefix. The match is case-sensitive.
pub fn is_ace_label(label: &str) -> bool {
    label.starts_with(ACE_PREFIX)
}

/// Convert a Unicode hostname to its ASCII form.
///
/// Labels made only of host characters pass through unchanged (case
/// included). Anything else is lowercased, encoded and prefixed with `xn--`.
pub fn idna_encode(hostname: &str) -> Result<String, IdnaError> {
    map_labels(hostname, |label| {
        if !needs_encoding(label) {
            trace!("label {:?} passes through", label);
            return Ok(Cow::Borrowed(label));
        }

        let encoded = punycode::encode(&label.to_lowercase())?;
        trace!("label {:?} encoded as {}{}", label, ACE_PREFIX, encoded);
        Ok(Cow::Owned(format!("{}{}", ACE_PREFIX, encoded)))
    })
}

/// Convert an ASCII hostname back to Unicode.
///
/// Only labels starting with `xn--` are decoded; the rest pass through.
pub fn idna_decode(hostname: &str) -> Result<String, IdnaError> {
    map_labels(hostname, |label| match label.strip_prefix(ACE_PREFIX) {
        Some(payload) => {
            let decoded = punycode::decode(payload)?;
            trace!("label {:?} decoded as {:?}", label, decoded);
            Ok(Cow::Owned(decoded))
        }
        None => {
            trace!("label {:?} passes through", label);
            Ok(Cow::Borrowed(label))
        }
    })
}

/// Apply `convert` to every label, stopping at the first failure.
fn map_labels<'a, F>(hostname: &'a str, mut convert: F) -> Result<String, IdnaError>
where
    F: FnMut(&'a str) -> Result<Cow<'a, str>, PunycodeError>,
{
    let mut output = String::with_capacity(hostname.len() + ACE_PREFIX.len());

    for (index, label) in hostname.split(LABEL_SEPARATOR).enumerate() {
        if index > 0 {
            output.push(LABEL_SEPARATOR);
        }

        let converted = convert(label).map_err(|source| {
            debug!("label {} ({:?}) of {:?} failed: {}", index, label, hostname, source);
            IdnaError {
                index,
                label: label.to_string(),
                source,
            }
        })?;
        output.push_str(&converted);
    }

    Ok(output)
}
