//! RFC 3492 Punycode, and a per-label `xn--` wrapper for hostnames.
//!
//! The codec converts between an arbitrary Unicode string and a restricted
//! ASCII form (`[a-z0-9]` digits after the basic code points). The label
//! wrapper applies it independently to each `.`-separated label of a hostname.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                 idna.rs                  │
//! │   idna_encode / idna_decode (per label)  │
//! └────────────────────┬─────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  encode.rs   │   │  decode.rs   │◀──│  inspect.rs  │
//! └──────┬───────┘   └──────┬───────┘   └──────────────┘
//!        │                  │
//!        ▼                  ▼
//! ┌──────────────────────────────────────────┐
//! │                params.rs                 │
//! │  constants, threshold, adapt_bias, digits│
//! └──────────────────────────────────────────┘
//!        │                  │
//!        ▼                  ▼
//! ┌──────────────────────────────────────────┐
//! │   contracts.rs (debug-build invariants)  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use acekit::{decode, encode, idna_encode};
//!
//! assert_eq!(encode("münchen").unwrap(), "mnchen-3ya");
//! assert_eq!(decode("mnchen-3ya").unwrap(), "münchen");
//! assert_eq!(idna_encode("münchen.de").unwrap(), "xn--mnchen-3ya.de");
//! ```
//!
//! # Edge-case policy
//!
//! - An all-ASCII string with no `-` encodes to itself. One *with* a `-` gets a
//!   trailing delimiter (`"a-b"` → `"a-b-"`).
//! - Decoding input with no `-` treats all of it as digits (`"abc"` is not a
//!   passthrough).
//! - Digits are lowercase only; `"KVA"` is malformed.

// Module declarations
pub mod contracts;
pub mod error;
pub mod idna;
pub mod punycode;
pub mod testing;

// Re-exports for public API
pub use error::{IdnaError, PunycodeError};
pub use idna::{
    idna_decode, idna_encode, is_ace_label, is_host_char, needs_encoding, ACE_PREFIX,
    LABEL_SEPARATOR,
};
pub use punycode::{
    adapt_bias, char_to_digit, decode, decode_to_chars, digit_to_char, encode, encode_chars,
    encode_code_points, inspect, split_basic, threshold, InsertionStep, Inspection,
};
