//! Encode/decode invariants over generated strings.

use super::common::{code_points, round_trips};
use acekit::{
    char_to_digit, decode, decode_to_chars, encode, encode_chars, encode_code_points, split_basic,
    PunycodeError,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words mixing ASCII with scripts that commonly show up in labels.
fn mixed_word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", "z", "0", "9", "-", "café", "naïve", "über", "ß", "ñ", "тест", "рф",
            "日本", "中文", "한국", "ไทย", "हिन्दी", "తెలుగు", "😀",
        ]),
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

/// Any valid Unicode scalar.
fn scalar_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..16).prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: decode(encode(s)) == s outside the ASCII fixed point.
    #[test]
    fn prop_round_trip_mixed(s in mixed_word_strategy()) {
        prop_assume!(round_trips(&s));
        let encoded = encode(&s).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    /// Property: round trip for arbitrary scalars.
    #[test]
    fn prop_round_trip_scalars(s in scalar_strategy()) {
        prop_assume!(round_trips(&s));
        let encoded = encode(&s).unwrap();
        prop_assert_eq!(decode_to_chars(&encoded).unwrap(), s.chars().collect::<Vec<_>>());
    }

    /// Property: the three encode entry points agree.
    #[test]
    fn prop_encode_entry_points_agree(s in scalar_strategy()) {
        let chars: Vec<char> = s.chars().collect();
        let expected = encode(&s);
        prop_assert_eq!(encode_chars(&chars), expected.clone());
        prop_assert_eq!(encode_code_points(&code_points(&s)), expected);
    }

    /// Property: ASCII without '-' encodes to itself.
    #[test]
    fn prop_ascii_fixed_point(s in "[ -,.-~]{0,32}") {
        prop_assert_eq!(encode(&s).unwrap(), s);
    }

    /// Property: ASCII with '-' gets exactly one trailing delimiter.
    #[test]
    fn prop_ascii_with_delimiter(a in "[a-z0-9]{0,8}", b in "[a-z0-9]{0,8}") {
        let s = format!("{}-{}", a, b);
        let encoded = encode(&s).unwrap();
        prop_assert_eq!(&encoded, &format!("{}-", s));
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    /// Property: basic code points appear verbatim, in order, before the last '-'.
    #[test]
    fn prop_basic_region_is_ascii_subsequence(s in mixed_word_strategy()) {
        prop_assume!(!s.is_ascii());
        let encoded = encode(&s).unwrap();
        let (basic, digits) = split_basic(&encoded);
        let expected: String = s.chars().filter(char::is_ascii).collect();
        prop_assert_eq!(basic, expected.as_str());
        prop_assert!(!digits.is_empty());
        prop_assert!(digits.chars().all(|c| char_to_digit(c).is_some()));
    }

    /// Property: encoding is deterministic.
    #[test]
    fn prop_deterministic(s in scalar_strategy()) {
        prop_assert_eq!(encode(&s), encode(&s));
    }

    /// Property: any uppercase letter in the digit region is rejected.
    #[test]
    fn prop_uppercase_digits_rejected(s in mixed_word_strategy(), idx in any::<prop::sample::Index>()) {
        prop_assume!(!s.is_ascii());
        let encoded = encode(&s).unwrap();
        let (basic, digits) = split_basic(&encoded);
        let letters: Vec<usize> = digits
            .char_indices()
            .filter(|(_, c)| c.is_ascii_lowercase())
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!letters.is_empty());

        let at = letters[idx.index(letters.len())];
        let mut corrupted = digits.to_string();
        corrupted.replace_range(at..=at, &digits[at..=at].to_ascii_uppercase());
        let input = if basic.is_empty() {
            corrupted
        } else {
            format!("{}-{}", basic, corrupted)
        };

        let rejected = matches!(
            decode(&input),
            Err(PunycodeError::MalformedInput { .. })
        );
        prop_assert!(rejected, "{:?} was accepted", input);
    }

    /// Property: decode is total over arbitrary strings.
    #[test]
    fn prop_decode_never_panics(s in ".{0,64}") {
        let _ = decode(&s);
    }

    /// Property: encode_code_points is total over arbitrary u32s.
    #[test]
    fn prop_encode_code_points_never_panics(points in prop::collection::vec(any::<u32>(), 0..8)) {
        let _ = encode_code_points(&points);
    }
}
