//! Empty input, delimiter placement, and the ASCII fixed point.

use super::common::assert_codec_pair;
use acekit::{decode, encode, encode_code_points, split_basic};

#[test]
fn test_empty() {
    assert_eq!(encode("").as_deref(), Ok(""));
    assert_eq!(decode("").as_deref(), Ok(""));
}

#[test]
fn test_ascii_without_delimiter_is_fixed_point() {
    for s in ["a", "abc", "Example", "3com", "a b!", "~_~"] {
        assert_eq!(encode(s).as_deref(), Ok(s));
    }
}

#[test]
fn test_ascii_with_delimiter_takes_general_path() {
    assert_codec_pair("-", "--");
    assert_codec_pair("---", "----");
    assert_codec_pair("a-b", "a-b-");
    assert_codec_pair("ab-", "ab--");
}

#[test]
fn test_delimiter_only_emitted_with_basic_code_points() {
    // No basic code points: digits only, no leading '-'.
    assert_codec_pair("ü", "tda");
    assert_codec_pair("üü", "tdaa");
    // One basic code point, which happens to be the delimiter.
    assert_codec_pair("-ü", "--eha");
    assert_codec_pair("ü-", "--dha");
}

#[test]
fn test_decode_without_delimiter_reads_everything_as_digits() {
    assert_eq!(decode("a").as_deref(), Ok("\u{80}"));
    assert_eq!(decode("ab").as_deref(), Ok("\u{81}\u{80}"));
    assert_eq!(decode("abc").as_deref(), Ok("\u{82}\u{81}\u{80}"));
    assert_eq!(decode("kva").as_deref(), Ok("\u{369}"));
}

#[test]
fn test_decode_leading_delimiter_means_empty_basic_region() {
    assert_eq!(decode("-").as_deref(), Ok(""));
    assert_eq!(decode("-a").as_deref(), Ok("\u{80}"));
    assert_eq!(decode("-kva"), decode("kva"));
}

#[test]
fn test_decode_trailing_delimiter_means_no_digits() {
    assert_eq!(decode("a-").as_deref(), Ok("a"));
    assert_eq!(decode("abc-").as_deref(), Ok("abc"));
    assert_eq!(decode("--").as_deref(), Ok("-"));
}

#[test]
fn test_decode_does_not_strip_ace_prefix() {
    // The prefix is the label wrapper's business; raw decode reads
    // "xn-" as basic code points.
    assert_eq!(decode("xn--p1ai").as_deref(), Ok("\u{170}xn-\u{171}"));
}

#[test]
fn test_split_basic_uses_last_delimiter() {
    assert_eq!(split_basic("a-b-c"), ("a-b", "c"));
    assert_eq!(split_basic("abc"), ("", "abc"));
    assert_eq!(split_basic("-abc"), ("", "abc"));
    assert_eq!(split_basic("abc-"), ("abc", ""));
}

#[test]
fn test_encoder_range_edges() {
    assert_eq!(encode_code_points(&[0x80]).as_deref(), Ok("a"));
    assert_eq!(encode_code_points(&[0xD87F]).as_deref(), Ok("4e9b"));
    assert_eq!(encode_code_points(&[0xE000]).as_deref(), Ok("0y0c"));
    assert_eq!(encode_code_points(&[0x1F_FFFF]).as_deref(), Ok("7352o"));
}
