//! RFC 3492 §7.1 sample strings and everyday labels.

use super::common::{assert_codec_pair, code_points, LABEL_SAMPLES, RFC3492_SAMPLES};
use acekit::{decode_to_chars, encode_chars, encode_code_points};

#[test]
fn test_rfc_samples() {
    for sample in RFC3492_SAMPLES {
        println!("{}", sample.description);
        assert_codec_pair(sample.decoded, sample.encoded);
    }
}

#[test]
fn test_label_samples() {
    for sample in LABEL_SAMPLES {
        assert_codec_pair(sample.decoded, sample.encoded);
    }
}

#[test]
fn test_entry_points_agree() {
    for sample in RFC3492_SAMPLES.iter().chain(LABEL_SAMPLES) {
        let chars: Vec<char> = sample.decoded.chars().collect();
        assert_eq!(encode_chars(&chars).as_deref(), Ok(sample.encoded));
        assert_eq!(
            encode_code_points(&code_points(sample.decoded)).as_deref(),
            Ok(sample.encoded)
        );
        assert_eq!(decode_to_chars(sample.encoded), Ok(chars));
    }
}

#[test]
fn test_mixed_case_basic_code_points_survive() {
    // Case lives in the basic region only; the digits are always lowercase.
    assert_codec_pair("ÜBER", "BER-ska");
    assert_codec_pair("über", "ber-goa");
}

#[test]
fn test_astral_code_points() {
    assert_codec_pair("😀", "e28h");
    assert_codec_pair("a😀", "a-jv3s");
    assert_codec_pair("日本", "wgv71a");
}
