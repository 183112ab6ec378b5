//! Hostname wrapper invariants.

use acekit::{idna_decode, idna_encode, is_ace_label, needs_encoding, ACE_PREFIX};
use proptest::prelude::*;

/// Lowercase labels the wrapper round-trips: either host-safe ASCII, or
/// containing at least one non-ASCII character.
fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9]{1,12}",
        "[a-z0-9]{0,4}[äöüßéñжд日本][a-z0-9äöüжд-]{0,6}",
    ]
    .prop_filter("not an ACE label", |s| !is_ace_label(s))
}

fn hostname_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(label_strategy(), 1..5)
}

proptest! {
    /// Property: lowercase hostnames survive encode then decode.
    #[test]
    fn prop_hostname_round_trip(labels in hostname_strategy()) {
        let hostname = labels.join(".");
        let ascii = idna_encode(&hostname).unwrap();
        prop_assert!(ascii.is_ascii());
        prop_assert_eq!(idna_decode(&ascii).unwrap(), hostname);
    }

    /// Property: the label count never changes.
    #[test]
    fn prop_label_count_preserved(labels in hostname_strategy()) {
        let hostname = labels.join(".");
        let ascii = idna_encode(&hostname).unwrap();
        prop_assert_eq!(ascii.split('.').count(), labels.len());
    }

    /// Property: exactly the labels that need encoding get the prefix.
    #[test]
    fn prop_prefix_marks_encoded_labels(labels in hostname_strategy()) {
        let ascii = idna_encode(&labels.join(".")).unwrap();
        for (source, output) in labels.iter().zip(ascii.split('.')) {
            prop_assert_eq!(needs_encoding(source), output.starts_with(ACE_PREFIX));
        }
    }

    /// Property: host-safe hostnames pass through both directions untouched.
    #[test]
    fn prop_host_safe_passthrough(hostname in "[A-Za-z0-9_~-]{0,10}(\\.[A-Za-z0-9_~-]{0,10}){0,3}") {
        prop_assume!(!hostname.split('.').any(is_ace_label));
        prop_assert_eq!(idna_encode(&hostname).unwrap(), hostname.clone());
        prop_assert_eq!(idna_decode(&hostname).unwrap(), hostname);
    }
}
