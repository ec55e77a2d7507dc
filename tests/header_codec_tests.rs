use std::collections::BTreeMap;
use ddwebhook::{HeaderCodec, TranslationError};
use proptest::prelude::*;

#[test]
fn decodes_single_header() {
    let headers = HeaderCodec::decode("Content-Type: application/json").unwrap();

    let expected = BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]);
    assert_eq!(headers, expected);
}

#[test]
fn line_without_colon_fails() {
    assert_eq!(
        HeaderCodec::decode("X-Foo"),
        Err(TranslationError::MalformedHeader { line: "X-Foo".to_string() })
    );
}

#[test]
fn one_bad_line_fails_the_whole_blob() {
    assert!(HeaderCodec::decode("A: 1\nbroken\nB: 2").is_err());
}

#[test]
fn empty_inputs() {
    assert_eq!(HeaderCodec::encode(&BTreeMap::new()), "");
    assert_eq!(HeaderCodec::decode("").unwrap(), BTreeMap::new());
}

#[test]
fn encodes_one_line_per_header() {
    let headers = BTreeMap::from([
        ("A".to_string(), "1".to_string()),
        ("B".to_string(), "two words".to_string()),
    ]);

    let blob = HeaderCodec::encode(&headers);
    let mut lines: Vec<&str> = blob.lines().collect();
    lines.sort_unstable();

    assert_eq!(lines, vec!["A: 1", "B: two words"]);
}

#[test]
fn colon_in_value_survives_round_trip() {
    let headers = BTreeMap::from([("Authorization".to_string(), "Basic user:pass".to_string())]);
    assert_eq!(HeaderCodec::decode(&HeaderCodec::encode(&headers)).unwrap(), headers);
}

proptest! {
    #[test]
    fn decode_inverts_encode(headers in prop::collection::btree_map("[A-Za-z0-9_-]{1,12}", "[ -9;-~]{0,20}", 0..8)) {
        let decoded = HeaderCodec::decode(&HeaderCodec::encode(&headers)).unwrap();
        prop_assert_eq!(decoded, headers);
    }

    #[test]
    fn values_with_colons_round_trip(headers in prop::collection::btree_map("[A-Za-z0-9-]{1,12}", "[ -~]{0,20}", 0..8)) {
        let decoded = HeaderCodec::decode(&HeaderCodec::encode(&headers)).unwrap();
        prop_assert_eq!(decoded, headers);
    }
}
