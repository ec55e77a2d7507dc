//! Header blob encoding used by the webhook integration API.
//!
//! Datadog stores a hook's headers as one string of `Key: Value` lines. The
//! key is everything before the first colon and the value everything after
//! it, minus a single leading space. Colons inside the value are kept.

use std::collections::BTreeMap;
use crate::enums::translation_error::TranslationError;

pub struct HeaderCodec;

impl HeaderCodec {
    /// Joins the headers into `Key: Value` lines. An empty map yields `""`.
    pub fn encode(headers: &BTreeMap<String, String>) -> String {
        headers
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Splits a header blob back into a map. Blank lines are skipped and any
    /// other line without a colon fails the whole decode.
    pub fn decode(blob: &str) -> Result<BTreeMap<String, String>, TranslationError> {
        let mut headers = BTreeMap::new();

        if blob.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r')).is_empty() {
            return Ok(headers);
        }

        for raw_line in blob.split('\n') {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                return Err(TranslationError::malformed_header(line));
            };

            let value = value.strip_prefix(' ').unwrap_or(value);
            headers.insert(key.to_string(), value.to_string());
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_encodes_to_empty_string() {
        assert_eq!(HeaderCodec::encode(&BTreeMap::new()), "");
    }

    #[test]
    fn whitespace_only_blob_decodes_to_empty_map() {
        assert!(HeaderCodec::decode("").unwrap().is_empty());
        assert!(HeaderCodec::decode(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn strips_exactly_one_leading_space() {
        let headers = HeaderCodec::decode("X-Pad:   padded").unwrap();
        assert_eq!(headers["X-Pad"], "  padded");

        let headers = HeaderCodec::decode("X-Tight:tight").unwrap();
        assert_eq!(headers["X-Tight"], "tight");
    }

    #[test]
    fn keeps_colons_inside_values() {
        let headers = HeaderCodec::decode("Authorization: Basic user:pass").unwrap();
        assert_eq!(headers["Authorization"], "Basic user:pass");
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let headers = HeaderCodec::decode("A: 1\r\n\r\nB: 2\n").unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["A"], "1");
        assert_eq!(headers["B"], "2");
    }
}
