use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// One named hook as it appears in configuration and local state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSpec {
    pub name: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_custom_payload: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_payload: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encode_as_form: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl WebhookSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            use_custom_payload: None,
            custom_payload: None,
            encode_as_form: None,
            headers: None,
        }
    }

    #[must_use]
    pub fn with_custom_payload(mut self, payload: impl Into<String>) -> Self {
        self.use_custom_payload = Some(true);
        self.custom_payload = Some(payload.into());
        self
    }

    #[must_use]
    pub fn with_encode_as_form(mut self, encode_as_form: bool) -> Self {
        self.encode_as_form = Some(encode_as_form);
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}
