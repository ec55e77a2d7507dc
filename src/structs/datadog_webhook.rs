use serde::{Deserialize, Serialize};

/// A hook as the Datadog API sends and receives it. Booleans travel as
/// `"true"`/`"false"` strings and headers as one newline separated blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatadogWebhook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_custom_payload: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_payload: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encode_as_form: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
}

/// Request and response envelope of the webhook integration endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationWebhook {
    #[serde(rename = "hooks", default)]
    pub webhooks: Vec<DatadogWebhook>,
}

impl IntegrationWebhook {
    pub const fn new(webhooks: Vec<DatadogWebhook>) -> Self {
        Self { webhooks }
    }
}
