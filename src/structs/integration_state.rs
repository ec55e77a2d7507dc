use serde::{Deserialize, Serialize};
use crate::structs::webhook_spec::WebhookSpec;

/// Every hook of the account's webhook integration, in remote order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationState {
    #[serde(default)]
    pub hooks: Vec<WebhookSpec>,
}

impl IntegrationState {
    pub const fn new(hooks: Vec<WebhookSpec>) -> Self {
        Self { hooks }
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn hook(&self, name: &str) -> Option<&WebhookSpec> {
        self.hooks.iter().find(|hook| hook.name == name)
    }
}
