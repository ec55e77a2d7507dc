use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::constants::RESOURCE_ID;
use crate::structs::integration_state::IntegrationState;

/// Local state file contents: the last known remote truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredState {
    pub id: String,
    #[serde(flatten)]
    pub integration: IntegrationState,
    pub refreshed_at: DateTime<Utc>,
}

impl StoredState {
    pub fn new(integration: IntegrationState) -> Self {
        Self {
            id: RESOURCE_ID.to_string(),
            integration,
            refreshed_at: Utc::now(),
        }
    }
}
