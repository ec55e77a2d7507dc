use serde::{Deserialize, Serialize};
use crate::structs::config::datadog_config::DatadogConfig;
use crate::structs::config::state_config::StateConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub datadog: DatadogConfig,

    #[serde(default)]
    pub state: StateConfig,
}
