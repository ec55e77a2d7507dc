use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DatadogConfig {
    #[serde(default = "ConfigHelper::default_api_url")]
    pub api_url: String,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_app_key_env")]
    pub app_key_env: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DatadogConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_api_url(),
            api_key_env: ConfigHelper::default_api_key_env(),
            app_key_env: ConfigHelper::default_app_key_env(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}
