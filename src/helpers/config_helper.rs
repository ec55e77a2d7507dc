use std::path::PathBuf;
use crate::config::constants::{
    DATADOG_API_KEY_ENV, DATADOG_APP_KEY_ENV, DEFAULT_API_URL, DEFAULT_STATE_FILE, DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_url() -> String {
        DEFAULT_API_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DATADOG_API_KEY_ENV.to_string()
    }

    pub fn default_app_key_env() -> String {
        DATADOG_APP_KEY_ENV.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_state_path() -> PathBuf {
        PathBuf::from(DEFAULT_STATE_FILE)
    }
}
