use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.datadoghq.com";
pub const INTEGRATION_WEBHOOK_PATH: &str = "api/v1/integration/webhooks";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_HEADER: &str = "DD-API-KEY";
pub const APPLICATION_KEY_HEADER: &str = "DD-APPLICATION-KEY";

pub const DATADOG_API_KEY_ENV: &str = "DATADOG_API_KEY";
pub const DATADOG_APP_KEY_ENV: &str = "DATADOG_APP_KEY";
pub const DATADOG_HOST_ENV: &str = "DATADOG_HOST";

pub const CONFIG_DIR_NAME: &str = "ddwebhook";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_STATE_FILE: &str = "ddwebhook.state.json";

/// The integration is an account singleton, so every state carries the same id.
pub const RESOURCE_ID: &str = "datadog-integration-webhook";
pub const DEFAULT_IMPORT_ID: &str = RESOURCE_ID;

pub const fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
