pub mod config;
pub mod datadog_config;
pub mod state_config;
