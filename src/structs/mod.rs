pub mod cli;
pub mod config;
pub mod datadog_webhook;
pub mod integration_state;
pub mod resource_config;
pub mod resource_schema;
pub mod stored_state;
pub mod webhook_spec;
