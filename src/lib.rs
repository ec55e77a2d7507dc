//! Declarative management of the Datadog webhook integration.
//!
//! The account's webhook integration is a single remote object holding every
//! hook. [`WebhookIntegrationAdapter`] maps it onto a create, read, delete,
//! exists and import lifecycle, translating between typed [`WebhookSpec`]s
//! and the API's string-typed wire records.

pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use adapters::integration_lock::IntegrationLock;
pub use adapters::webhook_integration_adapter::WebhookIntegrationAdapter;
pub use enums::client_error::ClientError;
pub use enums::translation_error::TranslationError;
pub use errors::{WebhookError, WebhookResult};
pub use services::datadog_client::DatadogClient;
pub use services::header_codec::HeaderCodec;
pub use structs::datadog_webhook::{DatadogWebhook, IntegrationWebhook};
pub use structs::integration_state::IntegrationState;
pub use structs::resource_config::ResourceConfig;
pub use structs::webhook_spec::WebhookSpec;
pub use traits::integration_client::IntegrationClient;
