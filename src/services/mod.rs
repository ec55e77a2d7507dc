pub mod datadog_client;
pub mod header_codec;
pub mod state_store;
pub mod webhook_translator;
