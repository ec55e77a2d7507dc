pub mod integration_lock;
pub mod webhook_integration_adapter;
