pub mod client_error;
pub mod commands;
pub mod integration_operation;
pub mod translation_error;
