pub mod integration_client;
