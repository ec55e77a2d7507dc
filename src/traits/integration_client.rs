use async_trait::async_trait;
use crate::enums::client_error::ClientError;
use crate::structs::datadog_webhook::IntegrationWebhook;

/// The three remote calls the webhook integration adapter relies on.
#[async_trait]
pub trait IntegrationClient: Send + Sync {
    /// Fetches the account's webhook integration, or [`ClientError::NotFound`].
    async fn get_integration_webhook(&self) -> Result<IntegrationWebhook, ClientError>;

    async fn create_integration_webhook(&self, request: &IntegrationWebhook) -> Result<(), ClientError>;

    async fn delete_integration_webhook(&self) -> Result<(), ClientError>;
}
