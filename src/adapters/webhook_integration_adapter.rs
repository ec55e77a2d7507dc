use std::sync::Arc;
use crate::adapters::integration_lock::IntegrationLock;
use crate::enums::integration_operation::IntegrationOperation;
use crate::errors::{WebhookError, WebhookResult};
use crate::services::webhook_translator::WebhookTranslator;
use crate::structs::integration_state::IntegrationState;
use crate::structs::resource_config::ResourceConfig;
use crate::traits::integration_client::IntegrationClient;

/// Drives the webhook integration lifecycle against an [`IntegrationClient`].
///
/// The integration is an account singleton: `create` establishes every hook
/// at once and `delete` removes all of them. Both run under the adapter's
/// [`IntegrationLock`]; `read` and `exists` do not.
pub struct WebhookIntegrationAdapter {
    client: Arc<dyn IntegrationClient>,
    lock: IntegrationLock,
}

impl WebhookIntegrationAdapter {
    /// Uses the process-wide lock.
    pub fn new(client: Arc<dyn IntegrationClient>) -> Self {
        Self::with_lock(client, IntegrationLock::process_wide())
    }

    pub fn with_lock(client: Arc<dyn IntegrationClient>, lock: IntegrationLock) -> Self {
        Self { client, lock }
    }

    pub const fn lock(&self) -> &IntegrationLock {
        &self.lock
    }

    /// `Ok(false)` when the remote reports not found or holds no hooks.
    pub async fn exists(&self) -> WebhookResult<bool> {
        match self.client.get_integration_webhook().await {
            Ok(integration) => Ok(!integration.webhooks.is_empty()),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(WebhookError::integration(IntegrationOperation::Read, e)),
        }
    }

    /// Sends every configured hook in one request, then refreshes `state`
    /// from what the server reports.
    pub async fn create(&self, config: &ResourceConfig, state: &mut IntegrationState) -> WebhookResult<()> {
        let _guard = self.lock.acquire().await;

        let request = WebhookTranslator::to_create_request(config);
        log::info!("Creating webhook integration with {} hooks", request.webhooks.len());

        self.client
            .create_integration_webhook(&request)
            .await
            .map_err(|e| WebhookError::integration(IntegrationOperation::Create, e))?;

        self.read(state).await
    }

    /// Replaces `state` with the remote hooks. On any error `state` is left
    /// exactly as it was.
    pub async fn read(&self, state: &mut IntegrationState) -> WebhookResult<()> {
        let integration = self.client
            .get_integration_webhook()
            .await
            .map_err(|e| WebhookError::integration(IntegrationOperation::Read, e))?;

        let refreshed = WebhookTranslator::to_integration_state(&integration)?;
        log::debug!("Read {} hooks from the webhook integration", refreshed.hooks.len());

        *state = refreshed;
        Ok(())
    }

    pub async fn delete(&self) -> WebhookResult<()> {
        let _guard = self.lock.acquire().await;

        log::info!("Deleting webhook integration");
        self.client
            .delete_integration_webhook()
            .await
            .map_err(|e| WebhookError::integration(IntegrationOperation::Delete, e))
    }

    /// The id is only a placeholder; there is one integration per account.
    pub async fn import(&self, id: &str) -> WebhookResult<IntegrationState> {
        log::debug!("Importing webhook integration '{}'", id);

        let mut state = IntegrationState::default();
        self.read(&mut state).await?;
        Ok(state)
    }
}
