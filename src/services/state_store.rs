use std::path::{Path, PathBuf};
use crate::errors::{WebhookError, WebhookResult};
use crate::structs::integration_state::IntegrationState;
use crate::structs::stored_state::StoredState;

/// JSON file holding the local copy of the integration state.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `None` when no state has been written yet.
    pub async fn load(&self) -> WebhookResult<Option<StoredState>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.error("read", &e.to_string())),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| self.error("parse", &e.to_string()))
    }

    pub async fn save(&self, integration: &IntegrationState) -> WebhookResult<StoredState> {
        let stored = StoredState::new(integration.clone());
        let content = serde_json::to_string_pretty(&stored)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.error("create directory", &e.to_string()))?;
        }

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| self.error("write", &e.to_string()))?;

        log::debug!("Saved {} hooks to {}", integration.hooks.len(), self.path.display());
        Ok(stored)
    }

    /// Removing a state file that does not exist is not an error.
    pub async fn remove(&self) -> WebhookResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.error("remove", &e.to_string())),
        }
    }

    fn error(&self, operation: &str, reason: &str) -> WebhookError {
        WebhookError::state_error(&self.path.display().to_string(), operation, reason)
    }
}
