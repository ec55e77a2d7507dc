use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::adapters::webhook_integration_adapter::WebhookIntegrationAdapter;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ResultExt, WebhookError, WebhookResult};
use crate::logger::integration_logger::IntegrationLogger;
use crate::services::datadog_client::DatadogClient;
use crate::services::state_store::StateStore;
use crate::structs::config::config::Config;
use crate::structs::integration_state::IntegrationState;
use crate::structs::resource_config::ResourceConfig;
use crate::structs::resource_schema::ResourceSchema;
use crate::traits::integration_client::IntegrationClient;

/// Plays the hosting framework: loads configuration, drives the adapter and
/// keeps the local state file in step with the outcome.
pub struct CommandRunner {
    config: Config,
    state_store: StateStore,
    client: Option<Arc<dyn IntegrationClient>>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config, state_path: Option<PathBuf>) -> Self {
        let state_path = state_path.unwrap_or_else(|| config.state.path.clone());

        Self {
            config,
            state_store: StateStore::new(state_path),
            client: None,
            start_time: None,
        }
    }

    /// Uses the given client instead of building one from the environment.
    #[must_use]
    pub fn with_client(mut self, client: Arc<dyn IntegrationClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub const fn state_store(&self) -> &StateStore {
        &self.state_store
    }

    pub async fn run_command(&mut self, command: Commands) -> WebhookResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => Self::init_command(),
            Commands::Schema => Self::schema_command(),
            Commands::Validate { file } => Self::validate_command(&file),
            Commands::Plan { file } => self.plan_command(&file).await,
            Commands::Create { file } => self.create_command(&file).await,
            Commands::Read => self.read_command().await,
            Commands::Exists => self.exists_command().await,
            Commands::Delete => self.delete_command().await,
            Commands::Import { id } => self.import_command(&id).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn adapter(&self) -> WebhookResult<WebhookIntegrationAdapter> {
        let client: Arc<dyn IntegrationClient> = match &self.client {
            Some(client) => Arc::clone(client),
            None => Arc::new(DatadogClient::from_config(&self.config.datadog)?),
        };

        Ok(WebhookIntegrationAdapter::new(client))
    }

    fn init_command() -> WebhookResult<()> {
        log::info!("🚀 Initializing ddwebhook configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("✅ Created sample config at: {}", path.display());
        log::info!("🔧 Export DATADOG_API_KEY and DATADOG_APP_KEY before running 'ddwebhook create'.");
        Ok(())
    }

    fn schema_command() -> WebhookResult<()> {
        let schema = serde_json::to_string_pretty(&ResourceSchema::webhook_integration())?;
        println!("{}", schema);
        Ok(())
    }

    fn validate_command(file: &Path) -> WebhookResult<()> {
        let config = ResourceConfig::load(file)?;
        log::info!("✅ {} is valid ({} hooks)", file.display(), config.hooks.len());
        Ok(())
    }

    async fn plan_command(&self, file: &Path) -> WebhookResult<()> {
        let config = ResourceConfig::load(file)?;
        let prior = self.state_store
            .load()
            .await?
            .map(|stored| stored.integration)
            .unwrap_or_default();

        IntegrationLogger::print_plan(&prior, &config.hooks);

        if prior.is_empty() {
            log::info!("📋 Plan: create the webhook integration with {} hooks", config.hooks.len());
        } else if ResourceSchema::requires_replacement(&prior, &config) {
            log::info!("📋 Plan: hooks changed, the webhook integration must be deleted and recreated");
        } else {
            log::info!("📋 Plan: no changes");
        }
        Ok(())
    }

    async fn create_command(&self, file: &Path) -> WebhookResult<()> {
        let config = ResourceConfig::load(file)?;
        let adapter = self.adapter()?;

        let mut state = IntegrationState::default();
        adapter.create(&config, &mut state).await?;

        let stored = self.state_store.save(&state).await?;
        log::info!("✅ Webhook integration created with {} hooks", state.hooks.len());
        IntegrationLogger::print_state(&stored);
        Ok(())
    }

    async fn read_command(&self) -> WebhookResult<()> {
        let adapter = self.adapter()?;

        if !adapter.exists().await? {
            log::info!("⚠️ The webhook integration no longer exists, removing local state");
            return self.state_store.remove().await;
        }

        let mut state = IntegrationState::default();
        adapter.read(&mut state).await?;

        let stored = self.state_store.save(&state).await?;
        IntegrationLogger::print_state(&stored);
        Ok(())
    }

    async fn exists_command(&self) -> WebhookResult<()> {
        let exists = self.adapter()?.exists().await?;
        println!("{}", exists);
        Ok(())
    }

    async fn delete_command(&self) -> WebhookResult<()> {
        self.adapter()?.delete().await?;
        self.state_store.remove().await.with_context("removing local state")?;
        log::info!("🗑️  Webhook integration deleted");
        Ok(())
    }

    async fn import_command(&self, id: &str) -> WebhookResult<()> {
        let state = self.adapter()?.import(id).await?;

        if state.is_empty() {
            return Err(WebhookError::config_error(
                "the webhook integration has no hooks to import",
                None,
                Some("Create it with 'ddwebhook create' instead"),
            ));
        }

        let stored = self.state_store.save(&state).await?;
        log::info!("📥 Imported {} hooks", state.hooks.len());
        IntegrationLogger::print_state(&stored);
        Ok(())
    }
}
