use std::fs;
use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{WebhookError, WebhookResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    /// Loads `~/ddwebhook/config.toml`, falling back to defaults when absent.
    pub fn load() -> WebhookResult<Config> {
        let config_location = Self::config_path();

        if config_location.exists() {
            log::debug!("📋 Loading config from: {}", config_location.display());
            let content = fs::read_to_string(&config_location).map_err(|e| WebhookError::ConfigurationFileError {
                path: config_location.display().to_string(),
                reason: e.to_string(),
            })?;
            let config = Self::parse(&content)?;
            Self::validate_config(&config)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn parse(content: &str) -> WebhookResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn sample_config() -> &'static str {
        r#"# ddwebhook configuration

[datadog]
# Datadog site API endpoint, overridden by DATADOG_HOST
api_url = "https://api.datadoghq.com"

# Environment variables holding the credentials
api_key_env = "DATADOG_API_KEY"
app_key_env = "DATADOG_APP_KEY"

# HTTP timeout for every request
timeout_secs = 30

[state]
# Where the local copy of the integration is kept
path = "ddwebhook.state.json"
"#
    }

    pub fn create_sample_config() -> WebhookResult<PathBuf> {
        let config_file_path = Self::config_path();

        if config_file_path.exists() {
            return Err(WebhookError::config_error(
                &format!("{} already exists", config_file_path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(config_dir) = config_file_path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        fs::write(&config_file_path, Self::sample_config())?;
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> WebhookResult<()> {
        let mut errors = Vec::new();

        if !config.datadog.api_url.starts_with("http://") && !config.datadog.api_url.starts_with("https://") {
            errors.push(WebhookError::validation_error("datadog.api_url", &config.datadog.api_url, "must start with http:// or https://"));
        }

        if config.datadog.timeout_secs == 0 {
            errors.push(WebhookError::validation_error("datadog.timeout_secs", "0", "must be greater than zero"));
        }

        if config.datadog.api_key_env.trim().is_empty() {
            errors.push(WebhookError::validation_error("datadog.api_key_env", "", "must name an environment variable"));
        }

        if config.datadog.app_key_env.trim().is_empty() {
            errors.push(WebhookError::validation_error("datadog.app_key_env", "", "must name an environment variable"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(WebhookError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_matches_defaults() {
        let config = ConfigManager::parse(ConfigManager::sample_config()).unwrap();
        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = ConfigManager::parse("[datadog]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.datadog.timeout_secs, 5);
        assert_eq!(config.datadog.api_url, "https://api.datadoghq.com");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ConfigManager::parse("[datadog]\ntimeout_secs = 0\n").unwrap();
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
