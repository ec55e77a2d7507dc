use std::collections::HashSet;
use std::fs;
use std::path::Path;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use crate::errors::{WebhookError, WebhookResult};
use crate::structs::webhook_spec::WebhookSpec;

/// Desired configuration of the webhook integration, as read from a hooks file:
///
/// ```toml
/// [[hooks]]
/// name = "alerts"
/// url = "https://example.com/alerts"
/// headers = { "X-Team" = "sre" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    #[serde(default)]
    pub hooks: Vec<WebhookSpec>,
}

impl ResourceConfig {
    pub const fn new(hooks: Vec<WebhookSpec>) -> Self {
        Self { hooks }
    }

    pub fn from_toml_str(content: &str) -> WebhookResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads and validates a hooks file.
    pub fn load(path: &Path) -> WebhookResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| WebhookError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| WebhookError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reports every problem at once rather than stopping at the first.
    pub fn validate(&self) -> WebhookResult<()> {
        let mut errors = Vec::new();

        if self.hooks.is_empty() {
            errors.push(WebhookError::validation_error("hooks", "[]", "at least one hook is required"));
        }

        let mut names = HashSet::new();
        for (index, hook) in self.hooks.iter().enumerate() {
            let prefix = format!("hooks[{}]", index);

            if hook.name.trim().is_empty() {
                errors.push(WebhookError::validation_error(&format!("{}.name", prefix), &hook.name, "must not be empty"));
            } else if !names.insert(hook.name.as_str()) {
                errors.push(WebhookError::validation_error(&format!("{}.name", prefix), &hook.name, "must be unique"));
            }

            if hook.url.trim().is_empty() {
                errors.push(WebhookError::validation_error(&format!("{}.url", prefix), &hook.url, "must not be empty"));
            } else {
                match Url::parse(&hook.url) {
                    Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                    Ok(url) => errors.push(WebhookError::validation_error(
                        &format!("{}.url", prefix),
                        &hook.url,
                        &format!("scheme '{}' is not http or https", url.scheme()),
                    )),
                    Err(e) => errors.push(WebhookError::validation_error(&format!("{}.url", prefix), &hook.url, &e.to_string())),
                }
            }

            for (key, value) in hook.headers.iter().flatten() {
                let field = format!("{}.headers.{}", prefix, key);
                if key.is_empty() {
                    errors.push(WebhookError::validation_error(&field, key, "header name must not be empty"));
                }
                if key.contains([':', '\n', '\r']) {
                    errors.push(WebhookError::validation_error(&field, key, "header name must not contain ':' or newlines"));
                }
                if value.contains(['\n', '\r']) {
                    errors.push(WebhookError::validation_error(&field, value, "header value must not contain newlines"));
                }
            }
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(WebhookError::MultipleErrors {
                errors,
                context: "hooks validation".to_string(),
            }),
        }
    }
}
