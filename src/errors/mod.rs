use std::fmt;
use std::error::Error as StdError;
use crate::enums::client_error::ClientError;
use crate::enums::integration_operation::IntegrationOperation;
use crate::enums::translation_error::TranslationError;

#[derive(Debug, Clone, PartialEq)]
pub enum WebhookError {
    // Remote API errors
    Integration {
        operation: IntegrationOperation,
        source: ClientError,
    },

    // Wire record could not be turned back into configuration
    Translation(TranslationError),

    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Hooks file errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // State file errors
    StateFileError {
        path: String,
        operation: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // Multiple errors (for batch validation)
    MultipleErrors {
        errors: Vec<WebhookError>,
        context: String,
    },
}

impl WebhookError {
    pub const fn integration(operation: IntegrationOperation, source: ClientError) -> Self {
        Self::Integration { operation, source }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn state_error(path: &str, operation: &str, reason: &str) -> Self {
        Self::StateFileError {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the remote reported that no integration exists.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Integration { source, .. } if source.is_not_found())
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Integration { source, .. } => matches!(source, ClientError::Network(_))
                || source.status_code().is_some_and(|status| status == 429 || status >= 500),
            Self::ValidationError { .. } | Self::ConfigurationError { .. } | Self::ParseError { .. } => true,
            Self::MultipleErrors { errors, .. } => errors.iter().any(Self::is_recoverable),
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::Integration { .. } | Self::StateFileError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::Translation(_) | Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => errors
                .iter()
                .map(Self::severity)
                .max()
                .unwrap_or(ErrorSeverity::Low),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Integration { source, .. } => {
                let mut msg = self.to_string();
                match source {
                    ClientError::Authentication(_) => {
                        msg.push_str("\n💡 Check DATADOG_API_KEY and DATADOG_APP_KEY");
                    }
                    ClientError::Network(_) => {
                        msg.push_str("\n💡 Check your internet connection and the configured api_url");
                    }
                    _ => {}
                }
                msg
            }
            Self::Translation(_) => {
                format!("{}\n💡 The remote integration holds a value that cannot be represented in configuration", self)
            }
            Self::ConfigurationError { suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { .. } => {
                format!("{}\n💡 Check file permissions and syntax", self)
            }
            Self::StateFileError { .. } => {
                format!("{}\n💡 Check the --state path and its permissions", self)
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
            _ => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    #[must_use]
    pub fn with_context(self, context: &str) -> Self {
        match self {
            Self::MultipleErrors { errors, context: existing_context } => Self::MultipleErrors {
                errors,
                context: format!("{} -> {}", existing_context, context),
            },
            _ => Self::MultipleErrors {
                errors: vec![self],
                context: context.to_string(),
            },
        }
    }
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integration { operation, source } => write!(f, "{}: {}", operation.describe(), source),
            Self::Translation(error) => write!(f, "{}", error),
            Self::ConfigurationError { message, field, .. } => {
                write!(f, "Configuration Error: {}", message)?;
                if let Some(field) = field {
                    write!(f, " (field: {})", field)?;
                }
                Ok(())
            }
            Self::ConfigurationFileError { path, reason } => {
                write!(f, "Configuration file error at '{}': {}", path, reason)
            }
            Self::ValidationError { field, value, constraint } => {
                write!(f, "Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint)
            }
            Self::ParseError { content_type, line_number, reason } => {
                write!(f, "Parse error in {}: {}", content_type, reason)?;
                if let Some(line) = line_number {
                    write!(f, " (line {})", line)?;
                }
                Ok(())
            }
            Self::StateFileError { path, operation, reason } => {
                write!(f, "State file operation '{}' failed for '{}': {}", operation, path, reason)
            }
            Self::SystemError { operation, reason } => {
                write!(f, "System error during {}: {}", operation, reason)
            }
            Self::MultipleErrors { errors, context } => {
                write!(f, "{} errors occurred during {}", errors.len(), context)
            }
        }
    }
}

impl StdError for WebhookError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Integration { source, .. } => Some(source),
            Self::Translation(error) => Some(error),
            _ => None,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for webhook integration operations
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &WebhookError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

/// Extension trait for Result to add context
pub trait ResultExt<T> {
    fn with_context(self, context: &str) -> WebhookResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<WebhookError>,
{
    fn with_context(self, context: &str) -> WebhookResult<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

impl From<TranslationError> for WebhookError {
    fn from(error: TranslationError) -> Self {
        Self::Translation(error)
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for WebhookError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for WebhookError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}
