use thiserror::Error;

/// Raised while turning a wire record back into a [`WebhookSpec`](crate::structs::webhook_spec::WebhookSpec).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("header not correctly formatted, expected ':' in '{line}'")]
    MalformedHeader { line: String },

    #[error("invalid boolean '{value}' for field '{field}'")]
    InvalidBoolean { field: String, value: String },

    #[error("webhook record is missing required field '{field}'")]
    MissingField { field: String },
}

impl TranslationError {
    pub fn malformed_header(line: &str) -> Self {
        Self::MalformedHeader { line: line.to_string() }
    }

    pub fn invalid_boolean(field: &str, value: &str) -> Self {
        Self::InvalidBoolean {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::MissingField { field: field.to_string() }
    }
}
