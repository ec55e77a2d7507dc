use thiserror::Error;

/// Failures reported by an [`IntegrationClient`](crate::traits::integration_client::IntegrationClient).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Not Found")]
    NotFound,

    #[error("API Error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Authentication Error: {0}")]
    Authentication(String),
}

impl ClientError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Serialization(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
