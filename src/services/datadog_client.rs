use std::env;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use crate::config::constants::{
    timeout_duration, API_KEY_HEADER, APPLICATION_KEY_HEADER, DATADOG_HOST_ENV, INTEGRATION_WEBHOOK_PATH,
};
use crate::enums::client_error::ClientError;
use crate::errors::{WebhookError, WebhookResult};
use crate::structs::config::datadog_config::DatadogConfig;
use crate::structs::datadog_webhook::IntegrationWebhook;
use crate::traits::integration_client::IntegrationClient;

#[derive(Deserialize)]
struct DatadogErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// `IntegrationClient` backed by the Datadog v1 REST API.
#[derive(Clone)]
pub struct DatadogClient {
    client: Client,
    base_url: String,
    api_key: String,
    app_key: String,
}

impl DatadogClient {
    pub fn new(base_url: String, api_key: String, app_key: String, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout_duration(timeout_secs))
            .user_agent(concat!("ddwebhook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url, api_key, app_key })
    }

    /// Reads credentials from the environment variables named in the config.
    /// `DATADOG_HOST` overrides the configured API URL.
    pub fn from_config(config: &DatadogConfig) -> WebhookResult<Self> {
        let api_key = env::var(&config.api_key_env).map_err(|_| {
            WebhookError::config_error(
                &format!("{} is not set", config.api_key_env),
                Some("datadog.api_key_env"),
                Some("Export your Datadog API key"),
            )
        })?;

        let app_key = env::var(&config.app_key_env).map_err(|_| {
            WebhookError::config_error(
                &format!("{} is not set", config.app_key_env),
                Some("datadog.app_key_env"),
                Some("Export your Datadog application key"),
            )
        })?;

        let base_url = env::var(DATADOG_HOST_ENV).unwrap_or_else(|_| config.api_url.clone());

        let client = Self::new(base_url, api_key, app_key, config.timeout_secs)
            .map_err(|e| WebhookError::system_error("HTTP client setup", &e.to_string()))?;
        log::debug!("Using Datadog API at {}", client.base_url());
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), INTEGRATION_WEBHOOK_PATH)
    }

    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<DatadogErrorBody>(&body)
            .ok()
            .filter(|parsed| !parsed.errors.is_empty())
            .map_or(body, |parsed| parsed.errors.join(", "));

        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::Authentication(message)),
            status => Err(ClientError::Api { status: status.as_u16(), message }),
        }
    }
}

#[async_trait]
impl IntegrationClient for DatadogClient {
    async fn get_integration_webhook(&self) -> Result<IntegrationWebhook, ClientError> {
        log::debug!("GET {}", self.endpoint());

        let response = self.client
            .get(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .header(APPLICATION_KEY_HEADER, &self.app_key)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn create_integration_webhook(&self, request: &IntegrationWebhook) -> Result<(), ClientError> {
        log::debug!("POST {} ({} hooks)", self.endpoint(), request.webhooks.len());

        let response = self.client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .header(APPLICATION_KEY_HEADER, &self.app_key)
            .json(request)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_integration_webhook(&self) -> Result<(), ClientError> {
        log::debug!("DELETE {}", self.endpoint());

        let response = self.client
            .delete(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .header(APPLICATION_KEY_HEADER, &self.app_key)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a local port and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            loop {
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..end]).to_ascii_lowercase();
                    let content_length = head
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|value| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }

                let read = socket.read(&mut buffer).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", address)
    }

    fn client_for(base_url: String) -> DatadogClient {
        DatadogClient::new(base_url, "api".to_string(), "app".to_string(), 5).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_not_found() {
        let client = client_for(serve_once("404 Not Found", r#"{"errors":["Not Found"]}"#).await);

        assert_eq!(client.get_integration_webhook().await, Err(ClientError::NotFound));
    }

    #[tokio::test]
    async fn server_error_joins_error_messages() {
        let client = client_for(serve_once("500 Internal Server Error", r#"{"errors":["x","y"]}"#).await);

        assert_eq!(
            client.delete_integration_webhook().await,
            Err(ClientError::Api { status: 500, message: "x, y".to_string() })
        );
    }

    #[tokio::test]
    async fn forbidden_maps_to_authentication() {
        let client = client_for(serve_once("403 Forbidden", r#"{"errors":["Forbidden"]}"#).await);

        assert_eq!(
            client.create_integration_webhook(&IntegrationWebhook::default()).await,
            Err(ClientError::Authentication("Forbidden".to_string()))
        );
    }

    #[tokio::test]
    async fn undecodable_body_is_a_serialization_error() {
        let client = client_for(serve_once("200 OK", "not json").await);

        assert!(matches!(
            client.get_integration_webhook().await,
            Err(ClientError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn hooks_envelope_is_decoded() {
        let client = client_for(serve_once("200 OK", r#"{"hooks":[{"name":"ops","url":"https://example.com"}]}"#).await);

        let integration = client.get_integration_webhook().await.unwrap();
        assert_eq!(integration.webhooks.len(), 1);
        assert_eq!(integration.webhooks[0].name.as_deref(), Some("ops"));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = DatadogClient::new(
            "https://api.datadoghq.eu/".to_string(),
            "api".to_string(),
            "app".to_string(),
            5,
        )
        .unwrap();

        assert_eq!(client.endpoint(), "https://api.datadoghq.eu/api/v1/integration/webhooks");
    }
}
