use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use ddwebhook::{ClientError, IntegrationClient, IntegrationWebhook, WebhookSpec};

/// In-memory stand-in for the Datadog API: echoes whatever was created and
/// records how many create/delete calls were in flight at once.
#[derive(Default)]
pub struct EchoClient {
    stored: Mutex<Option<IntegrationWebhook>>,
    mutation_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    mutations: AtomicUsize,
}

impl EchoClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mutation_delay: Duration) -> Self {
        Self { mutation_delay, ..Self::default() }
    }

    pub fn seeded(integration: IntegrationWebhook) -> Self {
        let client = Self::new();
        *client.stored.lock().unwrap() = Some(integration);
        client
    }

    pub fn stored(&self) -> Option<IntegrationWebhook> {
        self.stored.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    async fn mutation_window(&self) {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        tokio::time::sleep(self.mutation_delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.mutations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl IntegrationClient for EchoClient {
    async fn get_integration_webhook(&self) -> Result<IntegrationWebhook, ClientError> {
        self.stored().ok_or(ClientError::NotFound)
    }

    async fn create_integration_webhook(&self, request: &IntegrationWebhook) -> Result<(), ClientError> {
        self.mutation_window().await;
        *self.stored.lock().unwrap() = Some(request.clone());
        Ok(())
    }

    async fn delete_integration_webhook(&self) -> Result<(), ClientError> {
        self.mutation_window().await;
        match self.stored.lock().unwrap().take() {
            Some(_) => Ok(()),
            None => Err(ClientError::NotFound),
        }
    }
}

pub fn sample_hooks() -> Vec<WebhookSpec> {
    vec![
        WebhookSpec::new("alerts", "https://hooks.example.com/alerts")
            .with_header("Authorization", "Basic dXNlcjpwYXNz")
            .with_header("X-Team", "sre"),
        WebhookSpec::new("pager", "https://pager.example.com/v2/enqueue")
            .with_custom_payload(r#"{"title": "$EVENT_TITLE"}"#)
            .with_encode_as_form(false),
        WebhookSpec::new("plain", "http://internal.example.com/hook"),
    ]
}
