use crate::enums::translation_error::TranslationError;
use crate::services::header_codec::HeaderCodec;
use crate::structs::datadog_webhook::{DatadogWebhook, IntegrationWebhook};
use crate::structs::integration_state::IntegrationState;
use crate::structs::resource_config::ResourceConfig;
use crate::structs::webhook_spec::WebhookSpec;

/// Converts hooks between their configuration shape and the API wire shape.
pub struct WebhookTranslator;

impl WebhookTranslator {
    pub fn to_datadog_webhook(spec: &WebhookSpec) -> DatadogWebhook {
        DatadogWebhook {
            name: Some(spec.name.clone()),
            url: Some(spec.url.clone()),
            use_custom_payload: spec.use_custom_payload.map(|value| value.to_string()),
            custom_payload: spec.custom_payload.clone(),
            encode_as_form: spec.encode_as_form.map(|value| value.to_string()),
            headers: spec.headers.as_ref().map(HeaderCodec::encode),
        }
    }

    /// Builds the create request, keeping the configured hook order.
    pub fn to_create_request(config: &ResourceConfig) -> IntegrationWebhook {
        IntegrationWebhook::new(config.hooks.iter().map(Self::to_datadog_webhook).collect())
    }

    pub fn to_webhook_spec(webhook: &DatadogWebhook) -> Result<WebhookSpec, TranslationError> {
        let name = webhook.name.clone().ok_or_else(|| TranslationError::missing_field("name"))?;
        let url = webhook.url.clone().ok_or_else(|| TranslationError::missing_field("url"))?;

        let use_custom_payload = webhook
            .use_custom_payload
            .as_deref()
            .map(|value| parse_bool("use_custom_payload", value))
            .transpose()?;

        let encode_as_form = webhook
            .encode_as_form
            .as_deref()
            .map(|value| parse_bool("encode_as_form", value))
            .transpose()?;

        let headers = webhook.headers.as_deref().map(HeaderCodec::decode).transpose()?;

        Ok(WebhookSpec {
            name,
            url,
            use_custom_payload,
            custom_payload: webhook.custom_payload.clone(),
            encode_as_form,
            headers,
        })
    }

    /// Translates every remote hook; the first failure discards the rest.
    pub fn to_integration_state(integration: &IntegrationWebhook) -> Result<IntegrationState, TranslationError> {
        let hooks = integration
            .webhooks
            .iter()
            .map(Self::to_webhook_spec)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IntegrationState::new(hooks))
    }
}

/// Accepts the same spellings as the API's own boolean parser.
pub fn parse_bool(field: &str, value: &str) -> Result<bool, TranslationError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(TranslationError::invalid_boolean(field, value)),
    }
}
