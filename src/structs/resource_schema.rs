use serde::Serialize;
use crate::structs::integration_state::IntegrationState;
use crate::structs::resource_config::ResourceConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    StringMap,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub required: bool,
    pub force_new: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Attribute>,
}

impl Attribute {
    const fn required(name: &'static str, attribute_type: AttributeType) -> Self {
        Self { name, attribute_type, required: true, force_new: false, elements: Vec::new() }
    }

    const fn optional(name: &'static str, attribute_type: AttributeType) -> Self {
        Self { name, attribute_type, required: false, force_new: false, elements: Vec::new() }
    }
}

/// Declarative shape of the `datadog_integration_webhook` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSchema {
    pub resource_type: &'static str,
    pub attributes: Vec<Attribute>,
}

impl ResourceSchema {
    pub fn webhook_integration() -> Self {
        let hooks = Attribute {
            name: "hooks",
            attribute_type: AttributeType::List,
            required: true,
            force_new: true,
            elements: Self::webhook_attributes(),
        };

        Self {
            resource_type: "datadog_integration_webhook",
            attributes: vec![hooks],
        }
    }

    pub fn webhook_attributes() -> Vec<Attribute> {
        vec![
            Attribute::required("name", AttributeType::String),
            Attribute::required("url", AttributeType::String),
            Attribute::optional("use_custom_payload", AttributeType::Bool),
            Attribute::optional("custom_payload", AttributeType::String),
            Attribute::optional("encode_as_form", AttributeType::Bool),
            Attribute::optional("headers", AttributeType::StringMap),
        ]
    }

    /// `hooks` cannot be updated in place, so any difference forces a new integration.
    pub fn requires_replacement(prior: &IntegrationState, proposed: &ResourceConfig) -> bool {
        prior.hooks != proposed.hooks
    }
}
