//! Declared configuration surface for the host UI.
//!
//! Pure metadata: nothing here affects resolution or construction. The
//! option defaults are what the host pre-fills in its editor; the supplier
//! itself never injects them into the options bag.

use serde::Serialize;
use serde_json::{Value, json};

use crate::supply::{CREDENTIAL_NAME, MODEL_PARAMETER, OPTIONS_PARAMETER};

/// Validation pattern for free-text model URIs.
pub const MODEL_URI_PATTERN: &str = "^(gpt|ds)://(.+)/(.+)";

/// Name of the list-search method the picker calls.
pub const SEARCH_METHOD: &str = "listYandexGptModels";

/// Everything the host needs to render this node's configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: &'static str,
    pub name: &'static str,
    pub credential_name: &'static str,
    pub model: ModelField,
    pub options_parameter: &'static str,
    pub options: Vec<OptionField>,
}

/// The model selector: free-text URI or searchable catalog pick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelField {
    pub display_name: &'static str,
    pub name: &'static str,
    pub uri_pattern: &'static str,
    pub placeholder: &'static str,
    pub search_method: &'static str,
}

/// One entry of the options collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionField {
    pub display_name: &'static str,
    pub name: &'static str,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    pub description: &'static str,
}

/// The node's declared configuration surface.
pub fn description() -> NodeDescription {
    NodeDescription {
        display_name: "Yandex GPT Model",
        name: "lmChatYandexGpt",
        credential_name: CREDENTIAL_NAME,
        model: ModelField {
            display_name: "Model",
            name: MODEL_PARAMETER,
            uri_pattern: MODEL_URI_PATTERN,
            placeholder: "gpt://<folder_id>/yandexgpt-lite/latest",
            search_method: SEARCH_METHOD,
        },
        options_parameter: OPTIONS_PARAMETER,
        options: vec![
            OptionField {
                display_name: "Temperature",
                name: "temperature",
                default: json!(0.3),
                min_value: Some(0.0),
                max_value: Some(1.0),
                precision: Some(2),
                description: "Amount of randomness injected into the response. \
                    Use values closer to 0 for analytical tasks and closer to 1 \
                    for creative ones.",
            },
            OptionField {
                display_name: "Max Tokens",
                name: "maxTokens",
                default: json!(2000),
                min_value: Some(1.0),
                max_value: None,
                precision: None,
                description: "Limit on the number of tokens used for a single \
                    completion. Must be greater than zero; the allowed maximum \
                    depends on the model.",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::{MODEL_URI_PATTERN, description};
    use serde_json::json;

    #[test]
    fn declared_defaults_match_the_configuration_surface() {
        let node = description();
        assert_eq!(node.credential_name, "chatYandexGptApi");
        assert_eq!(node.model.uri_pattern, MODEL_URI_PATTERN);

        let temperature = &node.options[0];
        assert_eq!(temperature.name, "temperature");
        assert_eq!(temperature.default, json!(0.3));
        assert_eq!(temperature.max_value, Some(1.0));

        let max_tokens = &node.options[1];
        assert_eq!(max_tokens.name, "maxTokens");
        assert_eq!(max_tokens.default, json!(2000));
    }

    #[test]
    fn description_serializes_for_the_host() {
        let value = serde_json::to_value(description()).expect("serialize");
        assert_eq!(value["model"]["searchMethod"], "listYandexGptModels");
        assert_eq!(value["options"][0]["precision"], 2);
        // maxTokens carries no precision; the field must be absent entirely.
        assert!(value["options"][1].get("precision").is_none());
    }
}
