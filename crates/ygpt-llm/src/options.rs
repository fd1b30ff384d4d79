use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generation knobs fixed at client-construction time.
///
/// Every field is optional: an absent field serializes to nothing, so the
/// client library's own default applies instead of an injected zero. Options
/// the host supplies beyond the enumerated ones ride along in `extra`
/// verbatim, which keeps the set of forwardable options open-ended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Sampling temperature, 0.0 to 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Completion length cap in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Pass-through for options not enumerated above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenerationOptions {
    /// True when no option was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_tokens.is_none() && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::GenerationOptions;
    use serde_json::json;

    #[test]
    fn absent_fields_serialize_to_nothing() {
        let options = GenerationOptions {
            temperature: Some(0.5),
            ..Default::default()
        };

        let value = serde_json::to_value(&options).expect("serialize");
        assert_eq!(value, json!({ "temperature": 0.5 }));
    }

    #[test]
    fn unknown_options_ride_through_extra() {
        let value = json!({
            "temperature": 0.3,
            "maxTokens": 2000,
            "topP": 0.9,
        });

        let options: GenerationOptions = serde_json::from_value(value).expect("deserialize");
        assert_eq!(options.temperature, Some(0.3));
        assert_eq!(options.max_tokens, Some(2000));
        assert_eq!(options.extra.get("topP"), Some(&json!(0.9)));

        let back = serde_json::to_value(&options).expect("serialize");
        assert_eq!(back.get("topP"), Some(&json!(0.9)));
    }

    #[test]
    fn empty_bag_is_empty() {
        let options: GenerationOptions = serde_json::from_value(json!({})).expect("deserialize");
        assert!(options.is_empty());
    }
}
