//! The supply entry point the workflow host invokes.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use ygpt_llm::GenerationOptions;

use crate::bindable::BoundChatModel;
use crate::catalog;
use crate::error::Error;
use crate::factory::{ClientConfig, ClientFactory};
use crate::resolve;

/// Name under which the host stores this node's credentials.
pub const CREDENTIAL_NAME: &str = "chatYandexGptApi";
/// Parameter holding the model selector value.
pub const MODEL_PARAMETER: &str = "model";
/// Parameter holding the options bag.
pub const OPTIONS_PARAMETER: &str = "options";

/// How a parameter should be read from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterMode {
    /// The stored value as-is.
    Raw,
    /// The resolved value: for a resource-locator field, the selected
    /// entry's value rather than the locator envelope.
    Resolved,
}

/// The slice of the host execution context the supplier needs.
///
/// Instead of depending on the host framework's full context object, the
/// supplier takes this seam explicitly, so any host (or a test) can
/// provide it.
#[async_trait]
pub trait SupplyContext: Send + Sync {
    /// Fetch a named credential payload from the host's secret store.
    async fn credentials(&self, name: &str) -> Result<Value, Error>;

    /// Read a node parameter for the given batch item. `None` when the
    /// parameter is unset.
    fn parameter(&self, name: &str, item_index: usize, mode: ParameterMode) -> Option<Value>;
}

/// Credentials issued for the completion service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub api_key: String,
    /// Tenant (folder) identifier injected into short-form URIs.
    pub folder_id: String,
}

/// What the host's agent graph receives: the augmented model handle.
pub struct SupplyData {
    pub response: BoundChatModel,
}

impl fmt::Debug for SupplyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplyData")
            .field("response", &self.response)
            .finish()
    }
}

/// One `{ name, value }` row for the searchable model picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchItem {
    pub name: String,
    pub value: String,
}

/// The list-search payload returned to the host.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub results: Vec<SearchItem>,
}

/// The supplier node: orchestrates one invocation end to end.
pub struct YandexGptSupplier {
    factory: Box<dyn ClientFactory>,
}

impl YandexGptSupplier {
    /// Create a supplier around the client library's constructor.
    pub fn new(factory: impl ClientFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
        }
    }

    /// Build one fresh, augmented chat model for one invocation.
    ///
    /// Linear sequence: credentials (the only suspension point) → model
    /// selector → URI resolution → options bag → client construction →
    /// capability shim. Any failure aborts the invocation as-is; no
    /// partial handle escapes.
    pub async fn supply_data(
        &self,
        ctx: &dyn SupplyContext,
        item_index: usize,
    ) -> Result<SupplyData, Error> {
        let payload = ctx.credentials(CREDENTIAL_NAME).await?;
        let credentials: Credentials = serde_json::from_value(payload)
            .map_err(|err| Error::Credentials(err.to_string()))?;

        let raw_model = match ctx.parameter(MODEL_PARAMETER, item_index, ParameterMode::Resolved) {
            Some(Value::String(value)) => value,
            Some(other) => {
                return Err(Error::Parameter {
                    name: MODEL_PARAMETER.to_string(),
                    message: format!("expected a string selector, got {other}"),
                });
            }
            None => String::new(),
        };

        let model_uri = resolve::resolve(&raw_model, &credentials.folder_id);

        // An absent bag means "no overrides", never zero-filled defaults.
        let options = match ctx.parameter(OPTIONS_PARAMETER, item_index, ParameterMode::Raw) {
            Some(value) => serde_json::from_value::<GenerationOptions>(value)?,
            None => GenerationOptions::default(),
        };

        let model = self.factory.create(ClientConfig {
            api_key: credentials.api_key,
            model_uri,
            options,
        })?;

        Ok(SupplyData {
            response: BoundChatModel::new(model),
        })
    }

    /// The list-search entry point behind the model picker.
    pub fn search_models(&self, query: &str) -> SearchResult {
        search_models(query)
    }
}

/// Filter the identifier catalog for the picker.
pub fn search_models(query: &str) -> SearchResult {
    let results = catalog::list(query)
        .into_iter()
        .map(|descriptor| {
            let value = descriptor.display_value();
            SearchItem {
                name: value.clone(),
                value,
            }
        })
        .collect();
    SearchResult { results }
}
