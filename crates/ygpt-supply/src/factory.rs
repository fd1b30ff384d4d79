//! Client factory seam and construction-time configuration.

use ygpt_llm::{ChatModel, GenerationOptions};

use crate::error::Error;
use crate::resolve::ModelUri;

/// Everything the client library needs to construct a chat client.
///
/// Options are carried verbatim: nothing is renamed or defaulted on the way
/// through, so an option the configuration UI does not enumerate still
/// reaches the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model_uri: ModelUri,
    pub options: GenerationOptions,
}

/// A factory that can construct a [`ChatModel`] from a [`ClientConfig`].
///
/// The actual client library plugs in here; construction errors it raises
/// surface unchanged as [`Error::Factory`].
pub trait ClientFactory: Send + Sync {
    fn create(&self, config: ClientConfig) -> Result<ChatModel, Error>;
}

/// Blanket impl: any `Fn(ClientConfig) -> Result<ChatModel, Error>` is a
/// factory.
impl<F> ClientFactory for F
where
    F: Fn(ClientConfig) -> Result<ChatModel, Error> + Send + Sync,
{
    fn create(&self, config: ClientConfig) -> Result<ChatModel, Error> {
        (self)(config)
    }
}
