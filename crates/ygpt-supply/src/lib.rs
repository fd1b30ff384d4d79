//! # ygpt-supply
//!
//! Plugs Yandex Foundation Models into a workflow-automation host as a
//! model supplier.
//!
//! This crate lets you:
//!
//! - **Resolve model identifiers** — a short catalog value like
//!   `"yandexgpt/latest"` or an already-qualified `gpt://`/`ds://` URI —
//!   into the canonical resource URI the service requires.
//! - **Construct chat clients** through a pluggable [`ClientFactory`] that
//!   receives the API key, the resolved URI, and the user's generation
//!   options verbatim.
//! - **Augment the client** with the tool-binding and memory-binding
//!   capability slots an agent execution graph probes for, via
//!   [`BoundChatModel`].
//!
//! # Quick start
//!
//! ```ignore
//! use ygpt_supply::{YandexGptSupplier, ClientConfig};
//!
//! // Wire the real client library in through the factory seam.
//! let supplier = YandexGptSupplier::new(|config: ClientConfig| {
//!     Ok(yandex_chat_client(config))
//! });
//!
//! // One invocation: one fresh, augmented handle.
//! let supplied = supplier.supply_data(&host_context, 0).await?;
//! let model = supplied.response;
//!
//! // Populate the searchable picker.
//! let results = supplier.search_models("yandexgpt");
//! ```

pub mod bindable;
pub mod catalog;
pub mod describe;
pub mod error;
pub mod factory;
pub mod resolve;
pub mod supply;

pub use bindable::{
    BoundChatModel, ConversationMemory, MemoryBindable, MemoryHandle, ToolBindable, ToolSpec,
};
pub use catalog::ModelDescriptor;
pub use describe::NodeDescription;
pub use error::Error;
pub use factory::{ClientConfig, ClientFactory};
pub use resolve::ModelUri;
pub use supply::{
    Credentials, ParameterMode, SearchItem, SearchResult, SupplyContext, SupplyData,
    YandexGptSupplier,
};
