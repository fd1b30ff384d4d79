use crate::request::ChatRequest;
use crate::response::Response;

/// A concrete, type-erased chat model handle.
///
/// Wraps a [`ChatModelBackend`] so callers never need generics.
pub struct ChatModel {
    inner: Box<dyn ChatModelBackend>,
}

impl ChatModel {
    /// Wrap any backend implementation into a model.
    pub fn new(backend: impl ChatModelBackend + 'static) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    /// The fully qualified resource URI this handle was built for
    /// (e.g. `"gpt://b1gabc/yandexgpt/latest"`).
    pub fn model_uri(&self) -> &str {
        self.inner.model_uri()
    }

    /// Generate a streaming completion.
    pub fn generate(&self, request: impl Into<ChatRequest>) -> Response {
        self.inner.generate(request.into())
    }
}

/// Trait that client-library crates implement for a constructed client.
pub trait ChatModelBackend: Send + Sync {
    fn model_uri(&self) -> &str;
    fn generate(&self, request: ChatRequest) -> Response;
}
