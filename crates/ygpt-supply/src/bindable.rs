//! Capability shim: makes a chat client interoperable with agent
//! orchestration.
//!
//! The agent executor probes whatever handle it receives for tool-binding
//! and memory-binding support. The base client has neither, so the supplier
//! wraps it in [`BoundChatModel`], which owns the client by composition and
//! carries the two capability slots alongside it. Completion calls delegate
//! to the wrapped client unmodified.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use ygpt_llm::{ChatModel, ChatRequest, Response};

/// A tool descriptor handed over by the orchestrator.
///
/// Both accepted shapes are explicit: either a ready JSON schema or a
/// provider-style function definition. At the untyped boundary, `schema`
/// wins when both keys are present (see [`ToolSpec::from_value`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ToolSpec {
    Schema(Value),
    Definition(Value),
}

impl ToolSpec {
    /// The payload forwarded to the model, whichever shape carried it.
    pub fn schema(&self) -> &Value {
        match self {
            ToolSpec::Schema(value) | ToolSpec::Definition(value) => value,
        }
    }

    pub fn into_schema(self) -> Value {
        match self {
            ToolSpec::Schema(value) | ToolSpec::Definition(value) => value,
        }
    }

    /// Parse a host-supplied tool object, preferring `schema` over
    /// `definition`. Returns `None` when neither key is present; callers
    /// decide whether to skip such entries.
    pub fn from_value(value: &Value) -> Option<Self> {
        if let Some(schema) = value.get("schema") {
            return Some(ToolSpec::Schema(schema.clone()));
        }
        value
            .get("definition")
            .map(|definition| ToolSpec::Definition(definition.clone()))
    }
}

/// Marker trait for conversational memory implementations. The supplier
/// never inspects the memory's shape; it only carries the reference.
pub trait ConversationMemory: Send + Sync {}

/// A cheap-to-clone, type-erased handle to a conversational memory.
#[derive(Clone)]
pub struct MemoryHandle {
    inner: Arc<dyn ConversationMemory>,
}

impl MemoryHandle {
    pub fn new(memory: impl ConversationMemory + 'static) -> Self {
        Self {
            inner: Arc::new(memory),
        }
    }

    /// Whether two handles point at the same memory instance.
    pub fn same_instance(&self, other: &MemoryHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for MemoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MemoryHandle(..)")
    }
}

/// Chat model handles that accept a tool catalog.
pub trait ToolBindable {
    fn bind_tools(&mut self, tools: Vec<ToolSpec>) -> &mut Self;
}

/// Chat model handles that accept a conversational memory.
pub trait MemoryBindable {
    fn bind_memory(&mut self, memory: MemoryHandle) -> &mut Self;
}

/// A [`ChatModel`] plus the two capability slots agent orchestration
/// expects.
pub struct BoundChatModel {
    model: ChatModel,
    function_schemas: Option<Vec<Value>>,
    memory: Option<MemoryHandle>,
}

impl BoundChatModel {
    /// Wrap a freshly constructed client. Both slots start empty.
    pub fn new(model: ChatModel) -> Self {
        Self {
            model,
            function_schemas: None,
            memory: None,
        }
    }

    pub fn model_uri(&self) -> &str {
        self.model.model_uri()
    }

    /// Delegates to the wrapped client.
    pub fn generate(&self, request: impl Into<ChatRequest>) -> Response {
        self.model.generate(request)
    }

    /// Schemas from the most recent `bind_tools` call, in binding order.
    pub fn function_schemas(&self) -> Option<&[Value]> {
        self.function_schemas.as_deref()
    }

    /// The memory attached by the most recent `bind_memory` call.
    pub fn memory(&self) -> Option<&MemoryHandle> {
        self.memory.as_ref()
    }
}

impl fmt::Debug for BoundChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundChatModel")
            .field("model_uri", &self.model.model_uri())
            .field("function_schemas", &self.function_schemas)
            .field("memory", &self.memory)
            .finish()
    }
}

impl ToolBindable for BoundChatModel {
    /// Full replace: a second call discards the previous catalog. Order is
    /// kept; duplicate names are not rejected here.
    fn bind_tools(&mut self, tools: Vec<ToolSpec>) -> &mut Self {
        self.function_schemas = Some(tools.into_iter().map(ToolSpec::into_schema).collect());
        self
    }
}

impl MemoryBindable for BoundChatModel {
    fn bind_memory(&mut self, memory: MemoryHandle) -> &mut Self {
        self.memory = Some(memory);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BoundChatModel, ConversationMemory, MemoryBindable, MemoryHandle, ToolBindable, ToolSpec,
    };
    use serde_json::json;
    use ygpt_llm::{ChatModel, ChatModelBackend, ChatRequest, Response, StreamEvent};

    struct EchoBackend {
        model_uri: String,
    }

    impl ChatModelBackend for EchoBackend {
        fn model_uri(&self) -> &str {
            &self.model_uri
        }

        fn generate(&self, _request: ChatRequest) -> Response {
            Response::new(futures::stream::iter(vec![Ok(StreamEvent::TextDelta(
                "echo".to_string(),
            ))]))
        }
    }

    fn bound_model() -> BoundChatModel {
        BoundChatModel::new(ChatModel::new(EchoBackend {
            model_uri: "gpt://folder/yandexgpt/latest".to_string(),
        }))
    }

    struct NullMemory;
    impl ConversationMemory for NullMemory {}

    #[test]
    fn bind_tools_keeps_order_and_extracts_both_shapes() {
        let schema_a = json!({ "name": "search", "parameters": {} });
        let definition_b = json!({ "name": "calculator" });

        let mut model = bound_model();
        model.bind_tools(vec![
            ToolSpec::Schema(schema_a.clone()),
            ToolSpec::Definition(definition_b.clone()),
        ]);

        assert_eq!(
            model.function_schemas(),
            Some(&[schema_a, definition_b][..])
        );
    }

    #[test]
    fn rebinding_tools_replaces_the_previous_catalog() {
        let mut model = bound_model();
        model.bind_tools(vec![
            ToolSpec::Schema(json!({ "name": "a" })),
            ToolSpec::Schema(json!({ "name": "b" })),
        ]);
        model.bind_tools(vec![ToolSpec::Definition(json!({ "name": "c" }))]);

        assert_eq!(model.function_schemas(), Some(&[json!({ "name": "c" })][..]));
    }

    #[test]
    fn bind_memory_stores_the_same_instance() {
        let memory = MemoryHandle::new(NullMemory);

        let mut model = bound_model();
        model.bind_memory(memory.clone());

        let stored = model.memory().expect("memory bound");
        assert!(stored.same_instance(&memory));

        let other = MemoryHandle::new(NullMemory);
        assert!(!stored.same_instance(&other));
    }

    #[test]
    fn from_value_prefers_schema_over_definition() {
        let both = json!({ "schema": { "name": "s" }, "definition": { "name": "d" } });
        assert_eq!(
            ToolSpec::from_value(&both),
            Some(ToolSpec::Schema(json!({ "name": "s" })))
        );

        let definition_only = json!({ "definition": { "name": "d" } });
        assert_eq!(
            ToolSpec::from_value(&definition_only),
            Some(ToolSpec::Definition(json!({ "name": "d" })))
        );

        assert_eq!(ToolSpec::from_value(&json!({ "other": 1 })), None);
    }

    #[tokio::test]
    async fn generation_passes_through_the_wrapper() {
        let mut model = bound_model();
        model.bind_tools(vec![ToolSpec::Schema(json!({ "name": "noop" }))]);

        let mut request = ygpt_llm::request();
        request.user("hi");
        let completion = model
            .generate(request.build())
            .into_result()
            .await
            .expect("completion");
        assert_eq!(completion.text, "echo");
    }
}
