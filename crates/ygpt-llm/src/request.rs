use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The frozen, built request — produced by a builder, consumed by `generate()`.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    /// Provider-specific metadata. Passed through to the backend as-is.
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Request builder. Client crates may wrap this to add typed
/// provider-specific methods.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    pub(crate) messages: Vec<Message>,
    pub(crate) metadata: HashMap<String, serde_json::Value>,
}

/// Convenience entry point: `ygpt_llm::request()`.
pub fn request() -> RequestBuilder {
    RequestBuilder::default()
}

impl RequestBuilder {
    pub fn system(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::system(text));
        self
    }

    pub fn user(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::user(text));
        self
    }

    pub fn assistant(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::assistant(text));
        self
    }

    pub fn message(&mut self, message: Message) -> &mut Self {
        self.messages.push(message);
        self
    }

    pub fn messages(&mut self, messages: impl IntoIterator<Item = Message>) -> &mut Self {
        self.messages.extend(messages);
        self
    }

    pub fn meta(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ChatRequest {
        self.into()
    }
}

impl From<RequestBuilder> for ChatRequest {
    fn from(b: RequestBuilder) -> Self {
        ChatRequest {
            messages: b.messages,
            metadata: b.metadata,
        }
    }
}

/// A single turn in the conversation, in the completion service's
/// role-plus-text shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    System { text: String },
    User { text: String },
    Assistant { text: String },
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Message::System { text: text.into() }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Message::User { text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Message::Assistant { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, request};

    #[test]
    fn builder_keeps_message_order() {
        let mut builder = request();
        builder
            .system("be terse")
            .user("ping")
            .assistant("pong")
            .meta("trace", "t-1");
        let built = builder.build();

        assert_eq!(built.messages.len(), 3);
        assert!(matches!(built.messages[0], Message::System { .. }));
        assert!(matches!(built.messages[2], Message::Assistant { .. }));
        assert_eq!(built.metadata["trace"], "t-1");
    }
}
