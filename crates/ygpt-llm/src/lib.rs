pub mod error;
pub mod model;
pub mod options;
pub mod request;
pub mod response;
pub mod stream;

pub use error::Error;
pub use model::{ChatModel, ChatModelBackend};
pub use options::GenerationOptions;
pub use request::{ChatRequest, Message, RequestBuilder, request};
pub use response::{ChatCompletion, Response};
pub use stream::{FinishReason, StreamEvent, Usage};
