/// Errors produced while supplying a model to the host.
///
/// Nothing is retried or reinterpreted locally; every variant surfaces at
/// the invocation boundary with the underlying message intact.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host returned no usable credentials for this node.
    #[error("invalid credentials: {0}")]
    Credentials(String),

    /// A node parameter had an unusable shape.
    #[error("invalid parameter '{name}': {message}")]
    Parameter { name: String, message: String },

    /// A host payload failed to parse.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The client library failed to construct the chat client.
    #[error("client construction error: {0}")]
    Factory(Box<dyn std::error::Error + Send + Sync>),
}
