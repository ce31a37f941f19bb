//! Unified error type exposed by **`blogsmith-core`**.
//!
//! Adapter crates convert their internal errors into one of these variants
//! before handing them to the [`GenerationClient`](crate::GenerationClient)
//! or the [`ArtifactWriter`](crate::ArtifactWriter). Both of those swallow
//! the error after logging it; the only variant that reaches the Lambda
//! runtime is the one produced while decoding the inbound request.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BlogsmithError>;

#[derive(Debug, Error)]
pub enum BlogsmithError {
    /// The selected backend does not recognise the requested `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    /// Failure while serialising or deserialising JSON payloads, either the
    /// inbound gateway body or the inference request/response.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any inference backend error that doesn't fit another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Any object store error.
    #[error("storage returned an error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}
