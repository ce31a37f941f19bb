use blogsmith_core::error::BlogsmithError;

/// High-level error type covering every failure mode the Bedrock client can hit.
#[derive(Debug, thiserror::Error)]
pub enum BedrockError {
    /// Transport, throttling, timeout or service error surfaced by the SDK
    /// after its own retries.
    #[error("Bedrock request failed: {message}")]
    Sdk { message: String },

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<BedrockError> for BlogsmithError {
    fn from(value: BedrockError) -> Self {
        BlogsmithError::Backend(Box::new(value))
    }
}
