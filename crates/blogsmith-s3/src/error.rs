use blogsmith_core::error::BlogsmithError;

#[derive(Debug, thiserror::Error)]
pub enum S3Error {
    /// Permission, network or missing-bucket failure surfaced by the SDK.
    #[error("S3 request failed: {message}")]
    Sdk { message: String },
}

impl From<S3Error> for BlogsmithError {
    fn from(value: S3Error) -> Self {
        BlogsmithError::Storage(Box::new(value))
    }
}
