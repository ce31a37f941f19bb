use std::{sync::Arc, time::Duration};

use blogsmith_core::{
    error::{BlogsmithError, Result},
    generic::ClientSettings,
};

use crate::client::BedrockClient;

/// Thin wrapper that wires the [`BedrockClient`] into a value that
/// implements [`blogsmith_core::provider::TextGenerationProvider`].
///
/// The type itself purposefully exposes **no additional methods**; all
/// user-facing functionality sits on the generic
/// [`blogsmith_core::GenerationClient`] once the adapter is plugged in.
#[derive(Debug, Clone)]
pub struct BedrockAdapter {
    pub(crate) client: Arc<BedrockClient>,
}

impl BedrockAdapter {
    /// Wrap an already built client.
    pub fn from_client(client: BedrockClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Builder for [`BedrockAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use std::time::Duration;
/// use blogsmith_bedrock::BedrockAdapterBuilder;
///
/// # async fn run() -> blogsmith_core::error::Result<()> {
/// let backend = BedrockAdapterBuilder::new()
///     .with_region("us-east-1")
///     .with_read_timeout(Duration::from_secs(300))
///     .with_max_attempts(3)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct BedrockAdapterBuilder {
    pub(crate) region: Option<String>,
    pub(crate) read_timeout: Option<Duration>,
    pub(crate) max_attempts: Option<u32>,
}

impl BedrockAdapterBuilder {
    /// Create an *empty* builder; unset values fall back to
    /// [`ClientSettings::default`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Upper bound on waiting for the model's response.
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = Some(read_timeout);
        self
    }

    /// Total attempts (first call included) made by the SDK for transient
    /// failures.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    fn settings(&self) -> Result<ClientSettings> {
        let defaults = ClientSettings::default();
        let settings = ClientSettings {
            region: self.region.clone().unwrap_or(defaults.region),
            read_timeout: self.read_timeout.unwrap_or(defaults.read_timeout),
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
        };

        if settings.max_attempts == 0 {
            return Err(BlogsmithError::Invalid(
                "Bedrock max attempts must be at least 1".into(),
            ));
        }
        if settings.region.trim().is_empty() {
            return Err(BlogsmithError::Invalid("Bedrock region is empty".into()));
        }

        Ok(settings)
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`BlogsmithError::Invalid`] – if the region is blank or the attempt
    ///   budget is zero.
    pub async fn build(self) -> Result<BedrockAdapter> {
        let settings = self.settings()?;
        let client = BedrockClient::new(&settings).await;

        Ok(BedrockAdapter::from_client(client))
    }
}
