use aws_config::{BehaviorVersion, retry::RetryConfig, timeout::TimeoutConfig};
use aws_sdk_bedrockruntime::{
    Client as SdkClient,
    config::{Builder as SdkConfigBuilder, Region},
    error::DisplayErrorContext,
    primitives::Blob,
};
use blogsmith_core::generic::ClientSettings;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::{
    api::{LlamaInvokeRequest, LlamaInvokeResponse},
    error::BedrockError,
};

/// Minimal client for Bedrock's *InvokeModel* operation.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api` request / response structs defined in
///   this crate.
/// * Wraps a single SDK client, so cloning `BedrockClient` is cheap.
#[derive(Clone, Debug)]
pub struct BedrockClient {
    sdk: SdkClient,
}

impl BedrockClient {
    /// Load credentials from the default provider chain and build an SDK
    /// client with the given region, read timeout and retry budget.
    pub async fn new(settings: &ClientSettings) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .load()
            .await;
        let config = Self::configure(SdkConfigBuilder::from(&shared), settings).build();

        Self::with_sdk(SdkClient::from_conf(config))
    }

    /// Apply region, retry budget and read timeout to an SDK config builder.
    ///
    /// Values already present on `builder` for these three knobs are
    /// overwritten; everything else (credentials, HTTP client, endpoint) is
    /// left alone.
    pub fn configure(builder: SdkConfigBuilder, settings: &ClientSettings) -> SdkConfigBuilder {
        builder
            .region(Region::new(settings.region.clone()))
            .retry_config(RetryConfig::standard().with_max_attempts(settings.max_attempts))
            .timeout_config(
                TimeoutConfig::builder()
                    .read_timeout(settings.read_timeout)
                    .build(),
            )
    }

    /// Build from a pre-configured SDK client in case the caller needs a
    /// custom endpoint, credentials or HTTP connector.
    pub fn with_sdk(sdk: SdkClient) -> Self {
        Self { sdk }
    }

    /// Invoke a Llama model with its native JSON body.
    pub async fn invoke_llama(
        &self,
        model_id: &str,
        request: &LlamaInvokeRequest,
    ) -> Result<LlamaInvokeResponse, BedrockError> {
        let body = serde_json::to_vec(request)?;

        #[cfg(feature = "tracing")]
        debug!(model_id, bytes = body.len(), "invoking Bedrock model");

        let output = self
            .sdk
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| BedrockError::Sdk {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        LlamaInvokeResponse::from_slice(output.body().as_ref())
    }
}
