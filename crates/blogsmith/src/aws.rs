//! Wiring of the production backends.
use blogsmith_bedrock::{BedrockAdapter, BedrockAdapterBuilder};
use blogsmith_core::error::Result;
use blogsmith_s3::S3ArtifactStore;
use tracing::info;

use crate::{config::HandlerConfig, handler::RequestHandler};

/// The handler as deployed: Bedrock for generation, S3 for storage.
pub type LambdaHandler = RequestHandler<BedrockAdapter, S3ArtifactStore>;

/// Build the SDK clients once; invocations served by the same execution
/// environment reuse them.
pub async fn build_handler(config: HandlerConfig) -> Result<LambdaHandler> {
    let backend = BedrockAdapterBuilder::new()
        .with_region(config.transport.region.clone())
        .with_read_timeout(config.transport.read_timeout)
        .with_max_attempts(config.transport.max_attempts)
        .build()
        .await?;
    let store = S3ArtifactStore::from_env().await;

    info!(
        bucket = %config.bucket,
        key_prefix = %config.key_prefix,
        model = %config.model,
        region = %config.transport.region,
        "handler ready"
    );

    Ok(RequestHandler::new(backend, store, config))
}
