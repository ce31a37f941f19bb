use std::sync::Arc;

use blogsmith_core::{
    ArtifactWriter, GenerationClient,
    error::Result,
    generic::GenerationOutcome,
    provider::{ArtifactStore, TextGenerationProvider},
};
use blogsmith_prompt::BlogPrompt;
use tracing::{info, warn};

use crate::{
    config::HandlerConfig,
    event::{BlogRequest, GatewayEvent, HandlerResponse},
    key::StorageKey,
};

/// Entry point of one invocation: topic in, passage generated, passage
/// stored, fixed response out.
///
/// Generation and storage failures are logged and do not change the
/// response. Only a request that cannot be decoded returns `Err`.
pub struct RequestHandler<B, S> {
    generator: GenerationClient<B, BlogPrompt>,
    writer: ArtifactWriter<S>,
    config: Arc<HandlerConfig>,
}

impl<B, S> Clone for RequestHandler<B, S> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            writer: self.writer.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<B, S> RequestHandler<B, S>
where
    B: TextGenerationProvider,
    S: ArtifactStore,
{
    pub fn new(backend: B, store: S, config: HandlerConfig) -> Self {
        let generator =
            GenerationClient::new(backend, BlogPrompt::new(), config.model.clone(), config.sampling);

        Self {
            generator,
            writer: ArtifactWriter::new(store),
            config: Arc::new(config),
        }
    }

    pub async fn handle(&self, event: GatewayEvent) -> Result<HandlerResponse> {
        let request = BlogRequest::from_event(&event)?;

        match self.generator.generate(&request.blog_topic).await {
            GenerationOutcome::Generated(result) if !result.text.is_empty() => {
                let key = StorageKey::now(&self.config.key_prefix);
                self.writer
                    .write(key.as_str(), &self.config.bucket, &result.text)
                    .await;
                info!(key = %key, chars = result.text.len(), "blog generated");
            }
            GenerationOutcome::Generated(_) => {
                warn!("blog generation failed: model returned an empty passage");
            }
            // Already logged by the generation client.
            GenerationOutcome::Failed(_) => {}
        }

        HandlerResponse::completed(&self.config.completion_message)
    }
}
