//! Generic, lightweight client that turns a topic into generated text using
//! a single concrete [`TextGenerationProvider`].
//!
//! The client is **generic over the backend type `B`** and the prompt
//! formatter `F`, so no dynamic dispatch shows up in user code and tests can
//! plug in stubs for either side.
//!
//! ```rust
//! use std::{future::Future, pin::Pin};
//! use blogsmith_core::{
//!     GenerationClient,
//!     error::Result,
//!     generic::{GenerationResult, SamplingParameters},
//!     model::Model,
//!     provider::{TextGenerationParameters, TextGenerationProvider},
//!     template::PromptFormatter,
//! };
//!
//! struct Echo;
//!
//! impl TextGenerationProvider for Echo {
//!     fn generate<'p>(
//!         &'p self,
//!         params: TextGenerationParameters,
//!     ) -> Pin<Box<dyn Future<Output = Result<GenerationResult>> + Send + 'p>> {
//!         Box::pin(async move { Ok(GenerationResult::new(params.prompt)) })
//!     }
//! }
//!
//! struct Plain;
//!
//! impl PromptFormatter for Plain {
//!     fn format(&self, topic: &str) -> String {
//!         topic.to_owned()
//!     }
//! }
//!
//! let client = GenerationClient::new(Echo, Plain, Model::default(), SamplingParameters::default());
//! # let _ = client;
//! ```
use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    generic::{GenerationOutcome, GenerationRequest, SamplingParameters},
    model::Model,
    provider::{TextGenerationParameters, TextGenerationProvider},
    template::PromptFormatter,
};

/// A client bound to a single provider and prompt format.
///
/// Cloning is cheap: the backend and formatter sit behind an `Arc`.
#[derive(Debug)]
pub struct GenerationClient<B, F> {
    backend: Arc<B>,
    formatter: Arc<F>,
    model: Model,
    sampling: SamplingParameters,
}

impl<B, F> Clone for GenerationClient<B, F> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            formatter: Arc::clone(&self.formatter),
            model: self.model.clone(),
            sampling: self.sampling,
        }
    }
}

impl<B, F> GenerationClient<B, F>
where
    B: TextGenerationProvider,
    F: PromptFormatter,
{
    pub fn new(backend: B, formatter: F, model: Model, sampling: SamplingParameters) -> Self {
        Self {
            backend: Arc::new(backend),
            formatter: Arc::new(formatter),
            model,
            sampling,
        }
    }

    /// Generate a passage on `topic`.
    ///
    /// Performs exactly one provider call. Every error is logged here and
    /// returned as [`GenerationOutcome::Failed`]; this method never fails.
    pub async fn generate(&self, topic: &str) -> GenerationOutcome {
        let request = GenerationRequest::new(topic, self.sampling);
        let prompt = self.formatter.format(&request.topic);
        let params =
            TextGenerationParameters::new(prompt, self.model.clone()).with_sampling(request.sampling);

        match self.backend.generate(params).await {
            Ok(result) => {
                if let Some(usage) = &result.usage {
                    debug!(
                        model = %self.model,
                        prompt_tokens = usage.prompt_tokens,
                        generation_tokens = usage.generation_tokens,
                        stop_reason = usage.stop_reason.as_deref().unwrap_or("unknown"),
                        "generation usage"
                    );
                }
                GenerationOutcome::Generated(result)
            }
            Err(err) => {
                error!(model = %self.model, error = %err, "error generating the blog");
                GenerationOutcome::Failed(err)
            }
        }
    }
}
