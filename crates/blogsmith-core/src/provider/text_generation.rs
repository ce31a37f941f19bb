use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenerationResult, SamplingParameters},
    model::Model,
};

/// A **backend** turns a rendered prompt into a network call to a concrete
/// inference service (Bedrock, …) and extracts the generated text.
///
/// The trait is intentionally minimal:
///
/// * **One method** – `generate`, which performs a *single* non-streaming
///   round-trip. Retries, if any, belong to the backend's transport.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`.
pub trait TextGenerationProvider: Send + Sync {
    fn generate<'p>(
        &'p self,
        params: TextGenerationParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult>> + Send + 'p>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextGenerationParameters {
    pub prompt: String,
    pub model: Model,
    pub sampling: SamplingParameters,
}

impl TextGenerationParameters {
    pub fn new(prompt: impl Into<String>, model: Model) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            sampling: SamplingParameters::default(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn sampling(&self) -> SamplingParameters {
        self.sampling
    }

    pub fn with_sampling(mut self, sampling: SamplingParameters) -> Self {
        self.sampling = sampling;
        self
    }
}
