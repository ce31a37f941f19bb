use blogsmith_core::{generic::UsageReport, provider::TextGenerationParameters};
use serde::{Deserialize, Serialize};

use crate::error::BedrockError;

/// Native request body of the Meta Llama models on Bedrock.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LlamaInvokeRequest {
    pub prompt: String,
    pub max_gen_len: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl From<&TextGenerationParameters> for LlamaInvokeRequest {
    fn from(params: &TextGenerationParameters) -> Self {
        let sampling = params.sampling();
        Self {
            prompt: params.prompt().to_owned(),
            max_gen_len: sampling.max_gen_len,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
        }
    }
}

/// Native response body of the Meta Llama models on Bedrock.
///
/// Only `generation` is required; the accounting fields are optional so a
/// trimmed-down body still decodes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LlamaInvokeResponse {
    pub generation: String,
    #[serde(default)]
    pub prompt_token_count: Option<i64>,
    #[serde(default)]
    pub generation_token_count: Option<i64>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl LlamaInvokeResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, BedrockError> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn usage(&self) -> Option<UsageReport> {
        if self.prompt_token_count.is_none()
            && self.generation_token_count.is_none()
            && self.stop_reason.is_none()
        {
            return None;
        }

        Some(UsageReport {
            prompt_tokens: self.prompt_token_count.unwrap_or_default(),
            generation_tokens: self.generation_token_count.unwrap_or_default(),
            stop_reason: self.stop_reason.clone(),
        })
    }
}
