//! Provider-agnostic data types exchanged between the handler, the
//! [`GenerationClient`](crate::GenerationClient) and the adapter crates.
//!
//! Nothing in here performs I/O. Every value is built once per invocation
//! and dropped once the invocation returns.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::BlogsmithError;

/// Decoding knobs sent alongside every prompt.
///
/// The defaults are the production constants: a bounded passage of 128
/// tokens, moderate randomness and a 0.9 nucleus threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParameters {
    /// Upper bound on generated tokens.
    pub max_gen_len: u32,
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            max_gen_len: 128,
            temperature: 0.5,
            top_p: 0.9,
        }
    }
}

/// Transport settings of the inference endpoint.
///
/// Retries are the transport's own; callers only ever see the final
/// outcome, never individual attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub region: String,
    /// Ceiling on waiting for the model's response.
    pub read_timeout: Duration,
    /// Total attempts, first call included, for transient failures.
    pub max_attempts: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_owned(),
            read_timeout: Duration::from_secs(300),
            max_attempts: 3,
        }
    }
}

/// A topic paired with the sampling parameters it will be generated with.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,
    pub sampling: SamplingParameters,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, sampling: SamplingParameters) -> Self {
        Self {
            topic: topic.into(),
            sampling,
        }
    }
}

/// Text returned by the model plus whatever accounting the provider sent.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub text: String,
    pub usage: Option<UsageReport>,
}

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: UsageReport) -> Self {
        self.usage = Some(usage);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReport {
    pub prompt_tokens: i64,
    pub generation_tokens: i64,
    pub stop_reason: Option<String>,
}

/// Result of a single generation attempt.
///
/// Failures never escape the [`GenerationClient`](crate::GenerationClient);
/// they are logged and folded into [`GenerationOutcome::Failed`] so callers
/// can tell "the model answered with nothing" apart from "the call failed".
#[derive(Debug)]
pub enum GenerationOutcome {
    Generated(GenerationResult),
    Failed(BlogsmithError),
}

impl GenerationOutcome {
    /// The generated text, if the call succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Generated(result) => Some(&result.text),
            GenerationOutcome::Failed(_) => None,
        }
    }

    /// Collapse into the plain-string form where a failure reads as `""`.
    ///
    /// ```rust
    /// use blogsmith_core::error::BlogsmithError;
    /// use blogsmith_core::generic::GenerationOutcome;
    ///
    /// let failed = GenerationOutcome::Failed(BlogsmithError::Invalid("boom".into()));
    /// assert_eq!(failed.text_or_empty(), "");
    /// ```
    pub fn text_or_empty(self) -> String {
        match self {
            GenerationOutcome::Generated(result) => result.text,
            GenerationOutcome::Failed(_) => String::new(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, GenerationOutcome::Generated(_))
    }
}
