//! Handler configuration.
//!
//! Everything the handler needs that used to be a hard-coded constant lives
//! in [`HandlerConfig`]. [`HandlerConfig::default`] reproduces the production
//! values; [`HandlerConfig::from_env`] lets a deployment override the
//! bucket, key prefix, model id and region without a rebuild.
use std::env;

use blogsmith_core::{
    generic::{ClientSettings, SamplingParameters},
    model::Model,
};

pub const DEFAULT_BUCKET: &str = "awsbedrock-gaurob";
pub const DEFAULT_KEY_PREFIX: &str = "llama3-blogs";
pub const COMPLETION_MESSAGE: &str = "Blog generation (LLaMA 3) completed.";

pub const BUCKET_VAR: &str = "BLOG_BUCKET";
pub const KEY_PREFIX_VAR: &str = "BLOG_KEY_PREFIX";
pub const MODEL_ID_VAR: &str = "BEDROCK_MODEL_ID";
pub const REGION_VAR: &str = "BEDROCK_REGION";

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerConfig {
    /// Bucket every artifact is written to.
    pub bucket: String,
    /// Leading path segment of every object key.
    pub key_prefix: String,
    pub model: Model,
    pub sampling: SamplingParameters,
    /// Region, read timeout and retry budget of the inference endpoint.
    pub transport: ClientSettings,
    /// Message returned in every response body.
    pub completion_message: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_owned(),
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            model: Model::default(),
            sampling: SamplingParameters::default(),
            transport: ClientSettings::default(),
            completion_message: COMPLETION_MESSAGE.to_owned(),
        }
    }
}

impl HandlerConfig {
    /// Defaults overridden by `BLOG_BUCKET`, `BLOG_KEY_PREFIX`,
    /// `BEDROCK_MODEL_ID` and `BEDROCK_REGION` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    ///
    /// ```rust
    /// use blogsmith::config::HandlerConfig;
    ///
    /// let config = HandlerConfig::from_lookup(|name| {
    ///     (name == "BLOG_BUCKET").then(|| "staging-blogs".to_owned())
    /// });
    /// assert_eq!(config.bucket, "staging-blogs");
    /// assert_eq!(config.key_prefix, "llama3-blogs");
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            bucket: var(BUCKET_VAR).unwrap_or(defaults.bucket),
            key_prefix: var(KEY_PREFIX_VAR).unwrap_or(defaults.key_prefix),
            model: var(MODEL_ID_VAR).map(Model::Custom).unwrap_or(defaults.model),
            transport: ClientSettings {
                region: var(REGION_VAR).unwrap_or(defaults.transport.region),
                ..defaults.transport
            },
            ..defaults
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.transport.region = region.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use blogsmith_core::model::BedrockModel;

    use super::*;

    #[test]
    fn defaults_are_the_production_constants() {
        let config = HandlerConfig::default();
        assert_eq!(config.bucket, "awsbedrock-gaurob");
        assert_eq!(config.key_prefix, "llama3-blogs");
        assert_eq!(config.model, Model::Bedrock(BedrockModel::Llama3_8bInstruct));
        assert_eq!(config.transport.region, "us-east-1");
        assert_eq!(config.transport.read_timeout, Duration::from_secs(300));
        assert_eq!(config.transport.max_attempts, 3);
        assert_eq!(config.completion_message, "Blog generation (LLaMA 3) completed.");
    }

    #[test]
    fn environment_overrides_are_applied() {
        let vars = HashMap::from([
            (BUCKET_VAR, "other-bucket"),
            (KEY_PREFIX_VAR, "drafts"),
            (MODEL_ID_VAR, "meta.llama3-70b-instruct-v1:0"),
            (REGION_VAR, "us-west-2"),
        ]);
        let config = HandlerConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.bucket, "other-bucket");
        assert_eq!(config.key_prefix, "drafts");
        assert_eq!(
            config.model,
            Model::Custom("meta.llama3-70b-instruct-v1:0".into())
        );
        assert_eq!(config.transport.region, "us-west-2");
        assert_eq!(config.transport.max_attempts, 3);
        assert_eq!(config.sampling, SamplingParameters::default());
    }

    #[test]
    fn blank_variables_are_ignored() {
        let config = HandlerConfig::from_lookup(|_| Some("   ".into()));
        assert_eq!(config, HandlerConfig::default());
    }
}
