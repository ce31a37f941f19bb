//! Model identifiers used throughout the **blogsmith** workspace.
//!
//! Application code picks an enum variant and lets the adapter translate it
//! into the provider's naming scheme, so literal ids such as
//! `"meta.llama3-8b-instruct-v1:0"` only live in the adapter crate.
//!
//! # Adding more models
//!
//! 1. Add the variant to [`BedrockModel`].
//! 2. Update `blogsmith-bedrock::model_map::map_model`.
//!
//! # Example
//!
//! ```rust
//! use blogsmith_core::model::{BedrockModel, Model};
//! assert_eq!(Model::from(BedrockModel::Llama3_8bInstruct),
//!            Model::Bedrock(BedrockModel::Llama3_8bInstruct));
//! ```

use std::fmt::Display;

/// Universal identifier for an LLM model.
///
/// * `Bedrock` – models with a dedicated mapping in the Bedrock adapter.
/// * `Custom` – a provider model id passed through verbatim, e.g. one read
///   from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Bedrock(BedrockModel),
    Custom(String),
}

/// Bedrock-hosted models whose prompt format the workspace understands.
///
/// All of them are Llama 3 instruct variants and share the same chat markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedrockModel {
    Llama3_8bInstruct,
    Llama3_70bInstruct,
}

impl From<BedrockModel> for Model {
    fn from(val: BedrockModel) -> Self {
        Model::Bedrock(val)
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Bedrock(BedrockModel::Llama3_8bInstruct)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::Bedrock(model) => write!(f, "{model:?}"),
            Model::Custom(id) => write!(f, "{id}"),
        }
    }
}
