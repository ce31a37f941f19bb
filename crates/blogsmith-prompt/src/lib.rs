//! Prompt rendering for the blogsmith workspace.
//!
//! [`builder::PromptBuilder`] knows the Llama 3 chat markup;
//! [`blog::BlogPrompt`] uses it to implement
//! [`PromptFormatter`](blogsmith_core::template::PromptFormatter).
pub mod blog;
pub mod builder;

pub use blog::BlogPrompt;
