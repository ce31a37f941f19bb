//! Provider-agnostic building blocks of the blogsmith Lambda.
//!
//! * [`template::PromptFormatter`] renders a topic into a prompt.
//! * [`provider::TextGenerationProvider`] and [`provider::ArtifactStore`]
//!   are the two seams adapter crates implement.
//! * [`GenerationClient`] and [`ArtifactWriter`] wrap those seams and turn
//!   every failure into a log line instead of an error.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;
pub mod writer;

pub use client::GenerationClient;
pub use writer::ArtifactWriter;
