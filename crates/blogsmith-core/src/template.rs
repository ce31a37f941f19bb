//! The seam between a raw topic and the instruction string a model expects.
//!
//! Prompt markup is model specific, so the core crate only defines the
//! trait; `blogsmith-prompt` ships the Llama 3 implementation.
//!
//! ```rust
//! use blogsmith_core::template::PromptFormatter;
//!
//! struct Shout;
//!
//! impl PromptFormatter for Shout {
//!     fn format(&self, topic: &str) -> String {
//!         format!("WRITE ABOUT {}", topic.to_uppercase())
//!     }
//! }
//!
//! assert_eq!(Shout.format("rust"), "WRITE ABOUT RUST");
//! ```

/// Turns a topic into a complete, ready-to-send prompt.
///
/// Implementations must be pure: no I/O, no validation, the same topic
/// always renders to the same string.
pub trait PromptFormatter: Send + Sync {
    fn format(&self, topic: &str) -> String;
}
