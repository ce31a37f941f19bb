//! Builder‐style helper for constructing **Llama 3 instruct prompts**.
//!
//! Llama 3 expects its chat turns wrapped in special tokens
//! (`<|begin_of_text|>`, `<|start_header_id|>…<|end_header_id|>`,
//! `<|eot_id|>`). Typing them inline is tedious and error‐prone.
//! `PromptBuilder` offers a fluent API that emits them for you. Every method
//! returns `self`, enabling call-chaining:
//!
//! ```rust
//! use blogsmith_prompt::builder::{PromptBuilder, Role};
//!
//! let prompt = PromptBuilder::new()
//!     .add_begin_of_text()
//!     .add_header(Role::User)
//!     .add_line("Say hello.")
//!     .add_eot()
//!     .add_header(Role::Assistant)
//!     .finalize();
//!
//! assert!(prompt.starts_with("<|begin_of_text|><|start_header_id|>user"));
//! assert!(prompt.ends_with("<|start_header_id|>assistant<|end_header_id|>\n"));
//! ```
//!
//! The builder performs **no validation** and no smart formatting: content
//! is emitted exactly as given, special tokens included.

use std::fmt::{Display, Write as _};

pub const BEGIN_OF_TEXT: &str = "<|begin_of_text|>";
pub const START_HEADER: &str = "<|start_header_id|>";
pub const END_HEADER: &str = "<|end_header_id|>";
pub const END_OF_TURN: &str = "<|eot_id|>";

/// Chat roles understood by the Llama 3 header markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Fluent helper to produce Llama 3 prompts.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled prompt.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Emit `<|begin_of_text|>` without a trailing newline.
    pub fn add_begin_of_text(mut self) -> Self {
        self.buffer.push_str(BEGIN_OF_TEXT);
        self
    }

    /// Open a turn for `role`: `<|start_header_id|>role<|end_header_id|>`.
    pub fn add_header(mut self, role: Role) -> Self {
        writeln!(self.buffer, "{START_HEADER}{role}{END_HEADER}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Close the current turn with `<|eot_id|>`.
    pub fn add_eot(self) -> Self {
        self.add_line(END_OF_TURN)
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated prompt and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
