//! The blog-writing instruction sent to Llama 3.
//!
//! ```text
//!
//! <|begin_of_text|><|start_header_id|>user<|end_header_id|>
//! Write a 200-word blog on the topic: {topic}
//! <|eot_id|>
//! <|start_header_id|>assistant<|end_header_id|>
//! ```
//!
//! The topic is embedded verbatim. Empty topics, special tokens or
//! instructions hidden in the topic are passed straight through.

use blogsmith_core::template::PromptFormatter;

use crate::builder::{PromptBuilder, Role};

/// Asks for a passage of roughly `words` words on a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPrompt {
    words: u32,
}

impl Default for BlogPrompt {
    fn default() -> Self {
        Self { words: 200 }
    }
}

impl BlogPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(mut self, words: u32) -> Self {
        self.words = words;
        self
    }
}

impl PromptFormatter for BlogPrompt {
    fn format(&self, topic: &str) -> String {
        PromptBuilder::new()
            .add_blank_line()
            .add_begin_of_text()
            .add_header(Role::User)
            .add_line(format!(
                "Write a {}-word blog on the topic: {topic}",
                self.words
            ))
            .add_eot()
            .add_header(Role::Assistant)
            .finalize()
    }
}
