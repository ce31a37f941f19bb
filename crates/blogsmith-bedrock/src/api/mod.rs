mod llama;

pub use llama::*;
