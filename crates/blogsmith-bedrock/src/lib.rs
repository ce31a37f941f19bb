mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{BedrockAdapter, BedrockAdapterBuilder};
pub use blogsmith_core::generic::ClientSettings;
pub use client::BedrockClient;
pub use model_map::{LLAMA3_70B_INSTRUCT, LLAMA3_8B_INSTRUCT};
pub mod api;
mod client;
pub mod error;
