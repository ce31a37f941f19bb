mod artifact_store;
mod text_generation;

pub use artifact_store::ArtifactStore;
pub use text_generation::{TextGenerationParameters, TextGenerationProvider};
