//! S3 implementation of [`ArtifactStore`](blogsmith_core::provider::ArtifactStore).
//!
//! ```rust,no_run
//! use blogsmith_core::ArtifactWriter;
//! use blogsmith_s3::S3ArtifactStore;
//!
//! # async fn run() {
//! let writer = ArtifactWriter::new(S3ArtifactStore::from_env().await);
//! writer.write("llama3-blogs/20250701_173000.txt", "my-bucket", "Hello").await;
//! # }
//! ```
pub mod error;
mod store;

pub use error::S3Error;
pub use store::{S3ArtifactStore, TEXT_CONTENT_TYPE};
