//! # `blogsmith` – topic in, blog post in S3 out
//!
//! This crate glues the building-block crates of the workspace into an AWS
//! Lambda handler:
//!
//! | Crate                   | What it provides                                                     |
//! |-------------------------|----------------------------------------------------------------------|
//! | **`blogsmith-core`**    | Provider traits, `GenerationClient`, `ArtifactWriter`, errors        |
//! | **`blogsmith-prompt`**  | Llama 3 prompt builder and the blog prompt                           |
//! | **`blogsmith-bedrock`** | Bedrock `InvokeModel` backend *(feature `aws`)*                      |
//! | **`blogsmith-s3`**      | S3 `PutObject` artifact store *(feature `aws`)*                      |
//!
//! One invocation is a single linear pass:
//!
//! ```text
//! GatewayEvent ─► BlogRequest ─► BlogPrompt ─► Bedrock ─► StorageKey + S3 ─► HandlerResponse
//! ```
//!
//! The response is `200` with the same body whether or not generation or
//! storage succeeded; both failures only show up in the logs. A request
//! without a decodable `blog_topic` is returned as an error so the Lambda
//! runtime reports an invocation failure.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use blogsmith::{aws::build_handler, config::HandlerConfig, event::GatewayEvent};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let handler = build_handler(HandlerConfig::from_env()).await?;
//!     let response = handler
//!         .handle(GatewayEvent::with_body(r#"{"blog_topic": "ferris the crab"}"#))
//!         .await?;
//!     assert_eq!(response.status_code, 200);
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod event;
pub mod handler;
pub mod key;
pub mod telemetry;

#[cfg(feature = "aws")]
pub mod aws;

pub use blogsmith_core::*;
pub use blogsmith_prompt as prompt;
pub use handler::RequestHandler;

#[cfg(feature = "aws")]
pub use blogsmith_bedrock as bedrock;
#[cfg(feature = "aws")]
pub use blogsmith_s3 as s3;
