//! Run the handler once against the real AWS services.
//!
//! ```bash
//! cargo run -p blogsmith --bin invoke_local -- "the history of the crab"
//! ```
//!
//! Credentials come from the default AWS chain; a `.env` file in the working
//! directory is loaded first when present.
use anyhow::{Result, ensure};
use blogsmith::{
    aws::build_handler,
    config::{
        BUCKET_VAR, DEFAULT_BUCKET, DEFAULT_KEY_PREFIX, HandlerConfig, KEY_PREFIX_VAR,
        MODEL_ID_VAR, REGION_VAR,
    },
    event::{BlogRequest, GatewayEvent},
    model::Model,
    telemetry::{self, LogFormat},
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Generate one blog post and store it, exactly as the Lambda would")]
struct Args {
    /// Topic of the blog post.
    #[arg(required = true, num_args = 1..)]
    topic: Vec<String>,

    #[arg(long, env = BUCKET_VAR, default_value = DEFAULT_BUCKET)]
    bucket: String,

    #[arg(long, env = KEY_PREFIX_VAR, default_value = DEFAULT_KEY_PREFIX)]
    key_prefix: String,

    /// Bedrock model id; defaults to Llama 3 8B Instruct.
    #[arg(long, env = MODEL_ID_VAR)]
    model_id: Option<String>,

    /// Bedrock region; defaults to us-east-1.
    #[arg(long, env = REGION_VAR)]
    region: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    telemetry::init(LogFormat::Pretty);

    let topic = args.topic.join(" ");
    ensure!(!topic.trim().is_empty(), "topic must not be blank");

    let mut config = HandlerConfig::default()
        .with_bucket(args.bucket)
        .with_key_prefix(args.key_prefix);
    if let Some(region) = args.region.filter(|region| !region.trim().is_empty()) {
        config = config.with_region(region);
    }
    if let Some(model_id) = args.model_id.filter(|id| !id.trim().is_empty()) {
        config = config.with_model(Model::Custom(model_id));
    }

    let handler = build_handler(config).await?;
    let event = GatewayEvent::with_body(serde_json::to_string(&BlogRequest::new(topic))?);
    let response = handler.handle(event).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
