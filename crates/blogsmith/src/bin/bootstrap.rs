//! AWS Lambda entry point.
//!
//! Build with `cargo lambda build --release -p blogsmith --bin bootstrap` and
//! deploy behind an API gateway proxy integration.
use blogsmith::{
    aws::build_handler,
    config::HandlerConfig,
    event::GatewayEvent,
    telemetry::{self, LogFormat},
};
use lambda_runtime::{Error, LambdaEvent, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init(LogFormat::Json);

    let handler = build_handler(HandlerConfig::from_env()).await?;
    let handler = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<GatewayEvent>| async move {
        tracing::info!(request_id = %event.context.request_id, "invocation received");
        handler.handle(event.payload).await.map_err(Error::from)
    }))
    .await
}
