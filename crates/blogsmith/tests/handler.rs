use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

use blogsmith::{
    RequestHandler,
    config::HandlerConfig,
    error::{BlogsmithError, Result},
    event::{GatewayEvent, HandlerResponse},
    generic::GenerationResult,
    provider::{ArtifactStore, TextGenerationParameters, TextGenerationProvider},
};
use regex::Regex;

/// Inference stub replaying a canned Bedrock-style outcome.
#[derive(Clone)]
enum Reply {
    Text(&'static str),
    Timeout,
    Transport,
    MissingField,
    NotJson,
}

#[derive(Clone)]
struct StubModel {
    reply: Reply,
    calls: Arc<Mutex<Vec<TextGenerationParameters>>>,
}

impl StubModel {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::default(),
        }
    }
}

impl TextGenerationProvider for StubModel {
    fn generate<'p>(
        &'p self,
        params: TextGenerationParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult>> + Send + 'p>> {
        self.calls.lock().unwrap().push(params);
        let reply = self.reply.clone();

        Box::pin(async move {
            let body: &[u8] = match reply {
                Reply::Text(text) => return Ok(GenerationResult::new(text)),
                Reply::Timeout => return Err(BlogsmithError::Backend("read timeout after 300s".into())),
                Reply::Transport => return Err(BlogsmithError::Backend("dispatch failure".into())),
                Reply::MissingField => br#"{"outputs": []}"#,
                Reply::NotJson => b"<html>502</html>",
            };

            #[derive(serde::Deserialize)]
            struct Body {
                generation: String,
            }
            let body: Body = serde_json::from_slice(body)?;
            Ok(GenerationResult::new(body.generation))
        })
    }
}

#[derive(Clone, Default)]
struct StubStore {
    fail: bool,
    puts: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl StubStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn puts(&self) -> Vec<(String, String, String)> {
        self.puts.lock().unwrap().clone()
    }
}

impl ArtifactStore for StubStore {
    fn put_artifact<'p>(
        &'p self,
        bucket: &'p str,
        key: &'p str,
        content: &'p str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'p>> {
        Box::pin(async move {
            self.puts
                .lock()
                .unwrap()
                .push((bucket.to_owned(), key.to_owned(), content.to_owned()));
            if self.fail {
                return Err(BlogsmithError::Storage("NoSuchBucket".into()));
            }
            Ok(())
        })
    }
}

fn topic_event(topic: &str) -> GatewayEvent {
    GatewayEvent::with_body(format!(r#"{{"blog_topic": "{topic}"}}"#))
}

async fn run(reply: Reply, store: StubStore) -> HandlerResponse {
    let handler = RequestHandler::new(StubModel::new(reply), store, HandlerConfig::default());
    handler.handle(topic_event("testing")).await.unwrap()
}

#[tokio::test]
async fn stores_generated_text_under_timestamped_key() {
    let model = StubModel::new(Reply::Text("Hello world"));
    let store = StubStore::default();
    let handler = RequestHandler::new(model.clone(), store.clone(), HandlerConfig::default());

    let response = handler.handle(topic_event("testing")).await.unwrap();
    assert_eq!(response.status_code, 200);

    let puts = store.puts();
    assert_eq!(puts.len(), 1);
    let (bucket, key, content) = &puts[0];
    assert_eq!(bucket, "awsbedrock-gaurob");
    assert!(
        Regex::new(r"^llama3-blogs/\d{8}_\d{6}\.txt$").unwrap().is_match(key),
        "unexpected key {key}"
    );
    assert_eq!(content, "Hello world");

    let calls = model.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt().contains("Write a 200-word blog on the topic: testing\n"));
    assert_eq!(calls[0].sampling().max_gen_len, 128);
}

#[tokio::test]
async fn every_outcome_returns_the_same_response() {
    let ok = run(Reply::Text("Hello world"), StubStore::default()).await;
    let write_failed = run(Reply::Text("Hello world"), StubStore::failing()).await;
    let generation_failed = run(Reply::Transport, StubStore::default()).await;

    assert_eq!(ok.status_code, 200);
    assert_eq!(ok.body, "\"Blog generation (LLaMA 3) completed.\"");

    let bytes = |r: &HandlerResponse| serde_json::to_vec(r).unwrap();
    assert_eq!(bytes(&ok), bytes(&write_failed));
    assert_eq!(bytes(&ok), bytes(&generation_failed));
}

#[tokio::test]
async fn failed_write_is_attempted_once_and_swallowed() {
    let store = StubStore::failing();
    let response = run(Reply::Text("Hello world"), store.clone()).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(store.puts().len(), 1);
}

#[tokio::test]
async fn generation_failures_skip_the_write() {
    for reply in [
        Reply::Timeout,
        Reply::Transport,
        Reply::MissingField,
        Reply::NotJson,
        Reply::Text(""),
    ] {
        let store = StubStore::default();
        let response = run(reply, store.clone()).await;

        assert_eq!(response.status_code, 200);
        assert!(store.puts().is_empty());
    }
}

#[tokio::test]
async fn configured_bucket_and_prefix_are_used() {
    let store = StubStore::default();
    let config = HandlerConfig::default()
        .with_bucket("staging")
        .with_key_prefix("drafts");
    let handler = RequestHandler::new(StubModel::new(Reply::Text("x")), store.clone(), config);

    handler.handle(topic_event("tea")).await.unwrap();

    let puts = store.puts();
    assert_eq!(puts[0].0, "staging");
    assert!(puts[0].1.starts_with("drafts/"));
}

#[tokio::test]
async fn undecodable_requests_fault_without_side_effects() {
    for event in [
        GatewayEvent::default(),
        GatewayEvent::with_body(r#"{"topic": "testing"}"#),
        GatewayEvent::with_body("blog_topic=testing"),
    ] {
        let model = StubModel::new(Reply::Text("Hello world"));
        let store = StubStore::default();
        let handler = RequestHandler::new(model.clone(), store.clone(), HandlerConfig::default());

        assert!(handler.handle(event).await.is_err());
        assert!(model.calls.lock().unwrap().is_empty());
        assert!(store.puts().is_empty());
    }
}

/// Test writer capturing formatted log output into a shared buffer.
#[derive(Clone)]
struct SharedLogs(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for SharedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedLogs {
    type Writer = SharedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn failed_generation_is_logged_once_at_error_level() {
    let logs = Arc::new(Mutex::new(Vec::<u8>::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(SharedLogs(Arc::clone(&logs)))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let store = StubStore::default();
    let response = run(Reply::Transport, store.clone()).await;
    assert_eq!(response.status_code, 200);
    assert!(store.puts().is_empty());

    let output = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
    let errors: Vec<&str> = output.lines().filter(|line| line.contains("ERROR")).collect();
    assert_eq!(errors.len(), 1, "{output}");
    assert!(errors[0].contains("dispatch failure"), "{output}");
}
