//! Shapes exchanged with the API gateway.
use blogsmith_core::error::{BlogsmithError, Result};
use serde::{Deserialize, Serialize};

/// API gateway proxy event. Only the body is read; every other field of the
/// proxy payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl GatewayEvent {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

/// JSON document carried in [`GatewayEvent::body`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRequest {
    pub blog_topic: String,
}

impl BlogRequest {
    pub fn new(blog_topic: impl Into<String>) -> Self {
        Self {
            blog_topic: blog_topic.into(),
        }
    }

    /// Decode the request out of the event body.
    ///
    /// # Errors
    ///
    /// * [`BlogsmithError::InvalidRequest`] – the event has no body.
    /// * [`BlogsmithError::Serialization`] – the body is not JSON or
    ///   `blog_topic` is missing or not a string.
    pub fn from_event(event: &GatewayEvent) -> Result<Self> {
        let body = event
            .body
            .as_deref()
            .ok_or_else(|| BlogsmithError::InvalidRequest("event has no body".into()))?;

        Ok(serde_json::from_str(body)?)
    }
}

/// Fixed-shape reply: status 200 and the JSON-encoded completion message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn completed(message: &str) -> Result<Self> {
        Ok(Self {
            status_code: 200,
            body: serde_json::to_string(message)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_topic_from_proxy_event() {
        let event: GatewayEvent = serde_json::from_str(
            r#"{
                "resource": "/blog",
                "httpMethod": "POST",
                "headers": {"content-type": "application/json"},
                "body": "{\"blog_topic\": \"machine learning\", \"extra\": 1}"
            }"#,
        )
        .unwrap();

        let request = BlogRequest::from_event(&event).unwrap();
        assert_eq!(request.blog_topic, "machine learning");
    }

    #[test]
    fn missing_body_is_an_invalid_request() {
        let err = BlogRequest::from_event(&GatewayEvent::default()).unwrap_err();
        assert!(matches!(err, BlogsmithError::InvalidRequest(_)));
    }

    #[test]
    fn malformed_bodies_are_serialization_errors() {
        for body in ["not json", "{}", r#"{"blog_topic": 7}"#, r#"{"topic": "x"}"#] {
            let err = BlogRequest::from_event(&GatewayEvent::with_body(body)).unwrap_err();
            assert!(matches!(err, BlogsmithError::Serialization(_)), "{body}");
        }
    }

    #[test]
    fn response_serialises_with_gateway_field_names() {
        let response = HandlerResponse::completed("Blog generation (LLaMA 3) completed.").unwrap();
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"statusCode":200,"body":"\"Blog generation (LLaMA 3) completed.\""}"#
        );
    }
}
