use std::{future::Future, pin::Pin};

use aws_config::BehaviorVersion;
use aws_sdk_s3::{Client, error::DisplayErrorContext, primitives::ByteStream};
use blogsmith_core::{error::Result, provider::ArtifactStore};
use tracing::debug;

use crate::error::S3Error;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// [`ArtifactStore`] backed by S3 `PutObject`.
///
/// Every write is an unconditional overwrite of the full object body.
#[derive(Debug, Clone)]
pub struct S3ArtifactStore {
    client: Client,
    content_type: String,
}

impl S3ArtifactStore {
    /// Build a client from the default credential and region chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(Client::new(&sdk_config))
    }

    pub fn new(client: Client) -> Self {
        Self {
            client,
            content_type: TEXT_CONTENT_TYPE.to_owned(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    async fn put_object(&self, bucket: &str, key: &str, content: &str) -> Result<()> {
        debug!(bucket, key, bytes = content.len(), "putting object");

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(content.as_bytes().to_vec()))
            .content_type(&self.content_type)
            .send()
            .await
            .map_err(|e| S3Error::Sdk {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}

impl ArtifactStore for S3ArtifactStore {
    fn put_artifact<'p>(
        &'p self,
        bucket: &'p str,
        key: &'p str,
        content: &'p str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'p>> {
        Box::pin(self.put_object(bucket, key, content))
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::config::{BehaviorVersion, Builder, Region};

    use super::*;

    fn offline_client() -> Client {
        Client::from_conf(
            Builder::new()
                .behavior_version(BehaviorVersion::latest())
                .region(Region::new("us-east-1"))
                .build(),
        )
    }

    #[test]
    fn writes_plain_text_by_default() {
        let store = S3ArtifactStore::new(offline_client());
        assert_eq!(store.content_type(), "text/plain; charset=utf-8");
    }

    #[test]
    fn content_type_can_be_overridden() {
        let store = S3ArtifactStore::new(offline_client()).with_content_type("text/markdown");
        assert_eq!(store.content_type(), "text/markdown");
    }
}
