//! Best-effort persistence of generated passages.
//!
//! [`ArtifactWriter`] wraps any [`ArtifactStore`] and never reports failure
//! to its caller: storage errors are logged and dropped, so the handler's
//! response is the same whether or not the object was stored.
use std::sync::Arc;

use tracing::{error, info};

use crate::provider::ArtifactStore;

#[derive(Debug)]
pub struct ArtifactWriter<S> {
    store: Arc<S>,
}

impl<S> Clone for ArtifactWriter<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ArtifactStore> ArtifactWriter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Write `content` as the full body of `key` in `bucket`, overwriting
    /// whatever is there.
    pub async fn write(&self, key: &str, bucket: &str, content: &str) {
        match self.store.put_artifact(bucket, key, content).await {
            Ok(()) => info!(bucket, key, "blog saved to object store"),
            Err(err) => error!(bucket, key, error = %err, "error saving blog to object store"),
        }
    }
}
