use std::{future::Future, pin::Pin};

use crate::error::Result;

/// A key-addressed object store used as a write-only sink.
///
/// `put_artifact` creates or overwrites the object at `key` in `bucket`
/// with `content` as its full body. No conditional writes, no versioning
/// checks.
pub trait ArtifactStore: Send + Sync {
    fn put_artifact<'p>(
        &'p self,
        bucket: &'p str,
        key: &'p str,
        content: &'p str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'p>>;
}
