//! Object stores that uploaded files end up in.
mod credentials;
mod gcs;
mod retryable;

pub use gcs::GcsBucket;

use crate::error::ObjectStoreError;
use crate::rewrite::RemoteBucket;
use std::path::Path;

/// A bucket-scoped store that accepts files by name.
pub trait ObjectStore: std::fmt::Debug {
    /// Name of the bucket uploads go to.
    fn bucket(&self) -> &str;

    /// URI scheme under which documents refer to the bucket.
    fn scheme(&self) -> &str;

    /// Stores the contents of `local_path` as `remote_key`, replacing any
    /// existing object of that name.
    fn upload(&self, local_path: &Path, remote_key: &str) -> Result<(), ObjectStoreError>;

    /// The bucket as seen from a rewritten document.
    fn remote_bucket(&self) -> RemoteBucket {
        RemoteBucket::new(self.scheme(), self.bucket())
    }
}
