use crate::error::ObjectStoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while uploading the files of all inputs.
#[derive(Error, Debug)]
pub enum UploadError {
    /// A file reached the upload step without a remote key.
    #[error("File {0} has not been assigned a remote key")]
    Unplanned(Box<PathBuf>),

    /// The object store gave up on a file.
    #[error("Failed to upload {0}")]
    UploadFailed(Box<PathBuf>, #[source] ObjectStoreError),
}
