use cloudize_core::document::NodePath;
use cloudize_core::error::document::SetDeepError;
use thiserror::Error;

/// Errors encountered while writing remote URIs into the inputs document.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// The input's primary file has no remote key yet.
    #[error("File input at {0} has not been assigned a remote key")]
    Unplanned(NodePath),

    /// The document no longer has the shape the input was found in.
    #[error("Failed to set remote path at {0}")]
    SetPathFailed(NodePath, #[source] SetDeepError),
}
