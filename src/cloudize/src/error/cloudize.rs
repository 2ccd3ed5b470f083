use crate::error::{PlanNamespaceError, RewriteError, UploadError};
use cloudize_core::error::structured_file::StructuredFileError;
use thiserror::Error;

/// Errors encountered while preparing a workflow for the cloud.
#[derive(Error, Debug)]
pub enum CloudizeError {
    /// The inputs document could not be read.
    #[error("Failed to load workflow inputs")]
    LoadInputsFailed(#[source] StructuredFileError),

    /// The workflow definition could not be read.
    #[error("Failed to load workflow definition")]
    LoadWorkflowFailed(#[source] StructuredFileError),

    /// Remote keys could not be assigned.
    #[error(transparent)]
    PlanNamespace(#[from] PlanNamespaceError),

    /// The rewritten inputs document could not be produced.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    /// The rewritten inputs document could not be written.
    #[error("Failed to save rewritten workflow inputs")]
    SaveOutputFailed(#[source] StructuredFileError),

    /// A file could not be uploaded.
    #[error(transparent)]
    Upload(#[from] UploadError),
}
