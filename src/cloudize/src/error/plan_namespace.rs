use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while assigning remote keys.
#[derive(Error, Debug)]
pub enum PlanNamespaceError {
    /// The files have no directory in common (e.g. they live on different drives).
    #[error("Files {0} and {1} share no common ancestor directory")]
    NoSharedAncestor(Box<PathBuf>, Box<PathBuf>),

    /// A file is not below the directory chosen as the common root.
    #[error("File {path} is not under the shared ancestor {ancestor}")]
    OutsideSharedAncestor {
        /// The offending local file.
        path: Box<PathBuf>,
        /// The common root that was computed.
        ancestor: Box<PathBuf>,
    },
}
