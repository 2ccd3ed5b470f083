use crate::document::NodePath;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SetDeepError {
    #[error("cannot descend into scalar at {0}")]
    ScalarInPath(NodePath),

    #[error("index {index} is out of bounds at {at} (length {len})")]
    IndexOutOfBounds { at: NodePath, index: usize, len: usize },

    #[error("cannot use key '{key}' on sequence at {at}")]
    KeyOnSequence { at: NodePath, key: String },

    #[error("cannot use index {index} on map at {at}")]
    IndexOnMap { at: NodePath, index: usize },
}
