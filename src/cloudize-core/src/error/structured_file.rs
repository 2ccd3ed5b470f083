use crate::error::fs::{FsError, ReadFileError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructuredFileError {
    #[error("Failed to parse contents of {0} as yaml")]
    DeserializeYamlFileFailed(Box<PathBuf>, #[source] serde_yaml::Error),

    #[error("Failed to read document file")]
    ReadDocumentFileFailed(#[from] ReadFileError),

    #[error("Failed to serialize JSON to {0}")]
    SerializeJsonFileFailed(Box<PathBuf>, #[source] serde_json::Error),

    #[error("Failed to serialize YAML to {0}")]
    SerializeYamlFileFailed(Box<PathBuf>, #[source] serde_yaml::Error),

    #[error("Unsupported mapping key in {0}: only scalar keys are allowed")]
    UnsupportedMappingKey(Box<PathBuf>),

    #[error("Failed to write document file")]
    WriteDocumentFileFailed(#[source] FsError),
}
