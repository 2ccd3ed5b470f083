use crate::error::CredentialsError;
use cloudize_core::error::fs::FsError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors reported by an object store while uploading one file.
#[derive(Error, Debug)]
pub enum ObjectStoreError {
    /// The HTTP client could not be set up.
    #[error("Failed to build HTTP client")]
    BuildClientFailed(#[source] reqwest::Error),

    /// No access token could be obtained.
    #[error("Failed to obtain credentials for the object store")]
    Credentials(#[from] CredentialsError),

    /// The local file could not be opened.
    #[error("Failed to open source file")]
    OpenSource(#[source] FsError),

    /// The configured endpoint is not a URL.
    #[error("Invalid storage endpoint")]
    InvalidEndpoint(#[source] url::ParseError),

    /// The request could not be built (bad endpoint or bucket name).
    #[error("Invalid upload URL for '{key}'")]
    InvalidUrl {
        /// Remote key of the object.
        key: String,
        /// Why the URL was rejected.
        source: url::ParseError,
    },

    // reqwest::Error's Display already includes its sources
    /// The request failed before a response was received.
    #[error("Upload of '{key}' failed: {error}")]
    Request {
        /// Remote key of the object.
        key: String,
        /// The transport error.
        error: reqwest::Error,
    },

    /// The store answered with a non-success status.
    #[error("Upload of '{key}' was rejected with {status}: {message}")]
    Rejected {
        /// Remote key of the object.
        key: String,
        /// HTTP status of the response.
        status: StatusCode,
        /// Response body.
        message: String,
    },
}
