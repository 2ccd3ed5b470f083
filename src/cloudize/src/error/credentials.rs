use thiserror::Error;

/// Errors encountered while obtaining an access token for the object store.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// `gcloud` could not be started.
    #[error("Failed to run `gcloud auth print-access-token`")]
    GcloudNotAvailable(#[source] std::io::Error),

    /// `gcloud` ran but did not print a token.
    #[error("`gcloud auth print-access-token` failed ({status}): {stderr}")]
    GcloudFailed {
        /// Exit status as displayed by the OS.
        status: String,
        /// Whatever gcloud printed on stderr.
        stderr: String,
    },

    /// `gcloud` succeeded but printed nothing.
    #[error("`gcloud auth print-access-token` returned an empty token")]
    EmptyToken,
}
