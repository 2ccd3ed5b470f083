use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoundationError {
    #[error("Cannot determine the current user name: {0}")]
    NoUserName(std::io::Error),

    #[error("User name is empty or contains '/'.")]
    InvalidUserName(String),

    #[error("Failed to format date")]
    FormatDateFailed(#[source] time::error::Format),
}
