use crate::error::ObjectStoreError;
use reqwest::StatusCode;

pub(crate) trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for ObjectStoreError {
    fn is_retryable(&self) -> bool {
        match self {
            ObjectStoreError::Request { error, .. } => error.is_timeout() || error.is_connect(),
            ObjectStoreError::Rejected { status, .. } => is_retryable_status(*status),
            ObjectStoreError::BuildClientFailed(_)
            | ObjectStoreError::Credentials(_)
            | ObjectStoreError::OpenSource(_)
            | ObjectStoreError::InvalidEndpoint(_)
            | ObjectStoreError::InvalidUrl { .. } => false,
        }
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::REQUEST_TIMEOUT | StatusCode::TOO_MANY_REQUESTS
    ) || status.is_server_error()
}
