use crate::error::ObjectStoreError;
use crate::storage::credentials::access_token;
use crate::storage::retryable::Retryable;
use crate::storage::ObjectStore;
use backoff::backoff::Backoff;
use backoff::ExponentialBackoffBuilder;
use reqwest::blocking::{Body, Client};
use reqwest::header::CONTENT_TYPE;
use slog::{debug, warn, Logger};
use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";
const MAX_RETRIES: usize = 3;

/// A Google Cloud Storage bucket, written to through the JSON API.
pub struct GcsBucket {
    name: String,
    endpoint: Url,
    client: Client,
    access_token: RefCell<Option<String>>,
    initial_retry_interval: Duration,
    logger: Logger,
}

impl GcsBucket {
    /// A bucket on the public endpoint. No credentials are looked up until
    /// the first upload.
    pub fn new(name: &str, logger: &Logger) -> Result<Self, ObjectStoreError> {
        // uploads of large files must not hit a total request timeout
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(None::<Duration>)
            .build()
            .map_err(ObjectStoreError::BuildClientFailed)?;
        let endpoint = Url::parse(DEFAULT_ENDPOINT).map_err(ObjectStoreError::InvalidEndpoint)?;
        Ok(GcsBucket {
            name: name.to_string(),
            endpoint,
            client,
            access_token: RefCell::new(None),
            initial_retry_interval: Duration::from_secs(1),
            logger: logger.clone(),
        })
    }

    /// Sends requests to `endpoint` instead, e.g. an emulator.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Uses `token` instead of looking one up.
    pub fn with_access_token(self, token: String) -> Self {
        *self.access_token.borrow_mut() = Some(token);
        self
    }

    /// The first wait between attempts; later waits grow exponentially.
    pub fn with_initial_retry_interval(mut self, interval: Duration) -> Self {
        self.initial_retry_interval = interval;
        self
    }

    fn access_token(&self) -> Result<String, ObjectStoreError> {
        if let Some(token) = self.access_token.borrow().as_ref() {
            return Ok(token.clone());
        }
        let token = access_token()?;
        *self.access_token.borrow_mut() = Some(token.clone());
        Ok(token)
    }

    fn upload_url(&self, remote_key: &str) -> Result<Url, ObjectStoreError> {
        let base = format!(
            "{}/upload/storage/v1/b/{}/o",
            self.endpoint.as_str().trim_end_matches('/'),
            self.name
        );
        Url::parse_with_params(&base, &[("uploadType", "media"), ("name", remote_key)]).map_err(
            |source| ObjectStoreError::InvalidUrl {
                key: remote_key.to_string(),
                source,
            },
        )
    }

    fn try_upload(&self, local_path: &Path, remote_key: &str) -> Result<(), ObjectStoreError> {
        let url = self.upload_url(remote_key)?;
        let token = self.access_token()?;
        // reopened on every attempt; the body is consumed by the request
        let file = cloudize_core::fs::open(local_path).map_err(ObjectStoreError::OpenSource)?;
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(Body::from(file))
            .send()
            .map_err(|error| ObjectStoreError::Request {
                key: remote_key.to_string(),
                error,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().unwrap_or_default();
        Err(ObjectStoreError::Rejected {
            key: remote_key.to_string(),
            status,
            message,
        })
    }
}

impl ObjectStore for GcsBucket {
    fn bucket(&self) -> &str {
        &self.name
    }

    fn scheme(&self) -> &str {
        "gs"
    }

    fn upload(&self, local_path: &Path, remote_key: &str) -> Result<(), ObjectStoreError> {
        let mut retry_policy = ExponentialBackoffBuilder::new()
            .with_initial_interval(self.initial_retry_interval)
            .with_max_interval(Duration::from_secs(16))
            .with_multiplier(2.0)
            .with_max_elapsed_time(None)
            .build();
        let mut retries = 0;

        loop {
            match self.try_upload(local_path, remote_key) {
                Ok(()) => {
                    debug!(self.logger, "Stored gs://{}/{}", self.name, remote_key);
                    return Ok(());
                }
                Err(err) if !err.is_retryable() || retries >= MAX_RETRIES => return Err(err),
                Err(err) => {
                    retries += 1;
                    let wait = retry_policy
                        .next_backoff()
                        .unwrap_or(self.initial_retry_interval);
                    warn!(
                        self.logger,
                        "{}. Retrying in {:?} ({}/{}).", err, wait, retries, MAX_RETRIES
                    );
                    std::thread::sleep(wait);
                }
            }
        }
    }
}

impl fmt::Debug for GcsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GcsBucket")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint.as_str())
            .field("initial_retry_interval", &self.initial_retry_interval)
            .finish_non_exhaustive()
    }
}
