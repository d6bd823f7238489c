use crate::error::FetchError;
use async_trait::async_trait;

use super::config::IngestConfig;

/// Retrieves the raw bytes behind a file location
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, FetchError>;
}

/// Checks whether a location is an http(s) URL
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetches http(s) URLs, and local paths when allowed
pub struct DefaultSource {
    client: reqwest::Client,
    allow_local_files: bool,
}

impl DefaultSource {
    pub fn new(config: &IngestConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .build()
            .map_err(|e| FetchError::Request {
                location: "<client>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            allow_local_files: config.allow_local_files,
        })
    }

    async fn fetch_remote(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        let request_error = |e: reqwest::Error| FetchError::Request {
            location: location.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(location.trim())
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(request_error)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl FileSource for DefaultSource {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        if is_remote(location) {
            self.fetch_remote(location).await
        } else if self.allow_local_files {
            Ok(tokio::fs::read(location).await?)
        } else {
            Err(FetchError::UnsupportedLocation(location.to_string()))
        }
    }
}
