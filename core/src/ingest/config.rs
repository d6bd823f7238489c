use crate::error::{IngestError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for batch ingestion
///
/// Missing fields take their defaults when loaded from JSON.
///
/// # Example
///
/// ```
/// use studyview_core::IngestConfig;
///
/// let config = IngestConfig::default()
///     .with_max_concurrency(4)
///     .allow_local_files(true);
///
/// assert_eq!(config.max_concurrency, 4);
/// assert!(config.allow_local_files);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Maximum number of files fetched and parsed at once
    pub max_concurrency: usize,

    /// Per-file download timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Accept plain filesystem paths in addition to http(s) URLs
    pub allow_local_files: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            fetch_timeout_secs: 30,
            allow_local_files: false,
        }
    }
}

impl IngestConfig {
    /// Loads a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder: Set the concurrency cap
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Builder: Set the per-file download timeout
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Builder: Allow local file paths
    pub fn allow_local_files(mut self, allow: bool) -> Self {
        self.allow_local_files = allow;
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Rejects settings that would stall ingestion
    pub fn validate(&self) -> std::result::Result<(), IngestError> {
        if self.max_concurrency == 0 {
            return Err(IngestError::InvalidConfig(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(IngestError::InvalidConfig(
                "fetch_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = IngestConfig::default();
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert!(!config.allow_local_files);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(IngestConfig::default()
            .with_max_concurrency(0)
            .validate()
            .is_err());
        assert!(IngestConfig::default()
            .with_fetch_timeout_secs(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: IngestConfig = serde_json::from_str(r#"{"max_concurrency": 2}"#).unwrap();
        assert_eq!(config.max_concurrency, 2);
        assert_eq!(config.fetch_timeout_secs, 30);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"fetch_timeout_secs": 5, "allow_local_files": true}}"#).unwrap();
        let config = IngestConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.fetch_timeout_secs, 5);
        assert!(config.allow_local_files);

        let mut bad = NamedTempFile::new().unwrap();
        write!(bad, r#"{{"max_concurrency": 0}}"#).unwrap();
        assert!(IngestConfig::from_json_file(bad.path()).is_err());
    }
}
