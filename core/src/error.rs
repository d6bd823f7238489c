use std::time::Duration;
use thiserror::Error;

/// Result type for studyview operations
pub type Result<T> = std::result::Result<T, StudyviewError>;

/// Errors raised while turning one file buffer into a tag map
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The buffer is not a readable DICOM container
    #[error("Malformed file: {0}")]
    MalformedFile(String),

    /// One of the study/series/instance identifiers is absent
    #[error("Missing required tag: {0}")]
    MissingRequiredTag(&'static str),
}

/// Errors raised while retrieving the raw bytes of a file
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure
    #[error("Request for {location} failed: {message}")]
    Request { location: String, message: String },

    /// The server answered with a non-success status
    #[error("Request for {location} returned status {status}")]
    Status { location: String, status: u16 },

    /// The download did not finish in time
    #[error("Request for {location} timed out after {after:?}")]
    Timeout { location: String, after: Duration },

    /// The location is neither a URL nor an allowed local path
    #[error("Unsupported file location: {0}")]
    UnsupportedLocation(String),

    /// Local read failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single file was left out of a batch
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The worker task panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Task(String),
}

/// Batch-level ingest failures
#[derive(Error, Debug)]
pub enum IngestError {
    /// Every file of the batch was skipped
    #[error("No valid imaging data found ({skipped} of {attempted} files skipped)")]
    NoValidImagingData { attempted: usize, skipped: usize },

    /// Ingest configuration is unusable
    #[error("Invalid ingest configuration: {0}")]
    InvalidConfig(String),
}

/// Top-level error type
#[derive(Error, Debug)]
pub enum StudyviewError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Unknown layout name
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for ExtractError {
    fn from(e: dicom_object::ReadError) -> Self {
        ExtractError::MalformedFile(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ExtractError::MissingRequiredTag("SeriesInstanceUID");
        assert_eq!(err.to_string(), "Missing required tag: SeriesInstanceUID");

        let err = IngestError::NoValidImagingData {
            attempted: 3,
            skipped: 3,
        };
        assert_eq!(
            err.to_string(),
            "No valid imaging data found (3 of 3 files skipped)"
        );
    }

    #[test]
    fn test_extract_error_wraps_into_top_level() {
        let err: StudyviewError = ExtractError::MalformedFile("truncated".into()).into();
        assert!(matches!(err, StudyviewError::Extract(_)));
        assert_eq!(err.to_string(), "Malformed file: truncated");
    }
}
