//! Batch ingestion: bounded-concurrency fetch and extraction feeding the
//! grouper and sorter

mod config;
mod pipeline;
mod source;

pub use config::IngestConfig;
pub use pipeline::{
    extract_all, fetch_and_extract, ingest, ingest_buffers, IngestReport, SkippedFile,
};
pub use source::{is_remote, DefaultSource, FileSource};
