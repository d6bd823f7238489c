pub mod classification;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod grouping;
pub mod ingest;
pub mod persist;
pub mod types;
pub mod viewport;

#[cfg(test)]
mod test_support;

pub use cli::report::{PlanReport, StudyReport};
pub use error::{ExtractError, FetchError, IngestError, Result, SkipReason, StudyviewError};
pub use extraction::{extract_tags, TagMap};
pub use grouping::build_studies;
pub use ingest::{ingest, DefaultSource, FileSource, IngestConfig, IngestReport, SkippedFile};
pub use persist::{studies_from_json, studies_to_json};
pub use types::*;
pub use viewport::{plan_viewports, plan_with_layout, ViewportPlan};
