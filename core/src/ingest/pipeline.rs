use crate::error::{FetchError, IngestError, SkipReason};
use crate::extraction::{extract_tags, TagMap};
use crate::grouping::{build_studies, SourcedTags};
use crate::types::Study;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

use super::config::IngestConfig;
use super::source::FileSource;

/// A file left out of the batch, with the reason
#[derive(Debug)]
pub struct SkippedFile {
    pub location: String,
    pub reason: SkipReason,
}

/// Canonical studies built from a batch, plus the files that were skipped
#[derive(Debug)]
pub struct IngestReport {
    pub studies: Vec<Study>,
    pub skipped: Vec<SkippedFile>,
}

/// Downloads one file and extracts its tags
///
/// Parsing runs on the blocking pool so slow files do not stall other
/// downloads.
pub async fn fetch_and_extract<S>(
    source: &S,
    location: &str,
    timeout: Duration,
) -> Result<TagMap, SkipReason>
where
    S: FileSource + ?Sized,
{
    let bytes = match tokio::time::timeout(timeout, source.fetch(location)).await {
        Ok(result) => result?,
        Err(_) => {
            return Err(FetchError::Timeout {
                location: location.to_string(),
                after: timeout,
            }
            .into())
        }
    };
    debug!("Fetched {} ({} bytes)", location, bytes.len());

    tokio::task::spawn_blocking(move || extract_tags(&bytes))
        .await
        .map_err(|e| SkipReason::Task(e.to_string()))?
        .map_err(SkipReason::from)
}

/// Fetches and extracts every location with bounded concurrency
///
/// Each location runs as its own task; a semaphore caps how many are in
/// flight. Outcomes come back in input order regardless of completion
/// order.
pub async fn extract_all<S>(
    source: Arc<S>,
    locations: &[String],
    config: &IngestConfig,
) -> Result<Vec<(String, Result<TagMap, SkipReason>)>, IngestError>
where
    S: FileSource + ?Sized + 'static,
{
    config.validate()?;
    let permits = Arc::new(Semaphore::new(config.max_concurrency));
    let timeout = config.fetch_timeout();

    let handles: Vec<_> = locations
        .iter()
        .map(|location| {
            let source = Arc::clone(&source);
            let permits = Arc::clone(&permits);
            let location = location.clone();
            tokio::spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| SkipReason::Task(e.to_string()))?;
                fetch_and_extract(source.as_ref(), &location, timeout).await
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (location, handle) in locations.iter().zip(handles) {
        let outcome = handle
            .await
            .unwrap_or_else(|e| Err(SkipReason::Task(e.to_string())));
        outcomes.push((location.clone(), outcome));
    }
    Ok(outcomes)
}

/// Ingests one scan: fetch, extract, group and sort
///
/// Per-file failures are logged and reported in [`IngestReport::skipped`];
/// a batch that yields no study at all is an error.
pub async fn ingest<S>(
    source: Arc<S>,
    locations: &[String],
    config: &IngestConfig,
) -> Result<IngestReport, IngestError>
where
    S: FileSource + ?Sized + 'static,
{
    info!(
        "Ingesting {} files (concurrency {})",
        locations.len(),
        config.max_concurrency
    );
    let outcomes = extract_all(source, locations, config).await?;
    assemble(locations.len(), outcomes)
}

/// Ingests files whose bytes are already in memory
pub fn ingest_buffers<I>(buffers: I) -> Result<IngestReport, IngestError>
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let outcomes: Vec<_> = buffers
        .into_iter()
        .map(|(location, bytes)| {
            let outcome = extract_tags(&bytes).map_err(SkipReason::from);
            (location, outcome)
        })
        .collect();
    assemble(outcomes.len(), outcomes)
}

fn assemble(
    attempted: usize,
    outcomes: Vec<(String, Result<TagMap, SkipReason>)>,
) -> Result<IngestReport, IngestError> {
    let mut files = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for (location, outcome) in outcomes {
        match outcome {
            Ok(tags) => files.push(SourcedTags::new(location, tags)),
            Err(reason) => {
                warn!("Skipping {}: {}", location, reason);
                skipped.push(SkippedFile { location, reason });
            }
        }
    }

    let studies = build_studies(files);
    if studies.is_empty() {
        return Err(IngestError::NoValidImagingData {
            attempted,
            skipped: skipped.len(),
        });
    }

    info!(
        "Built {} studies from {} files ({} skipped)",
        studies.len(),
        attempted,
        skipped.len()
    );
    Ok(IngestReport { studies, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::test_support::{dicom_bytes, FixtureFile};
    use crate::types::{Laterality, ViewPosition};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory source that tracks how many fetches overlap
    #[derive(Default)]
    struct MemorySource {
        files: HashMap<String, Vec<u8>>,
        delay: Duration,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl MemorySource {
        fn with_file(mut self, location: &str, fixture: &FixtureFile) -> Self {
            self.files.insert(location.to_string(), dicom_bytes(fixture));
            self
        }

        fn with_raw(mut self, location: &str, bytes: &[u8]) -> Self {
            self.files.insert(location.to_string(), bytes.to_vec());
            self
        }
    }

    #[async_trait]
    impl FileSource for MemorySource {
        async fn fetch(&self, location: &str) -> Result<Vec<u8>, FetchError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.files.get(location).cloned().ok_or_else(|| FetchError::Status {
                location: location.to_string(),
                status: 404,
            })
        }
    }

    fn locations(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn mammo_source() -> MemorySource {
        MemorySource::default()
            .with_file(
                "https://files.example/lmlo.dcm",
                &FixtureFile::new("1.2", "1.2.4", "1.2.4.1")
                    .numbers(4, 1)
                    .modality("MG")
                    .series_description("L MLO"),
            )
            .with_file(
                "https://files.example/rcc.dcm",
                &FixtureFile::new("1.2", "1.2.1", "1.2.1.1")
                    .numbers(1, 1)
                    .modality("MG")
                    .laterality("R")
                    .view("CC")
                    .study_description("Screening"),
            )
            .with_raw("https://files.example/garbage.dcm", b"not a dicom file")
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_ingest_skips_bad_files() {
        let source = Arc::new(mammo_source());
        let locs = locations(&[
            "https://files.example/lmlo.dcm",
            "https://files.example/missing.dcm",
            "https://files.example/rcc.dcm",
            "https://files.example/garbage.dcm",
        ]);

        let report = ingest(source, &locs, &IngestConfig::default()).await.unwrap();
        assert_eq!(report.studies.len(), 1);
        let study = &report.studies[0];
        assert_eq!(study.description.as_deref(), None);
        assert_eq!(study.series.len(), 2);

        // Sorted by series number even though L-MLO was submitted first
        assert_eq!(study.series[0].series_instance_uid, "1.2.1");
        assert_eq!(study.series[0].laterality, Laterality::Right);
        assert_eq!(study.series[0].view, ViewPosition::Cc);
        assert_eq!(study.series[1].laterality, Laterality::Left);
        assert_eq!(study.series[1].view, ViewPosition::Mlo);
        assert_eq!(
            study.series[1].instances[0].source_location,
            "https://files.example/lmlo.dcm"
        );

        let skipped: Vec<_> = report.skipped.iter().map(|s| s.location.as_str()).collect();
        assert_eq!(
            skipped,
            ["https://files.example/missing.dcm", "https://files.example/garbage.dcm"]
        );
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Fetch(FetchError::Status { status: 404, .. })
        ));
        assert!(matches!(
            report.skipped[1].reason,
            SkipReason::Extract(ExtractError::MalformedFile(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrency_is_bounded() {
        let mut source = MemorySource {
            delay: Duration::from_millis(20),
            ..Default::default()
        };
        let mut locs = Vec::new();
        for i in 0..12 {
            let location = format!("https://files.example/{i}.dcm");
            source = source.with_file(
                &location,
                &FixtureFile::new("1.2", "1.2.1", &format!("1.2.1.{i}")).numbers(1, i),
            );
            locs.push(location);
        }
        let source = Arc::new(source);

        let config = IngestConfig::default().with_max_concurrency(3);
        let report = ingest(Arc::clone(&source), &locs, &config).await.unwrap();
        assert_eq!(report.studies[0].instance_count(), 12);
        assert!(source.peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_outcomes_keep_input_order() {
        let source = Arc::new(mammo_source());
        let locs = locations(&[
            "https://files.example/rcc.dcm",
            "https://files.example/garbage.dcm",
            "https://files.example/lmlo.dcm",
        ]);
        let outcomes = extract_all(source, &locs, &IngestConfig::default())
            .await
            .unwrap();
        let order: Vec<_> = outcomes.iter().map(|(l, _)| l.clone()).collect();
        assert_eq!(order, locs);
        assert!(outcomes[0].1.is_ok());
        assert!(outcomes[1].1.is_err());
    }

    #[tokio::test]
    async fn test_fetch_timeout_becomes_skip() {
        let source = MemorySource {
            delay: Duration::from_millis(500),
            ..Default::default()
        }
        .with_file(
            "https://files.example/slow.dcm",
            &FixtureFile::new("1.2", "1.2.1", "1.2.1.1"),
        );

        let result = fetch_and_extract(
            &source,
            "https://files.example/slow.dcm",
            Duration::from_millis(10),
        )
        .await;
        assert!(matches!(
            result,
            Err(SkipReason::Fetch(FetchError::Timeout { .. }))
        ));
    }

    #[tokio::test]
    async fn test_no_valid_data() {
        let source = Arc::new(mammo_source());
        let locs = locations(&[
            "https://files.example/garbage.dcm",
            "https://files.example/missing.dcm",
        ]);
        let err = ingest(source, &locs, &IngestConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            IngestError::NoValidImagingData {
                attempted: 2,
                skipped: 2
            }
        ));
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let source = Arc::new(mammo_source());
        let config = IngestConfig::default().with_max_concurrency(0);
        let err = ingest(source, &[], &config).await.unwrap_err();
        assert!(matches!(err, IngestError::InvalidConfig(_)));
    }

    #[test]
    fn test_ingest_buffers() {
        let fixture = FixtureFile::new("1.2", "1.2.1", "1.2.1.1")
            .numbers(1, 1)
            .study_description("Diagnostic");
        let report = ingest_buffers(vec![
            ("a.dcm".to_string(), dicom_bytes(&fixture)),
            ("b.dcm".to_string(), b"junk".to_vec()),
        ])
        .unwrap();
        assert_eq!(report.studies[0].description.as_deref(), Some("Diagnostic"));
        assert_eq!(report.skipped.len(), 1);

        assert!(ingest_buffers(Vec::new()).is_err());
    }
}
