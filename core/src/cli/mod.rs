pub mod files;
pub mod report;

use crate::error::Result;
use crate::ingest::IngestConfig;
use crate::types::Layout;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for studyview
#[derive(Parser, Debug)]
#[command(name = "studyview")]
#[command(about = "Build canonical study hierarchies from DICOM files or URLs")]
#[command(version)]
pub struct StudyviewArgs {
    /// DICOM files, directories or http(s) URLs
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum number of files fetched at once
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Per-file download timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// JSON ingest configuration; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl StudyviewArgs {
    /// Resolves the ingest configuration from `--config` and flag overrides
    ///
    /// Local paths are always allowed from the command line.
    pub fn ingest_config(&self) -> Result<IngestConfig> {
        let mut config = match &self.config {
            Some(path) => IngestConfig::from_json_file(path)?,
            None => IngestConfig::default(),
        };
        if let Some(concurrency) = self.concurrency {
            config = config.with_max_concurrency(concurrency);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_fetch_timeout_secs(timeout);
        }
        let config = config.allow_local_files(true);
        config.validate()?;
        Ok(config)
    }
}

/// Command-line arguments for studylayout
#[derive(Parser, Debug)]
#[command(name = "studylayout")]
#[command(about = "Choose viewport layouts and slot contents for stored studies")]
#[command(version)]
pub struct StudylayoutArgs {
    /// JSON file holding a study or an array of studies
    #[arg(value_name = "STUDIES_JSON")]
    pub studies: PathBuf,

    /// Use this layout instead of the one picked from the series count
    #[arg(short, long, value_name = "NAME")]
    pub layout: Option<Layout>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Initialises `env_logger`
///
/// `RUST_LOG` takes precedence; without it the level is Info, or Debug
/// with `--verbose`.
pub fn setup_logging(verbose: bool) {
    env_logger::Builder::from_env(log_env("RUST_LOG", verbose)).init();
}

fn log_env(filter_var: &str, verbose: bool) -> env_logger::Env<'_> {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Env::default().filter_or(filter_var, default_level)
}
