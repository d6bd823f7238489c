use clap::Parser;
use log::{error, info};
use std::process;
use std::sync::Arc;
use studyview_core::cli::files::expand_sources;
use studyview_core::cli::{setup_logging, OutputFormat, StudyviewArgs};
use studyview_core::{ingest, studies_to_json, DefaultSource, StudyReport};

#[tokio::main]
async fn main() {
    let cli = StudyviewArgs::parse();

    setup_logging(cli.verbose);

    let config = match cli.ingest_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let locations = match expand_sources(&cli.sources) {
        Ok(locations) => locations,
        Err(e) => {
            error!("Failed to read sources: {}", e);
            eprintln!("Error: Failed to read sources: {}", e);
            process::exit(1);
        }
    };

    if locations.is_empty() {
        eprintln!("Error: No DICOM files found");
        process::exit(1);
    }

    let source = match DefaultSource::new(&config) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let report = match ingest(source, &locations, &config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!(
        "{} studies, {} files skipped",
        report.studies.len(),
        report.skipped.len()
    );

    match cli.format {
        OutputFormat::Text => println!("{}", StudyReport::new(&report)),
        OutputFormat::Json => match studies_to_json(&report.studies) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize to JSON: {}", e);
                eprintln!("Error: Failed to serialize to JSON: {}", e);
                process::exit(1);
            }
        },
    }
}
