use clap::Parser;
use log::{error, info};
use serde::Serialize;
use std::process;
use studyview_core::cli::{setup_logging, OutputFormat, StudylayoutArgs};
use studyview_core::{plan_viewports, plan_with_layout, studies_from_json, PlanReport, ViewportPlan};

/// One study's plan in JSON output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StudyPlan<'a> {
    study_instance_uid: &'a str,
    #[serde(flatten)]
    plan: &'a ViewportPlan,
    more_series_available: bool,
}

fn main() {
    let cli = StudylayoutArgs::parse();

    setup_logging(cli.verbose);

    let json = match std::fs::read_to_string(&cli.studies) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: Failed to read {}: {}", cli.studies.display(), e);
            process::exit(1);
        }
    };

    let studies = match studies_from_json(&json) {
        Ok(studies) => studies,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("Loaded {} studies", studies.len());

    let plans: Vec<ViewportPlan> = studies
        .iter()
        .map(|study| match cli.layout {
            Some(layout) => plan_with_layout(&study.series, layout),
            None => plan_viewports(&study.series),
        })
        .collect();

    match cli.format {
        OutputFormat::Text => {
            for (study, plan) in studies.iter().zip(&plans) {
                println!("{}", PlanReport::new(study, plan));
            }
        }
        OutputFormat::Json => {
            let output: Vec<StudyPlan> = studies
                .iter()
                .zip(&plans)
                .map(|(study, plan)| StudyPlan {
                    study_instance_uid: &study.study_instance_uid,
                    plan,
                    more_series_available: plan.more_series_available(),
                })
                .collect();
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to serialize to JSON: {}", e);
                    eprintln!("Error: Failed to serialize to JSON: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
