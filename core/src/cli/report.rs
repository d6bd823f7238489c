use crate::ingest::{IngestReport, SkippedFile};
use crate::types::{Series, Study};
use crate::viewport::ViewportPlan;
use std::fmt;

/// Text report for an ingestion run
pub struct StudyReport<'a> {
    studies: &'a [Study],
    skipped: &'a [SkippedFile],
}

impl<'a> StudyReport<'a> {
    pub fn new(report: &'a IngestReport) -> Self {
        Self {
            studies: &report.studies,
            skipped: &report.skipped,
        }
    }
}

fn series_label(series: &Series) -> String {
    let view = series.mammogram_view();
    let mut label = format!(
        "#{} {} [{}]",
        series.series_number,
        series.modality.as_deref().unwrap_or("??"),
        view
    );
    if let Some(description) = &series.description {
        label.push_str(&format!(" \"{}\"", description));
    }
    label
}

impl<'a> fmt::Display for StudyReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Studies")?;
        writeln!(f, "=======")?;

        for study in self.studies {
            writeln!(f)?;
            writeln!(f, "Study {}", study.study_instance_uid)?;
            writeln!(
                f,
                "  Description: {}",
                study.description.as_deref().unwrap_or("none")
            )?;
            writeln!(
                f,
                "  Series: {}  Instances: {}",
                study.series.len(),
                study.instance_count()
            )?;
            for series in &study.series {
                writeln!(f, "  {}", series_label(series))?;
                writeln!(
                    f,
                    "    {} ({} instances)",
                    series.series_instance_uid,
                    series.instances.len()
                )?;
            }
        }

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped Files")?;
            writeln!(f, "-------------")?;
            for skipped in self.skipped {
                writeln!(f, "{}: {}", skipped.location, skipped.reason)?;
            }
        }

        Ok(())
    }
}

/// Text report for the viewport plan of one study
pub struct PlanReport<'a> {
    study: &'a Study,
    plan: &'a ViewportPlan,
}

impl<'a> PlanReport<'a> {
    pub fn new(study: &'a Study, plan: &'a ViewportPlan) -> Self {
        Self { study, plan }
    }
}

impl<'a> fmt::Display for PlanReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.plan.layout.grid();
        writeln!(f, "Study {}", self.study.study_instance_uid)?;
        writeln!(f, "Layout: {} ({}x{})", self.plan.layout, rows, cols)?;

        for (i, (rect, uid)) in self.plan.slots().enumerate() {
            write!(f, "  Slot {} @ r{}c{}: ", i, rect.row, rect.col)?;
            match uid.and_then(|uid| self.study.find_series(uid)) {
                Some(series) => writeln!(f, "{}", series_label(series))?,
                None => writeln!(f, "empty")?,
            }
        }

        if self.plan.more_series_available() {
            writeln!(
                f,
                "  More series available: {} not shown",
                self.plan.hidden_series
            )?;
        }

        Ok(())
    }
}
