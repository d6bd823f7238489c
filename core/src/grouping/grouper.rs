use crate::classification::classify;
use crate::extraction::TagMap;
use crate::types::{Instance, Series, Study};
use log::{debug, warn};

use super::ordered_map::OrderedMap;

/// Tags extracted from one file together with where the file came from
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedTags {
    pub location: String,
    pub tags: TagMap,
}

impl SourcedTags {
    pub fn new(location: impl Into<String>, tags: TagMap) -> Self {
        Self {
            location: location.into(),
            tags,
        }
    }
}

struct SeriesBuilder {
    series: Series,
    instances: OrderedMap<String, Instance>,
}

struct StudyBuilder {
    study_instance_uid: String,
    description: Option<String>,
    series: OrderedMap<String, SeriesBuilder>,
}

impl SeriesBuilder {
    fn finish(self) -> Series {
        Series {
            instances: self.instances.into_values().collect(),
            ..self.series
        }
    }
}

impl StudyBuilder {
    fn finish(self) -> Study {
        Study {
            study_instance_uid: self.study_instance_uid,
            description: self.description,
            series: self.series.into_values().map(SeriesBuilder::finish).collect(),
        }
    }
}

/// Folds per-file tags into the Study → Series → Instance hierarchy
///
/// Studies, series and instances appear in first-seen order; nothing is
/// sorted here (see [`sort_studies`](super::sort_studies)). Series-level
/// fields, including the laterality/view classification, come from the
/// first file seen for that series. A repeated SOP instance UID within a
/// series keeps the first file. Files lacking an identifier are skipped.
pub fn group_files<I>(files: I) -> Vec<Study>
where
    I: IntoIterator<Item = SourcedTags>,
{
    let mut studies: OrderedMap<String, StudyBuilder> = OrderedMap::new();

    for file in files {
        let tags = &file.tags;
        let (Some(study_uid), Some(series_uid), Some(sop_uid)) = (
            tags.study_instance_uid(),
            tags.series_instance_uid(),
            tags.sop_instance_uid(),
        ) else {
            warn!("Skipping {}: missing study/series/instance identifier", file.location);
            continue;
        };

        let study = studies.get_or_insert_with(study_uid, || StudyBuilder {
            study_instance_uid: study_uid.to_string(),
            description: tags.study_description().map(str::to_string),
            series: OrderedMap::new(),
        });

        let series = study.series.get_or_insert_with(series_uid, || {
            let description = tags.series_description();
            let view = classify(tags, description);
            debug!("Series {} classified as {}", series_uid, view);
            SeriesBuilder {
                series: Series {
                    series_instance_uid: series_uid.to_string(),
                    series_number: tags.series_number(),
                    description: description.map(str::to_string),
                    modality: tags.modality().map(str::to_string),
                    laterality: view.laterality,
                    view: view.view,
                    instances: Vec::new(),
                },
                instances: OrderedMap::new(),
            }
        });

        if series.instances.contains_key(sop_uid) {
            warn!(
                "Skipping {}: duplicate instance {} in series {}",
                file.location, sop_uid, series_uid
            );
            continue;
        }
        series.instances.get_or_insert_with(sop_uid, || Instance {
            instance_number: tags.instance_number(),
            instance_uid: sop_uid.to_string(),
            source_location: file.location.clone(),
        });
    }

    studies.into_values().map(StudyBuilder::finish).collect()
}
