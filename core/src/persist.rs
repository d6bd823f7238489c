//! JSON form of canonical studies, as handed to and read back from storage

use crate::error::Result;
use crate::grouping::is_canonical;
use crate::types::Study;
use log::warn;

/// Serializes canonical studies to pretty-printed JSON
pub fn studies_to_json(studies: &[Study]) -> Result<String> {
    Ok(serde_json::to_string_pretty(studies)?)
}

/// Reads studies back from JSON
///
/// Accepts either an array of studies or a single study object. Stored
/// order is kept as is; studies that are not in canonical order are
/// reported but not re-sorted.
pub fn studies_from_json(json: &str) -> Result<Vec<Study>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let studies: Vec<Study> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };

    for study in studies.iter().filter(|s| !is_canonical(s)) {
        warn!(
            "Study {} is not in canonical series/instance order",
            study.study_instance_uid
        );
    }
    Ok(studies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::{build_studies, SourcedTags};
    use crate::test_support::FixtureFile;
    use crate::types::{Laterality, ViewPosition};

    #[test]
    fn test_persisted_studies_read_back_verbatim() {
        let files = vec![
            SourcedTags::new(
                "https://files.example/b.dcm",
                FixtureFile::new("1.2", "1.2.2", "1.2.2.1")
                    .numbers(2, 1)
                    .modality("MG")
                    .series_description("R MLO")
                    .tag_map(),
            ),
            SourcedTags::new(
                "https://files.example/a.dcm",
                FixtureFile::new("1.2", "1.2.1", "1.2.1.1")
                    .numbers(1, 1)
                    .modality("MG")
                    .laterality("L")
                    .view("CC")
                    .tag_map(),
            ),
        ];
        let studies = build_studies(files);

        let json = studies_to_json(&studies).unwrap();
        assert!(json.contains("\"studyInstanceUID\": \"1.2\""));
        assert!(json.contains("\"laterality\": \"r\""));
        assert!(json.contains("\"view\": \"mlo\""));

        let restored = studies_from_json(&json).unwrap();
        assert_eq!(restored, studies);
        assert_eq!(restored[0].series[0].laterality, Laterality::Left);
        assert_eq!(restored[0].series[1].view, ViewPosition::Mlo);
    }

    #[test]
    fn test_single_study_object() {
        let json = r#"{
            "studyInstanceUID": "9.9",
            "series": [
                {"seriesInstanceUID": "9.9.1", "seriesNumber": 1,
                 "laterality": "l", "view": "cc", "instances": []}
            ]
        }"#;
        let studies = studies_from_json(json).unwrap();
        assert_eq!(studies.len(), 1);
        assert_eq!(studies[0].series[0].laterality, Laterality::Left);
    }

    #[test]
    fn test_malformed_json() {
        assert!(studies_from_json("[{\"series\": 3}]").is_err());
        assert!(studies_from_json("not json").is_err());
    }
}
