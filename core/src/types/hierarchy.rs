use super::{Laterality, MammogramView, ViewPosition};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a stored series/instance number, mapping `null` to 0
fn number_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

/// One image file within a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Intra-series sort key; not guaranteed unique or contiguous
    #[serde(rename = "instanceNumber", default, deserialize_with = "number_or_zero")]
    pub instance_number: i32,

    /// SOP Instance UID
    #[serde(rename = "instanceUID")]
    pub instance_uid: String,

    /// Reference to the raw file (URL or path); never dereferenced here
    #[serde(rename = "url")]
    pub source_location: String,
}

/// One acquisition within a study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "seriesInstanceUID")]
    pub series_instance_uid: String,

    /// Sort key within the study; not guaranteed unique
    #[serde(rename = "seriesNumber", default, deserialize_with = "number_or_zero")]
    pub series_number: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,

    #[serde(default, skip_serializing_if = "Laterality::is_unknown")]
    pub laterality: Laterality,

    #[serde(default, skip_serializing_if = "ViewPosition::is_unknown")]
    pub view: ViewPosition,

    #[serde(default)]
    pub instances: Vec<Instance>,
}

impl Series {
    /// Checks whether this is a mammography series (modality `MG`, any case)
    pub fn is_mammography(&self) -> bool {
        self.modality
            .as_deref()
            .map(|m| m.trim().eq_ignore_ascii_case("MG"))
            .unwrap_or(false)
    }

    /// Returns the laterality/view pair of this series
    pub fn mammogram_view(&self) -> MammogramView {
        MammogramView::new(self.laterality, self.view)
    }
}

/// One imaging encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    #[serde(rename = "studyInstanceUID")]
    pub study_instance_uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub series: Vec<Series>,
}

impl Study {
    /// Total number of instances across all series
    pub fn instance_count(&self) -> usize {
        self.series.iter().map(|s| s.instances.len()).sum()
    }

    /// Looks up a series by UID
    pub fn find_series(&self, series_instance_uid: &str) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| s.series_instance_uid == series_instance_uid)
    }
}
