//! Hierarchy reconstruction: grouping followed by stable sorting

mod grouper;
pub mod ordered_map;
mod sorter;

pub use grouper::{group_files, SourcedTags};
pub use ordered_map::OrderedMap;
pub use sorter::{canonicalize_study, is_canonical, sort_studies};

use crate::types::Study;

/// Groups files and sorts the result into canonical studies
///
/// # Example
///
/// ```
/// use studyview_core::extraction::{TagMap, SERIES_INSTANCE_UID, SOP_INSTANCE_UID, STUDY_INSTANCE_UID, INSTANCE_NUMBER};
/// use studyview_core::grouping::{build_studies, SourcedTags};
///
/// let file = |sop: &str, number: &str| {
///     let tags: TagMap = [
///         (STUDY_INSTANCE_UID, "1.2"),
///         (SERIES_INSTANCE_UID, "1.2.1"),
///         (SOP_INSTANCE_UID, sop),
///         (INSTANCE_NUMBER, number),
///     ]
///     .into_iter()
///     .collect();
///     SourcedTags::new(format!("https://files.example/{sop}.dcm"), tags)
/// };
///
/// let studies = build_studies(vec![file("1.2.1.2", "2"), file("1.2.1.1", "1")]);
/// let instances = &studies[0].series[0].instances;
/// assert_eq!(instances[0].instance_uid, "1.2.1.1");
/// assert_eq!(instances[1].instance_uid, "1.2.1.2");
/// ```
pub fn build_studies<I>(files: I) -> Vec<Study>
where
    I: IntoIterator<Item = SourcedTags>,
{
    sort_studies(group_files(files))
}
