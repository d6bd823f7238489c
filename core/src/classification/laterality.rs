use crate::extraction::tags::{TagMap, FRAME_LATERALITY, IMAGE_LATERALITY, LATERALITY};
use crate::types::Laterality;
use dicom_core::Tag;

use super::rules::{match_rules, PatternRule, LATERALITY_RULES};

/// Explicit laterality tags, in precedence order
const EXPLICIT_TAGS: [Tag; 3] = [IMAGE_LATERALITY, LATERALITY, FRAME_LATERALITY];

/// Classifies breast laterality
///
/// # Algorithm
///
/// 1. The first non-empty explicit tag (ImageLaterality, Laterality,
///    FrameLaterality) decides: "r"/"l" map to Right/Left, anything else is
///    Unknown without consulting the description
/// 2. Otherwise the series description is matched against `rules`
/// 3. Otherwise Unknown
pub fn classify_laterality(
    tags: &TagMap,
    series_description: Option<&str>,
    rules: &[PatternRule<Laterality>],
) -> Laterality {
    if let Some(code) = EXPLICIT_TAGS.iter().find_map(|&tag| tags.get(tag)) {
        return Laterality::from_code(code);
    }

    series_description
        .and_then(|desc| match_rules(desc, rules))
        .unwrap_or(Laterality::Unknown)
}

/// Classifies laterality with the default description rules
pub fn extract_laterality(tags: &TagMap, series_description: Option<&str>) -> Laterality {
    classify_laterality(tags, series_description, LATERALITY_RULES)
}
