use crate::extraction::tags::{TagMap, CODE_MEANING, VIEW_POSITION};
use crate::types::ViewPosition;

use super::rules::{match_rules, PatternRule, VIEW_RULES};

/// Classifies the mammographic view
///
/// ViewPosition is trusted first, then the ViewCodeSequence code meaning,
/// then the series description. As with laterality, an explicit value that
/// is not CC or MLO yields Unknown.
pub fn classify_view(
    tags: &TagMap,
    series_description: Option<&str>,
    rules: &[PatternRule<ViewPosition>],
) -> ViewPosition {
    if let Some(code) = tags.get(VIEW_POSITION) {
        return ViewPosition::from_code(code);
    }
    if let Some(meaning) = tags.get(CODE_MEANING) {
        return ViewPosition::from_code_meaning(meaning);
    }

    series_description
        .and_then(|desc| match_rules(desc, rules))
        .unwrap_or(ViewPosition::Unknown)
}

/// Classifies the view with the default description rules
pub fn extract_view_position(tags: &TagMap, series_description: Option<&str>) -> ViewPosition {
    classify_view(tags, series_description, VIEW_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("R CC", ViewPosition::Cc)]
    #[case("left mlo", ViewPosition::Mlo)]
    #[case("RMLO", ViewPosition::Mlo)]
    #[case("tomo", ViewPosition::Unknown)]
    fn test_description_heuristics(#[case] description: &str, #[case] expected: ViewPosition) {
        assert_eq!(
            extract_view_position(&TagMap::new(), Some(description)),
            expected
        );
    }

    #[test]
    fn test_explicit_view_position() {
        let tags: TagMap = [(VIEW_POSITION, "MLO")].into_iter().collect();
        assert_eq!(extract_view_position(&tags, Some("R CC")), ViewPosition::Mlo);

        let tags: TagMap = [(VIEW_POSITION, "XCCL")].into_iter().collect();
        assert_eq!(
            extract_view_position(&tags, Some("R CC")),
            ViewPosition::Unknown
        );
    }

    #[test]
    fn test_code_meaning_fallback() {
        let tags: TagMap = [(CODE_MEANING, "cranio-caudal")].into_iter().collect();
        assert_eq!(extract_view_position(&tags, Some("mlo")), ViewPosition::Cc);
    }

    #[test]
    fn test_unrecognised_code_meaning_blocks_description() {
        let tags: TagMap = [(CODE_MEANING, "exaggerated cranio-caudal")]
            .into_iter()
            .collect();
        assert_eq!(
            extract_view_position(&tags, Some("R CC")),
            ViewPosition::Unknown
        );
    }
}
