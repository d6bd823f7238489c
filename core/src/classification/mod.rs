//! Laterality and view classification of a series
//!
//! Structured tags are trusted over free text; the description heuristics
//! are plain data ([`PatternRule`]) so alternative rule sets can be passed
//! to [`classify_with_rules`].

pub mod laterality;
pub mod rules;
pub mod view;

pub use laterality::{classify_laterality, extract_laterality};
pub use rules::{match_rules, Pattern, PatternRule, LATERALITY_RULES, VIEW_RULES};
pub use view::{classify_view, extract_view_position};

use crate::extraction::TagMap;
use crate::types::{Laterality, MammogramView, ViewPosition};

/// Classifies laterality and view with the default rules
///
/// Total: every input maps to a value, Unknown in the worst case.
///
/// # Example
///
/// ```
/// use studyview_core::classification::classify;
/// use studyview_core::extraction::TagMap;
/// use studyview_core::{Laterality, ViewPosition};
///
/// let view = classify(&TagMap::new(), Some("R MLO"));
/// assert_eq!(view.laterality, Laterality::Right);
/// assert_eq!(view.view, ViewPosition::Mlo);
/// ```
pub fn classify(tags: &TagMap, series_description: Option<&str>) -> MammogramView {
    classify_with_rules(tags, series_description, LATERALITY_RULES, VIEW_RULES)
}

/// Classifies with caller-supplied description rules
pub fn classify_with_rules(
    tags: &TagMap,
    series_description: Option<&str>,
    laterality_rules: &[PatternRule<Laterality>],
    view_rules: &[PatternRule<ViewPosition>],
) -> MammogramView {
    MammogramView::new(
        classify_laterality(tags, series_description, laterality_rules),
        classify_view(tags, series_description, view_rules),
    )
}
