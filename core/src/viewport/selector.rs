use crate::types::Layout;

/// Picks the default layout for a study with `series_count` series
///
/// Counts above four fall back to a single viewport showing the first
/// series; callers learn about the rest through
/// [`ViewportPlan::more_series_available`](super::ViewportPlan::more_series_available).
pub fn select_layout(series_count: usize) -> Layout {
    match series_count {
        0 | 1 => Layout::OneBig,
        2 => Layout::TwoSideBySide,
        3 => Layout::OneBigTwoSmall,
        4 => Layout::FourGrid,
        _ => Layout::OneBig,
    }
}
