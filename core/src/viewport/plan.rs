use crate::types::{Layout, Series, SlotRect};
use serde::Serialize;

use super::assigner::{assign, SlotAssignment};
use super::selector::select_layout;

/// Layout plus slot contents for one viewing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportPlan {
    pub layout: Layout,
    pub assignment: SlotAssignment,
    /// Series of the study that no slot shows
    pub hidden_series: usize,
}

impl ViewportPlan {
    /// Whether the study has series this plan does not display
    pub fn more_series_available(&self) -> bool {
        self.hidden_series > 0
    }

    pub fn slot_count(&self) -> usize {
        self.layout.slot_count()
    }

    /// Slot geometry paired with the series UID shown there
    pub fn slots(&self) -> impl Iterator<Item = (SlotRect, Option<&str>)> {
        self.layout
            .slots()
            .iter()
            .enumerate()
            .map(|(i, rect)| (*rect, self.assignment.get(i)))
    }
}

/// Chooses the default layout for `series` and fills its slots
pub fn plan_viewports(series: &[Series]) -> ViewportPlan {
    plan_with_layout(series, select_layout(series.len()))
}

/// Fills the slots of a caller-chosen layout
pub fn plan_with_layout(series: &[Series], layout: Layout) -> ViewportPlan {
    let assignment = assign(series, layout.slot_count());
    let hidden_series = series.len().saturating_sub(assignment.occupied());
    ViewportPlan {
        layout,
        assignment,
        hidden_series,
    }
}
