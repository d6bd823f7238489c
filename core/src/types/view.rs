use super::{Laterality, ViewPosition};
use std::fmt;

/// Mammogram view combining laterality and view position
///
/// Represents a complete mammogram view specification,
/// such as "left MLO" or "right CC".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MammogramView {
    pub laterality: Laterality,
    pub view: ViewPosition,
}

impl MammogramView {
    /// Creates a new MammogramView
    pub fn new(laterality: Laterality, view: ViewPosition) -> Self {
        Self { laterality, view }
    }

    /// Checks if both laterality and view are known
    pub fn is_complete(&self) -> bool {
        !self.laterality.is_unknown() && !self.view.is_unknown()
    }
}

impl fmt::Display for MammogramView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.laterality.simple_name(),
            self.view.simple_name()
        )
    }
}

/// Slot order for a complete four-view screening study
///
/// Right breast on the viewer's left, CC row above the MLO row.
pub const QUAD_READING_ORDER: [MammogramView; 4] = [
    MammogramView {
        laterality: Laterality::Right,
        view: ViewPosition::Cc,
    },
    MammogramView {
        laterality: Laterality::Left,
        view: ViewPosition::Cc,
    },
    MammogramView {
        laterality: Laterality::Right,
        view: ViewPosition::Mlo,
    },
    MammogramView {
        laterality: Laterality::Left,
        view: ViewPosition::Mlo,
    },
];
