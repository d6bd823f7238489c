use crate::error::StudyviewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of one viewport slot on a layout grid
///
/// Row/column indices are zero-based; spans are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotRect {
    pub row: u8,
    pub col: u8,
    pub row_span: u8,
    pub col_span: u8,
}

impl SlotRect {
    const fn cell(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    const fn spanning(row: u8, col: u8, row_span: u8, col_span: u8) -> Self {
        Self {
            row,
            col,
            row_span,
            col_span,
        }
    }
}

/// Named on-screen viewport arrangement
///
/// Slots are listed in reading order; slot `i` of a
/// [`SlotAssignment`](crate::viewport::SlotAssignment) goes to `slots()[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    #[serde(alias = "1_big")]
    OneBig,
    #[serde(alias = "2_side_by_side")]
    TwoSideBySide,
    #[serde(alias = "2_top_to_bottom")]
    TwoTopBottom,
    #[serde(alias = "3_side_by_side")]
    ThreeSideBySide,
    #[serde(alias = "3_top_to_bottom")]
    ThreeTopBottom,
    #[serde(alias = "1_big_2_small")]
    OneBigTwoSmall,
    #[serde(alias = "2_small_1_big")]
    TwoSmallOneBig,
    #[serde(alias = "1_big_top_2_small_bottom")]
    OneBigTopTwoSmallBottom,
    #[serde(alias = "2_small_top_1_big_bottom")]
    TwoSmallTopOneBigBottom,
    #[serde(alias = "4_2x2")]
    FourGrid,
}

const ONE_BIG: &[SlotRect] = &[SlotRect::cell(0, 0)];
const TWO_SIDE_BY_SIDE: &[SlotRect] = &[SlotRect::cell(0, 0), SlotRect::cell(0, 1)];
const TWO_TOP_BOTTOM: &[SlotRect] = &[SlotRect::cell(0, 0), SlotRect::cell(1, 0)];
const THREE_SIDE_BY_SIDE: &[SlotRect] = &[
    SlotRect::cell(0, 0),
    SlotRect::cell(0, 1),
    SlotRect::cell(0, 2),
];
const THREE_TOP_BOTTOM: &[SlotRect] = &[
    SlotRect::cell(0, 0),
    SlotRect::cell(1, 0),
    SlotRect::cell(2, 0),
];
const ONE_BIG_TWO_SMALL: &[SlotRect] = &[
    SlotRect::spanning(0, 0, 2, 1),
    SlotRect::cell(0, 1),
    SlotRect::cell(1, 1),
];
const TWO_SMALL_ONE_BIG: &[SlotRect] = &[
    SlotRect::cell(0, 0),
    SlotRect::cell(1, 0),
    SlotRect::spanning(0, 1, 2, 1),
];
const ONE_BIG_TOP_TWO_SMALL_BOTTOM: &[SlotRect] = &[
    SlotRect::spanning(0, 0, 1, 2),
    SlotRect::cell(1, 0),
    SlotRect::cell(1, 1),
];
const TWO_SMALL_TOP_ONE_BIG_BOTTOM: &[SlotRect] = &[
    SlotRect::cell(0, 0),
    SlotRect::cell(0, 1),
    SlotRect::spanning(1, 0, 1, 2),
];
const FOUR_GRID: &[SlotRect] = &[
    SlotRect::cell(0, 0),
    SlotRect::cell(0, 1),
    SlotRect::cell(1, 0),
    SlotRect::cell(1, 1),
];

impl Layout {
    /// Every layout, in menu order
    pub const ALL: [Layout; 10] = [
        Layout::OneBig,
        Layout::TwoSideBySide,
        Layout::TwoTopBottom,
        Layout::ThreeSideBySide,
        Layout::ThreeTopBottom,
        Layout::OneBigTwoSmall,
        Layout::TwoSmallOneBig,
        Layout::OneBigTopTwoSmallBottom,
        Layout::TwoSmallTopOneBigBottom,
        Layout::FourGrid,
    ];

    /// Canonical layout name
    pub fn name(&self) -> &'static str {
        match self {
            Layout::OneBig => "one_big",
            Layout::TwoSideBySide => "two_side_by_side",
            Layout::TwoTopBottom => "two_top_bottom",
            Layout::ThreeSideBySide => "three_side_by_side",
            Layout::ThreeTopBottom => "three_top_bottom",
            Layout::OneBigTwoSmall => "one_big_two_small",
            Layout::TwoSmallOneBig => "two_small_one_big",
            Layout::OneBigTopTwoSmallBottom => "one_big_top_two_small_bottom",
            Layout::TwoSmallTopOneBigBottom => "two_small_top_one_big_bottom",
            Layout::FourGrid => "four_grid",
        }
    }

    /// Name used by the legacy web viewer
    pub fn legacy_name(&self) -> &'static str {
        match self {
            Layout::OneBig => "1_big",
            Layout::TwoSideBySide => "2_side_by_side",
            Layout::TwoTopBottom => "2_top_to_bottom",
            Layout::ThreeSideBySide => "3_side_by_side",
            Layout::ThreeTopBottom => "3_top_to_bottom",
            Layout::OneBigTwoSmall => "1_big_2_small",
            Layout::TwoSmallOneBig => "2_small_1_big",
            Layout::OneBigTopTwoSmallBottom => "1_big_top_2_small_bottom",
            Layout::TwoSmallTopOneBigBottom => "2_small_top_1_big_bottom",
            Layout::FourGrid => "4_2x2",
        }
    }

    /// Slot geometry in reading order
    pub fn slots(&self) -> &'static [SlotRect] {
        match self {
            Layout::OneBig => ONE_BIG,
            Layout::TwoSideBySide => TWO_SIDE_BY_SIDE,
            Layout::TwoTopBottom => TWO_TOP_BOTTOM,
            Layout::ThreeSideBySide => THREE_SIDE_BY_SIDE,
            Layout::ThreeTopBottom => THREE_TOP_BOTTOM,
            Layout::OneBigTwoSmall => ONE_BIG_TWO_SMALL,
            Layout::TwoSmallOneBig => TWO_SMALL_ONE_BIG,
            Layout::OneBigTopTwoSmallBottom => ONE_BIG_TOP_TWO_SMALL_BOTTOM,
            Layout::TwoSmallTopOneBigBottom => TWO_SMALL_TOP_ONE_BIG_BOTTOM,
            Layout::FourGrid => FOUR_GRID,
        }
    }

    /// Number of viewport slots (1 to 4)
    pub fn slot_count(&self) -> usize {
        self.slots().len()
    }

    /// Grid dimensions as (rows, columns)
    pub fn grid(&self) -> (u8, u8) {
        self.slots().iter().fold((0, 0), |(rows, cols), slot| {
            (
                rows.max(slot.row + slot.row_span),
                cols.max(slot.col + slot.col_span),
            )
        })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Layout {
    type Err = StudyviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.trim().to_lowercase();
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name() == s_lower || layout.legacy_name() == s_lower)
            .ok_or_else(|| StudyviewError::UnknownLayout(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Layout::OneBig, 1, (1, 1))]
    #[case(Layout::TwoSideBySide, 2, (1, 2))]
    #[case(Layout::TwoTopBottom, 2, (2, 1))]
    #[case(Layout::ThreeSideBySide, 3, (1, 3))]
    #[case(Layout::ThreeTopBottom, 3, (3, 1))]
    #[case(Layout::OneBigTwoSmall, 3, (2, 2))]
    #[case(Layout::TwoSmallOneBig, 3, (2, 2))]
    #[case(Layout::OneBigTopTwoSmallBottom, 3, (2, 2))]
    #[case(Layout::TwoSmallTopOneBigBottom, 3, (2, 2))]
    #[case(Layout::FourGrid, 4, (2, 2))]
    fn test_slot_count_and_grid(
        #[case] layout: Layout,
        #[case] slots: usize,
        #[case] grid: (u8, u8),
    ) {
        assert_eq!(layout.slot_count(), slots);
        assert_eq!(layout.grid(), grid);
    }

    #[test]
    fn test_slots_cover_grid_without_overlap() {
        for layout in Layout::ALL {
            let (rows, cols) = layout.grid();
            let mut covered = vec![0u8; rows as usize * cols as usize];
            for slot in layout.slots() {
                for r in slot.row..slot.row + slot.row_span {
                    for c in slot.col..slot.col + slot.col_span {
                        covered[r as usize * cols as usize + c as usize] += 1;
                    }
                }
            }
            assert!(covered.iter().all(|&n| n == 1), "{layout} overlaps or leaves gaps");
        }
    }

    #[test]
    fn test_parse_names() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>().unwrap(), layout);
            assert_eq!(layout.legacy_name().parse::<Layout>().unwrap(), layout);
        }
        assert!("five_grid".parse::<Layout>().is_err());
    }

    #[test]
    fn test_serde_names_and_aliases() {
        assert_eq!(
            serde_json::to_string(&Layout::OneBigTwoSmall).unwrap(),
            "\"one_big_two_small\""
        );
        let legacy: Layout = serde_json::from_str("\"4_2x2\"").unwrap();
        assert_eq!(legacy, Layout::FourGrid);
    }
}
