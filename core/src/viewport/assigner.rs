use crate::types::{Laterality, Series, QUAD_READING_ORDER};
use log::debug;
use serde::{Deserialize, Serialize};

/// Series shown in each viewport slot, in slot order
///
/// Serializes as an array of series UIDs with `null` for empty slots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotAssignment(Vec<Option<String>>);

impl SlotAssignment {
    /// Builds an assignment of exactly `slot_count` slots, padding with empties
    fn padded<I>(uids: I, slot_count: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut slots: Vec<Option<String>> = uids.into_iter().take(slot_count).map(Some).collect();
        slots.resize(slot_count, None);
        Self(slots)
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Series UID in slot `index`, if that slot is filled
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(|slot| slot.as_deref())
    }

    /// Number of filled slots
    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn into_inner(self) -> Vec<Option<String>> {
        self.0
    }
}

/// Assigns series to viewport slots
///
/// Series are expected in canonical order. By default the first
/// `slot_count` series fill the slots in order. When the layout has 2 or 4
/// slots and the study contains mammography, two arrangements take
/// precedence:
///
/// - complete quad (4 slots, exactly four MG series covering right/left ×
///   CC/MLO): `[R-CC, L-CC, R-MLO, L-MLO]`
/// - opposing pair (exactly two MG series, one right and one left): right
///   then left, with up to two non-MG series after them on a 4-slot layout
///
/// Anything ambiguous (duplicate views, three MG series, unknown sides)
/// falls back to the positional rule. Never fails; missing series leave
/// trailing slots empty.
///
/// # Example
///
/// ```
/// use studyview_core::viewport::assign;
/// use studyview_core::{Laterality, Series, ViewPosition};
///
/// let mg = |uid: &str, number: i32, laterality| Series {
///     series_instance_uid: uid.to_string(),
///     series_number: number,
///     description: None,
///     modality: Some("MG".to_string()),
///     laterality,
///     view: ViewPosition::Cc,
///     instances: vec![],
/// };
///
/// let series = vec![mg("left", 1, Laterality::Left), mg("right", 2, Laterality::Right)];
/// let assignment = assign(&series, 2);
/// assert_eq!(assignment.get(0), Some("right"));
/// assert_eq!(assignment.get(1), Some("left"));
/// ```
pub fn assign(series: &[Series], slot_count: usize) -> SlotAssignment {
    if matches!(slot_count, 2 | 4) && series.iter().any(Series::is_mammography) {
        if let Some(assignment) = assign_mammography(series, slot_count) {
            return assignment;
        }
        debug!("No mammography arrangement matched, assigning positionally");
    }
    assign_positional(series, slot_count)
}

/// First `slot_count` series in order
pub fn assign_positional(series: &[Series], slot_count: usize) -> SlotAssignment {
    SlotAssignment::padded(
        series.iter().map(|s| s.series_instance_uid.clone()),
        slot_count,
    )
}

fn assign_mammography(series: &[Series], slot_count: usize) -> Option<SlotAssignment> {
    let (mg, other): (Vec<&Series>, Vec<&Series>) =
        series.iter().partition(|s| s.is_mammography());

    if slot_count == 4 {
        if let Some(quad) = complete_quad(&mg) {
            return Some(SlotAssignment::padded(quad, slot_count));
        }
    }

    let (right, left) = opposing_pair(&mg)?;
    let mut uids = vec![right, left];
    if slot_count == 4 {
        uids.extend(
            other
                .iter()
                .take(2)
                .map(|s| s.series_instance_uid.clone()),
        );
    }
    Some(SlotAssignment::padded(uids, slot_count))
}

/// UIDs in quad reading order if `mg` is exactly the four standard views
fn complete_quad(mg: &[&Series]) -> Option<Vec<String>> {
    if mg.len() != 4 {
        return None;
    }
    // Four series each matching a distinct view cannot contain duplicates
    QUAD_READING_ORDER
        .iter()
        .map(|target| {
            mg.iter()
                .find(|s| s.mammogram_view() == *target)
                .map(|s| s.series_instance_uid.clone())
        })
        .collect()
}

/// (right UID, left UID) if `mg` is exactly one right and one left series
fn opposing_pair(mg: &[&Series]) -> Option<(String, String)> {
    if mg.len() != 2 {
        return None;
    }
    let find = |laterality: Laterality| {
        mg.iter()
            .find(|s| s.laterality == laterality)
            .map(|s| s.series_instance_uid.clone())
    };
    Some((find(Laterality::Right)?, find(Laterality::Left)?))
}
