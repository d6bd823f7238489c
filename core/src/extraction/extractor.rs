use crate::error::ExtractError;
use dicom_object::InMemDicomObject;

use super::tags::{
    get_string_value, TagMap, CODE_MEANING, FRAME_ANATOMY_SEQUENCE, FRAME_LATERALITY,
    REQUIRED_TAGS, SCALAR_TAGS, SHARED_FUNCTIONAL_GROUPS_SEQUENCE, VIEW_CODE_SEQUENCE,
};

const PREAMBLE_LEN: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";

/// Extracts the recognised tags from one DICOM file buffer
///
/// Accepts both the standard layout (128-byte preamble followed by `DICM`)
/// and buffers that start directly at the `DICM` magic.
///
/// # Errors
///
/// - [`ExtractError::MalformedFile`] if the buffer is not a readable DICOM file
/// - [`ExtractError::MissingRequiredTag`] if a study, series or SOP instance
///   identifier is absent
pub fn extract_tags(bytes: &[u8]) -> Result<TagMap, ExtractError> {
    let offset = locate_file_meta(bytes)?;
    let dcm = dicom_object::from_reader(&bytes[offset..])?;
    tags_from_object(&dcm)
}

/// Builds a tag map from an already-parsed DICOM object
pub fn tags_from_object(dcm: &InMemDicomObject) -> Result<TagMap, ExtractError> {
    let mut tags = TagMap::new();
    for &tag in SCALAR_TAGS {
        if let Some(value) = get_string_value(dcm, tag) {
            tags.insert(tag, value);
        }
    }

    // Nested values are flattened under their own tag
    if let Some(lat) = extract_frame_laterality(dcm) {
        tags.insert(FRAME_LATERALITY, lat);
    }
    if let Some(meaning) = extract_view_code_meaning(dcm) {
        tags.insert(CODE_MEANING, meaning);
    }

    for &(tag, keyword) in REQUIRED_TAGS {
        if !tags.contains(tag) {
            return Err(ExtractError::MissingRequiredTag(keyword));
        }
    }

    Ok(tags)
}

/// Finds where the file meta group starts
fn locate_file_meta(bytes: &[u8]) -> Result<usize, ExtractError> {
    if bytes.len() >= PREAMBLE_LEN + MAGIC.len()
        && &bytes[PREAMBLE_LEN..PREAMBLE_LEN + MAGIC.len()] == MAGIC
    {
        Ok(PREAMBLE_LEN)
    } else if bytes.starts_with(MAGIC) {
        Ok(0)
    } else {
        Err(ExtractError::MalformedFile(format!(
            "no DICM magic found in {} byte buffer",
            bytes.len()
        )))
    }
}

/// Extracts FrameLaterality from SharedFunctionalGroupsSequence
///
/// Navigates: SharedFunctionalGroupsSequence[0] → FrameAnatomySequence[0] → FrameLaterality
fn extract_frame_laterality(dcm: &InMemDicomObject) -> Option<String> {
    dcm.element(SHARED_FUNCTIONAL_GROUPS_SEQUENCE)
        .ok()
        .and_then(|shared_seq| shared_seq.items())
        .and_then(|items| items.first())
        .and_then(|first_item| first_item.element(FRAME_ANATOMY_SEQUENCE).ok())
        .and_then(|frame_anatomy_seq| frame_anatomy_seq.items())
        .and_then(|items| items.first())
        .and_then(|first_item| get_string_value(first_item, FRAME_LATERALITY))
}

/// Extracts the first non-empty CodeMeaning of ViewCodeSequence
fn extract_view_code_meaning(dcm: &InMemDicomObject) -> Option<String> {
    dcm.element(VIEW_CODE_SEQUENCE)
        .ok()
        .and_then(|seq_elem| seq_elem.items())
        .and_then(|items| {
            items
                .iter()
                .find_map(|item| get_string_value(item, CODE_MEANING))
        })
}
