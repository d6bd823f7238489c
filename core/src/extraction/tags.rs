use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

// Study/Series/Instance Identification Tags
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

// Description Tags
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

// Laterality Tags
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
pub const FRAME_LATERALITY: Tag = Tag(0x0020, 0x9072);
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);

// View Position Tags
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);

/// Top-level scalar tags copied into a [`TagMap`]
pub const SCALAR_TAGS: &[Tag] = &[
    STUDY_INSTANCE_UID,
    SERIES_INSTANCE_UID,
    SOP_INSTANCE_UID,
    SERIES_NUMBER,
    INSTANCE_NUMBER,
    STUDY_DESCRIPTION,
    SERIES_DESCRIPTION,
    MODALITY,
    IMAGE_LATERALITY,
    LATERALITY,
    VIEW_POSITION,
];

/// Identifier tags every usable file must carry, with their keywords
pub const REQUIRED_TAGS: &[(Tag, &str)] = &[
    (STUDY_INSTANCE_UID, "StudyInstanceUID"),
    (SERIES_INSTANCE_UID, "SeriesInstanceUID"),
    (SOP_INSTANCE_UID, "SOPInstanceUID"),
];

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present, cannot be converted to string,
/// or holds only whitespace/NUL padding
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| clean_value(&s))
        .filter(|s| !s.is_empty())
}

/// Strips surrounding whitespace and NUL padding
pub fn clean_value(s: &str) -> String {
    s.trim_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_string()
}

/// Parses the leading integer of an IS-style value
///
/// `" 12"`, `"+3"` and `"7.0"` give 12, 3 and 7; values without a leading
/// integer give `None`.
pub fn parse_leading_int(s: &str) -> Option<i32> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(r"^\s*([-+]?\d+)").expect("Failed to compile regex"));
    re.captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().trim_start_matches('+').parse::<i32>().ok())
}

/// Flat map of recognised tags to their cleaned string values
///
/// Empty values are never stored, so `get` returning `Some` always means a
/// non-empty value was present in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    values: BTreeMap<Tag, String>,
}

impl TagMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value; blank values are ignored
    pub fn insert(&mut self, tag: Tag, value: impl AsRef<str>) {
        let value = clean_value(value.as_ref());
        if !value.is_empty() {
            self.values.insert(tag, value);
        }
    }

    /// Returns the string value of a tag
    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.values.get(&tag).map(String::as_str)
    }

    /// Returns the leading integer of a tag value
    pub fn get_int(&self, tag: Tag) -> Option<i32> {
        self.get(tag).and_then(parse_leading_int)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.values.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in tag order
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &str)> {
        self.values.iter().map(|(tag, value)| (*tag, value.as_str()))
    }

    pub fn study_instance_uid(&self) -> Option<&str> {
        self.get(STUDY_INSTANCE_UID)
    }

    pub fn series_instance_uid(&self) -> Option<&str> {
        self.get(SERIES_INSTANCE_UID)
    }

    pub fn sop_instance_uid(&self) -> Option<&str> {
        self.get(SOP_INSTANCE_UID)
    }

    /// Series number, 0 when absent or unparsable
    pub fn series_number(&self) -> i32 {
        self.get_int(SERIES_NUMBER).unwrap_or(0)
    }

    /// Instance number, 0 when absent or unparsable
    pub fn instance_number(&self) -> i32 {
        self.get_int(INSTANCE_NUMBER).unwrap_or(0)
    }

    pub fn study_description(&self) -> Option<&str> {
        self.get(STUDY_DESCRIPTION)
    }

    pub fn series_description(&self) -> Option<&str> {
        self.get(SERIES_DESCRIPTION)
    }

    pub fn modality(&self) -> Option<&str> {
        self.get(MODALITY)
    }
}

impl<S: AsRef<str>> FromIterator<(Tag, S)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (Tag, S)>>(iter: I) -> Self {
        let mut map = TagMap::new();
        for (tag, value) in iter {
            map.insert(tag, value);
        }
        map
    }
}
