//! In-memory DICOM fixtures shared by unit tests

use crate::extraction::tags::{
    IMAGE_LATERALITY, INSTANCE_NUMBER, MODALITY, SERIES_DESCRIPTION, SERIES_INSTANCE_UID,
    SERIES_NUMBER, SOP_INSTANCE_UID, STUDY_DESCRIPTION, STUDY_INSTANCE_UID, VIEW_POSITION,
};
use crate::extraction::TagMap;
use dicom_core::value::PrimitiveValue;
use dicom_core::{DataElement, Tag, VR};
use dicom_dictionary_std::uids;
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};

const MAMMOGRAPHY_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.2";

/// Header fields of one fixture file
#[derive(Debug, Clone, Default)]
pub(crate) struct FixtureFile {
    pub study_uid: String,
    pub series_uid: String,
    pub sop_uid: String,
    pub series_number: Option<i32>,
    pub instance_number: Option<i32>,
    pub modality: Option<String>,
    pub laterality: Option<String>,
    pub view: Option<String>,
    pub study_description: Option<String>,
    pub series_description: Option<String>,
}

impl FixtureFile {
    pub fn new(study_uid: &str, series_uid: &str, sop_uid: &str) -> Self {
        Self {
            study_uid: study_uid.to_string(),
            series_uid: series_uid.to_string(),
            sop_uid: sop_uid.to_string(),
            ..Default::default()
        }
    }

    pub fn numbers(mut self, series_number: i32, instance_number: i32) -> Self {
        self.series_number = Some(series_number);
        self.instance_number = Some(instance_number);
        self
    }

    pub fn modality(mut self, modality: &str) -> Self {
        self.modality = Some(modality.to_string());
        self
    }

    pub fn laterality(mut self, laterality: &str) -> Self {
        self.laterality = Some(laterality.to_string());
        self
    }

    pub fn view(mut self, view: &str) -> Self {
        self.view = Some(view.to_string());
        self
    }

    pub fn study_description(mut self, description: &str) -> Self {
        self.study_description = Some(description.to_string());
        self
    }

    pub fn series_description(mut self, description: &str) -> Self {
        self.series_description = Some(description.to_string());
        self
    }

    /// Tag/value pairs as they would appear in the file
    fn entries(&self) -> Vec<(Tag, VR, String)> {
        let mut entries = vec![
            (STUDY_INSTANCE_UID, VR::UI, self.study_uid.clone()),
            (SERIES_INSTANCE_UID, VR::UI, self.series_uid.clone()),
            (SOP_INSTANCE_UID, VR::UI, self.sop_uid.clone()),
        ];
        let optional = [
            (SERIES_NUMBER, VR::IS, self.series_number.map(|n| n.to_string())),
            (INSTANCE_NUMBER, VR::IS, self.instance_number.map(|n| n.to_string())),
            (MODALITY, VR::CS, self.modality.clone()),
            (IMAGE_LATERALITY, VR::CS, self.laterality.clone()),
            (VIEW_POSITION, VR::CS, self.view.clone()),
            (STUDY_DESCRIPTION, VR::LO, self.study_description.clone()),
            (SERIES_DESCRIPTION, VR::LO, self.series_description.clone()),
        ];
        entries.extend(
            optional
                .into_iter()
                .filter_map(|(tag, vr, value)| value.map(|v| (tag, vr, v))),
        );
        entries
    }

    /// The tag map extraction is expected to produce
    pub fn tag_map(&self) -> TagMap {
        self.entries()
            .into_iter()
            .map(|(tag, _, value)| (tag, value))
            .collect()
    }
}

/// Encodes a fixture as a complete DICOM file (preamble, magic, meta group)
pub(crate) fn dicom_bytes(fixture: &FixtureFile) -> Vec<u8> {
    let obj = InMemDicomObject::from_element_iter(
        fixture
            .entries()
            .into_iter()
            .map(|(tag, vr, value)| DataElement::new(tag, vr, PrimitiveValue::from(value))),
    );
    let file = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(MAMMOGRAPHY_FOR_PRESENTATION)
                .media_storage_sop_instance_uid(fixture.sop_uid.as_str()),
        )
        .expect("fixture file meta should be valid");

    let mut buffer = Vec::new();
    file.write_all(&mut buffer)
        .expect("fixture should encode");
    buffer
}
