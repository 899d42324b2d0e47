//! This module contains the in-memory representation of a decoded DICOM file.

use crate::meta::FileMetaTable;
use crate::{
    AccessByNameError, AccessError, NoSuchAttributeNameSnafu, NoSuchDataElementTagSnafu,
    UnknownAttributeNameSnafu,
};
use dcm_core::dictionary::{DataDictionary, DictionaryEntry};
use dcm_core::{DataElement, Header, Tag};
use dcm_dictionary_std::StandardDataDictionary;
use snafu::OptionExt;

/// A decoded DICOM file, fully contained in memory.
///
/// The elements are kept in the order in which they were read,
/// starting with the elements of the file meta group.
#[derive(Debug, Clone)]
pub struct DicomFile<D = StandardDataDictionary> {
    /// the elements in wire order
    elements: Vec<DataElement>,
    /// the file meta table, if the meta group was read
    meta: Option<FileMetaTable>,
    /// the data dictionary
    dict: D,
}

impl<D> PartialEq for DicomFile<D> {
    // This implementation ignores the data dictionary.
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements && self.meta == other.meta
    }
}

impl<D> DicomFile<D> {
    pub(crate) fn from_parts(elements: Vec<DataElement>, meta: Option<FileMetaTable>, dict: D) -> Self {
        DicomFile {
            elements,
            meta,
            dict,
        }
    }

    /// Retrieve the processed meta information table.
    ///
    /// This is always available in a file returned by
    /// [`parse`](crate::parse),
    /// but may be missing from a partially decoded file.
    pub fn meta(&self) -> Option<&FileMetaTable> {
        self.meta.as_ref()
    }

    /// All elements of the file in wire order,
    /// file meta group included.
    pub fn elements(&self) -> &[DataElement] {
        &self.elements
    }

    /// Take the elements of the file.
    pub fn into_elements(self) -> Vec<DataElement> {
        self.elements
    }

    /// The number of elements at the root of the file.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no elements were read at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the root elements in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, DataElement> {
        self.elements.iter()
    }

    /// The data dictionary used to decode this file.
    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    /// Retrieve the first DICOM element with the given tag.
    pub fn element(&self, tag: Tag) -> Result<&DataElement, AccessError> {
        find_element_by_tag(&self.elements, tag)
    }
}

impl<D> DicomFile<D>
where
    D: DataDictionary,
{
    /// Retrieve the first DICOM element with the given attribute name,
    /// as resolved by the file's data dictionary.
    pub fn element_by_name(&self, name: &str) -> Result<&DataElement, AccessByNameError> {
        find_element_by_name_with(&self.dict, &self.elements, name)
    }
}

impl<'a, D> IntoIterator for &'a DicomFile<D> {
    type Item = &'a DataElement;
    type IntoIter = std::slice::Iter<'a, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Find the first element with the given tag.
///
/// Only the given elements are searched,
/// not the contents of sequences.
pub fn find_element_by_tag(elements: &[DataElement], tag: Tag) -> Result<&DataElement, AccessError> {
    elements
        .iter()
        .find(|e| e.tag() == tag)
        .context(NoSuchDataElementTagSnafu { tag })
}

/// Find the first element with the given attribute name,
/// such as `"PatientName"`,
/// using the standard data dictionary.
pub fn find_element_by_name<'a>(
    elements: &'a [DataElement],
    name: &str,
) -> Result<&'a DataElement, AccessByNameError> {
    find_element_by_name_with(&StandardDataDictionary, elements, name)
}

/// Find the first element with the given attribute name,
/// using the given data dictionary.
pub fn find_element_by_name_with<'a, D>(
    dict: &D,
    elements: &'a [DataElement],
    name: &str,
) -> Result<&'a DataElement, AccessByNameError>
where
    D: DataDictionary,
{
    let tag = dict
        .by_name(name)
        .map(|entry| entry.tag())
        .context(UnknownAttributeNameSnafu { name })?;
    elements
        .iter()
        .find(|e| e.tag() == tag)
        .context(NoSuchAttributeNameSnafu { name, tag })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcm_core::{DataElementHeader, Length, Value, VR};
    use dcm_dictionary_std::tags;

    fn text(tag: Tag, vr: VR, value: &str) -> DataElement {
        DataElement::new(
            DataElementHeader::new(tag, vr, Length(value.len() as u32)),
            Value::strs(vec![value]),
        )
    }

    fn sample() -> Vec<DataElement> {
        vec![
            text(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3"),
            text(tags::PATIENT_NAME, VR::PN, "Doe^John"),
            text(tags::PATIENT_NAME, VR::PN, "Doe^Jane"),
        ]
    }

    #[test]
    fn lookup_by_tag_takes_first_match() {
        let elements = sample();
        let elem = find_element_by_tag(&elements, tags::PATIENT_NAME).unwrap();
        assert_eq!(elem.to_str().unwrap(), "Doe^John");

        let err = find_element_by_tag(&elements, tags::ROWS).unwrap_err();
        assert_eq!(err.to_string(), "No such data element with tag (0028,0010)");
    }

    #[test]
    fn lookup_by_name() {
        let elements = sample();
        let elem = find_element_by_name(&elements, "SOPInstanceUID").unwrap();
        assert_eq!(elem.to_str().unwrap(), "1.2.3");

        assert!(matches!(
            find_element_by_name(&elements, "Rows"),
            Err(AccessByNameError::NoSuchAttributeName { tag: Tag(0x0028, 0x0010), .. })
        ));
        assert!(matches!(
            find_element_by_name(&elements, "NotAnAttribute"),
            Err(AccessByNameError::UnknownAttributeName { .. })
        ));
    }

    #[test]
    fn file_lookups() {
        let file = DicomFile::from_parts(sample(), None, StandardDataDictionary);
        assert_eq!(file.len(), 3);
        assert!(file.meta().is_none());
        assert_eq!(
            file.element_by_name("PatientName").unwrap().to_str().unwrap(),
            "Doe^John"
        );
        assert_eq!(file.element(tags::SOP_INSTANCE_UID).unwrap().vr(), VR::UI);
        assert_eq!(file.iter().count(), 3);
    }
}
