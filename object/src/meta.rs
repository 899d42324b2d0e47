//! Module containing data structures and readers of DICOM file meta information tables.
use crate::{MissingElementSnafu, Result, UnexpectedElementValueSnafu};
use dcm_core::dictionary::DataDictionary;
use dcm_core::{DataElement, Header, Tag};
use dcm_dictionary_std::tags;
use dcm_parser::{DataSetReader, ReadResult, StatefulDecoder};
use snafu::{OptionExt, ResultExt};
use std::io::Read;
use tracing::{debug, warn};

/// The magic code following the preamble of a DICOM file.
pub const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// DICOM File Meta Information Table.
///
/// This data type contains the relevant parts of the file meta information table, as
/// specified in [1].
/// Only the transfer syntax and the group length are required
/// for the rest of the file to be decoded.
///
/// [1]: http://dicom.nema.org/medical/dicom/current/output/chtml/part06/chapter_7.html
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: Option<[u8; 2]>,
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: Option<String>,

    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
    /// Sending Application Entity Title
    pub sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title
    pub receiving_application_entity_title: Option<String>,
    /// Private Information Creator UID
    pub private_information_creator_uid: Option<String>,
    /// Private Information
    pub private_information: Option<Vec<u8>>,
}

fn find(elements: &[DataElement], tag: Tag) -> Option<&DataElement> {
    elements.iter().find(|e| e.tag() == tag)
}

fn required_str(elements: &[DataElement], tag: Tag, alias: &'static str) -> Result<String> {
    let elem = find(elements, tag).context(MissingElementSnafu { alias })?;
    elem.to_str().context(UnexpectedElementValueSnafu { alias })
}

fn optional_str(elements: &[DataElement], tag: Tag, alias: &'static str) -> Result<Option<String>> {
    find(elements, tag)
        .map(|elem| elem.to_str().context(UnexpectedElementValueSnafu { alias }))
        .transpose()
}

impl FileMetaTable {
    /// Build the table from the data elements of a file meta group.
    ///
    /// The first element with each tag is used.
    /// Fails if the group length or the transfer syntax UID are missing,
    /// or if an element holds a value of an unexpected kind.
    pub fn from_elements(elements: &[DataElement]) -> Result<Self> {
        let alias = "FileMetaInformationGroupLength";
        let information_group_length = find(elements, tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .context(MissingElementSnafu { alias })?
            .uint32()
            .context(UnexpectedElementValueSnafu { alias })?;

        let information_version = match find(elements, tags::FILE_META_INFORMATION_VERSION) {
            Some(elem) => {
                let alias = "FileMetaInformationVersion";
                let bytes = elem.bytes().context(UnexpectedElementValueSnafu { alias })?;
                match bytes {
                    [a, b] => Some([*a, *b]),
                    _ => {
                        warn!("File meta information version has {} bytes, ignoring", bytes.len());
                        None
                    }
                }
            }
            None => None,
        };

        let private_information = match find(elements, tags::PRIVATE_INFORMATION) {
            Some(elem) => Some(
                elem.bytes()
                    .context(UnexpectedElementValueSnafu {
                        alias: "PrivateInformation",
                    })?
                    .to_vec(),
            ),
            None => None,
        };

        Ok(FileMetaTable {
            information_group_length,
            information_version,
            media_storage_sop_class_uid: optional_str(
                elements,
                tags::MEDIA_STORAGE_SOP_CLASS_UID,
                "MediaStorageSOPClassUID",
            )?,
            media_storage_sop_instance_uid: optional_str(
                elements,
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
                "MediaStorageSOPInstanceUID",
            )?,
            transfer_syntax: required_str(elements, tags::TRANSFER_SYNTAX_UID, "TransferSyntaxUID")?,
            implementation_class_uid: optional_str(
                elements,
                tags::IMPLEMENTATION_CLASS_UID,
                "ImplementationClassUID",
            )?,
            implementation_version_name: optional_str(
                elements,
                tags::IMPLEMENTATION_VERSION_NAME,
                "ImplementationVersionName",
            )?,
            source_application_entity_title: optional_str(
                elements,
                tags::SOURCE_APPLICATION_ENTITY_TITLE,
                "SourceApplicationEntityTitle",
            )?,
            sending_application_entity_title: optional_str(
                elements,
                tags::SENDING_APPLICATION_ENTITY_TITLE,
                "SendingApplicationEntityTitle",
            )?,
            receiving_application_entity_title: optional_str(
                elements,
                tags::RECEIVING_APPLICATION_ENTITY_TITLE,
                "ReceivingApplicationEntityTitle",
            )?,
            private_information_creator_uid: optional_str(
                elements,
                tags::PRIVATE_INFORMATION_CREATOR_UID,
                "PrivateInformationCreatorUID",
            )?,
            private_information,
        })
    }

    /// The transfer syntax UID of the file.
    pub fn transfer_syntax(&self) -> &str {
        &self.transfer_syntax
    }
}

/// Read the elements of the file meta group,
/// starting right after the magic code.
///
/// The group must open with its group length element,
/// which bounds the rest of the group.
/// Otherwise only that first element is read,
/// leaving it to [`FileMetaTable::from_elements`] to report the missing length.
pub(crate) fn read_meta_group<D, S>(
    reader: &DataSetReader<D>,
    dec: &mut StatefulDecoder<S>,
    elements: &mut Vec<DataElement>,
) -> ReadResult<()>
where
    D: DataDictionary,
    S: Read,
{
    let first = reader.read_element(dec)?;
    let group_length = match first.uint32() {
        Ok(len) if first.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH => len,
        _ => {
            elements.push(first);
            return Ok(());
        }
    };
    elements.push(first);
    debug!("File meta group length: {}", group_length);

    let end = dec.position() + u64::from(group_length);
    while dec.position() < end {
        let elem = reader.read_element(dec)?;
        if !elem.tag().is_meta() {
            warn!("Element {} found inside the file meta group", elem.tag());
        }
        elements.push(elem);
    }
    if dec.position() > end {
        warn!(
            "File meta group ended at position {}, past its declared end {}",
            dec.position(),
            end
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};
    use dcm_core::{DataElementHeader, Length, Value, VR};
    use dcm_dictionary_std::StandardDataDictionary;
    use dcm_encoding::TransferSyntaxContext;

    #[rustfmt::skip]
    const TEST_META_1: &[u8] = &[
        // File Meta Information Group Length: (0000,0002) ; UL ; 4 ; 200
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0xc8, 0x00, 0x00, 0x00,
        // File Meta Information Version: (0002, 0001) ; OB ; 2 ; [0x00, 0x01]
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // Media Storage SOP Class UID (0002, 0002) ; UI ; 26 ; "1.2.840.10008.5.1.4.1.1.1\0" (ComputedRadiographyImageStorage)
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e,
        0x31, 0x2e, 0x31, 0x00,
        // Media Storage SOP Instance UID (0002, 0003) ; UI ; 56 ; "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567\0"
        0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x38, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x2e, 0x34,
        0x2e, 0x35, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x2e, 0x31, 0x32, 0x33,
        0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
        0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x2e, 0x31, 0x32, 0x33, 0x34,
        0x35, 0x36, 0x37, 0x00,
        // Transfer Syntax UID (0002, 0010) ; UI ; 20 ; "1.2.840.10008.1.2.1\0" (LittleEndianExplicit)
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e, 0x31, 0x00,
        // Implementation Class UID (0002, 0012) ; UI ; 20 ; "1.2.345.6.7890.1.234"
        0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x34, 0x35,
        0x2e, 0x36, 0x2e, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x2e, 0x32, 0x33, 0x34,
        // optional elements:

        // Implementation Version Name (0002,0013) ; SH ; "RUSTY_DICOM_269"
        0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x10, 0x00, 0x52, 0x55, 0x53, 0x54, 0x59, 0x5f, 0x44,
        0x49, 0x43, 0x4f, 0x4d, 0x5f, 0x32, 0x36, 0x39, 0x20,
        // Source Application Entity Title (0002, 0016) ; AE ; 0 (no data)
        0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x00, 0x00,
        // first element of the data set: (0008,0005) CS ; 0 (no data)
        0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x00, 0x00,
    ];

    fn read_meta(data: &[u8]) -> (Vec<DataElement>, StatefulDecoder<&[u8]>) {
        let reader = DataSetReader::new(StandardDataDictionary, Default::default());
        let mut dec = StatefulDecoder::new(data, data.len() as u64, TransferSyntaxContext::explicit_vr_le());
        let mut elements = Vec::new();
        read_meta_group(&reader, &mut dec, &mut elements).unwrap();
        (elements, dec)
    }

    #[test]
    fn read_meta_table_from_elements() {
        let (elements, dec) = read_meta(TEST_META_1);
        assert_eq!(elements.len(), 8);
        // stops right at the end of the group
        assert_eq!(dec.position(), 212);

        let table = FileMetaTable::from_elements(&elements).unwrap();

        let gt = FileMetaTable {
            information_group_length: 200,
            information_version: Some([0u8, 1u8]),
            media_storage_sop_class_uid: Some("1.2.840.10008.5.1.4.1.1.1".to_owned()),
            media_storage_sop_instance_uid: Some(
                "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567".to_owned(),
            ),
            transfer_syntax: "1.2.840.10008.1.2.1".to_owned(),
            implementation_class_uid: Some("1.2.345.6.7890.1.234".to_owned()),
            implementation_version_name: Some("RUSTY_DICOM_269".to_owned()),
            source_application_entity_title: Some("".to_owned()),
            sending_application_entity_title: None,
            receiving_application_entity_title: None,
            private_information_creator_uid: None,
            private_information: None,
        };

        assert_eq!(table, gt);
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
    }

    #[test]
    fn missing_transfer_syntax() {
        let elements = vec![DataElement::new(
            DataElementHeader::new(tags::FILE_META_INFORMATION_GROUP_LENGTH, VR::UL, Length(4)),
            Value::U32([0_u32].iter().copied().collect()),
        )];
        let err = FileMetaTable::from_elements(&elements).unwrap_err();
        assert!(matches!(err, Error::MissingElement { alias: "TransferSyntaxUID", .. }));
        assert_eq!(err.kind(), ErrorKind::MissingRequiredElement);
    }

    #[test]
    fn missing_group_length() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // Transfer Syntax UID (0002, 0010) ; UI ; 18 ; "1.2.840.10008.1.2\0"
            0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x12, 0x00,
            b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
            b'1', b'.', b'2', 0x00,
        ];
        let (elements, _) = read_meta(DATA);
        assert_eq!(elements.len(), 1);
        let err = FileMetaTable::from_elements(&elements).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingElement {
                alias: "FileMetaInformationGroupLength",
                ..
            }
        ));
    }
}
