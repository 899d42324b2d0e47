mod common;

use common::{file, DataSetBuilder, EXPLICIT_VR_LE, IMPLICIT_VR_LE};
use dcm_core::{Header, Tag, VR};
use dcm_dictionary_std::tags;
use dcm_object::{parse_bytes, Error, ErrorKind, ParseOptions};

fn kind_of(data: &[u8]) -> ErrorKind {
    parse_bytes(data).unwrap_err().kind()
}

#[test]
fn unknown_transfer_syntax_uid() {
    let data = file("9.9.9.9", &[]);
    let err = parse_bytes(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownUid);
    assert!(matches!(err, Error::ResolveTransferSyntax { .. }));
}

#[test]
fn registered_uid_which_is_not_a_transfer_syntax() {
    // Verification SOP Class
    let data = file("1.2.840.10008.1.1", &[]);
    assert_eq!(kind_of(&data), ErrorKind::NotATransferSyntax);
}

#[test]
fn other_transfer_syntaxes_decode_as_explicit_vr_little_endian() {
    let data_set = DataSetBuilder::explicit_vr_le().us(tags::ROWS, &[8]).build();
    // JPEG Baseline
    let data = file("1.2.840.10008.1.2.4.50", &data_set);

    let file = parse_bytes(&data).unwrap();
    assert_eq!(file.element(tags::ROWS).unwrap().uint16().unwrap(), 8);
    assert_eq!(file.meta().unwrap().transfer_syntax(), "1.2.840.10008.1.2.4.50");
}

#[test]
fn bad_magic_code() {
    let mut data = file(EXPLICIT_VR_LE, &[]);
    data[131] = b'N';
    let err = parse_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::NotDicom { .. }));
    assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
}

#[test]
fn input_shorter_than_the_preamble() {
    assert_eq!(kind_of(&[0; 100]), ErrorKind::UnexpectedEof);
}

fn file_with_meta(meta: &[u8]) -> Vec<u8> {
    let mut out = vec![0; 128];
    out.extend_from_slice(b"DICM");
    out.extend_from_slice(meta);
    out
}

#[test]
fn meta_group_without_transfer_syntax() {
    let body = DataSetBuilder::explicit_vr_le()
        .raw(tags::FILE_META_INFORMATION_VERSION, VR::OB, &[0, 1])
        .text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, "2.25.1")
        .build();
    let mut meta = DataSetBuilder::explicit_vr_le()
        .ul(tags::FILE_META_INFORMATION_GROUP_LENGTH, &[body.len() as u32])
        .build();
    meta.extend(body);

    let err = parse_bytes(&file_with_meta(&meta)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredElement);
    assert_eq!(err.to_string(), "Missing data element `TransferSyntaxUID`");
}

#[test]
fn meta_group_without_group_length() {
    let meta = DataSetBuilder::explicit_vr_le()
        .raw(tags::FILE_META_INFORMATION_VERSION, VR::OB, &[0, 1])
        .text(tags::TRANSFER_SYNTAX_UID, VR::UI, EXPLICIT_VR_LE)
        .build();
    let data = file_with_meta(&meta);

    let (file, err) = ParseOptions::new().parse_partial(&data[..], data.len() as u64);
    let err = err.unwrap();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredElement);
    assert!(file.meta().is_none());
    assert_eq!(file.elements()[0].tag(), tags::FILE_META_INFORMATION_VERSION);
}

#[test]
fn truncated_element_header() {
    let mut data_set = DataSetBuilder::explicit_vr_le().us(tags::ROWS, &[4]).build();
    data_set.extend_from_slice(&[0x28, 0x00, 0x11]);
    let data = file(EXPLICIT_VR_LE, &data_set);

    let (file, err) = ParseOptions::new().parse_partial(&data[..], data.len() as u64);
    let err = err.unwrap();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    assert!(matches!(
        err,
        Error::DecodeDataSet {
            source: dcm_parser::Error::UnexpectedEof { requested: 2, remaining: 1, .. }
        }
    ));

    // the meta group and the first element survive
    assert!(file.meta().is_some());
    assert_eq!(file.elements().last().unwrap().tag(), tags::ROWS);
    assert_eq!(file.element(tags::ROWS).unwrap().uint16().unwrap(), 4);
}

#[test]
fn value_longer_than_the_input() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .us(tags::ROWS, &[4])
        .header(tags::PATIENT_NAME, VR::PN, 32)
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let (file, err) = ParseOptions::new().parse_partial(&data[..], data.len() as u64);
    assert_eq!(err.unwrap().kind(), ErrorKind::MalformedEncoding);
    assert!(file.element(tags::ROWS).is_ok());
    assert!(file.element(tags::PATIENT_NAME).is_err());
}

#[test]
fn invalid_value_representation() {
    let mut data_set = DataSetBuilder::explicit_vr_le().us(tags::ROWS, &[4]).build();
    data_set.extend_from_slice(&[0x28, 0x00, 0x11, 0x00, b'Z', b'Z', 0x02, 0x00, 0x00, 0x01]);
    let data = file(EXPLICIT_VR_LE, &data_set);

    let err = parse_bytes(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
    assert!(matches!(
        err,
        Error::DecodeDataSet {
            source: dcm_parser::Error::InvalidVr { vr: [b'Z', b'Z'], .. }
        }
    ));
}

#[test]
fn sequence_without_delimiter() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .us(tags::ROWS, &[4])
        .start_sequence(tags::REFERENCED_SERIES_SEQUENCE)
        .start_item()
        .text(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3")
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let (file, err) = ParseOptions::new().parse_partial(&data[..], data.len() as u64);
    assert_eq!(err.unwrap().kind(), ErrorKind::UndelimitedContainer);

    // the partially read sequence is kept
    let seq = file.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
    let items = seq.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].items().unwrap()[0].to_str().unwrap(), "1.2.3");
}

#[test]
fn stray_sequence_delimiter_at_root_is_skipped() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .us(tags::ROWS, &[4])
        .end_sequence()
        .us(tags::COLUMNS, &[4])
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = parse_bytes(&data).unwrap();
    assert_eq!(file.element(tags::COLUMNS).unwrap().uint16().unwrap(), 4);
    assert!(file.iter().all(|e| !e.tag().is_item_group()));
}

#[test]
fn nesting_deeper_than_allowed() {
    // three sequences, each with one item
    let data_set = DataSetBuilder::new(dcm_encoding::TransferSyntaxContext::implicit_vr_le())
        .start_sequence(tags::REFERENCED_SERIES_SEQUENCE)
        .start_item()
        .start_sequence(tags::REFERENCED_SERIES_SEQUENCE)
        .start_item()
        .start_sequence(tags::OTHER_PATIENT_IDS_SEQUENCE)
        .start_item()
        .text(tags::PATIENT_ID, VR::LO, "ID")
        .end_item()
        .end_sequence()
        .end_item()
        .end_sequence()
        .end_item()
        .end_sequence()
        .build();
    let data = file(IMPLICIT_VR_LE, &data_set);

    let err = ParseOptions::new()
        .max_depth(5)
        .parse_bytes(&data)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DecodeDataSet {
            source: dcm_parser::Error::MaxDepthExceeded {
                tag: Tag(0xFFFE, 0xE000),
                max_depth: 5,
                ..
            }
        }
    ));
    assert_eq!(err.kind(), ErrorKind::MalformedEncoding);

    let file = ParseOptions::new().max_depth(6).parse_bytes(&data).unwrap();
    assert_eq!(file.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap().vr(), VR::SQ);
}

#[test]
fn element_access_errors() {
    let data_set = DataSetBuilder::explicit_vr_le().us(tags::ROWS, &[4]).build();
    let data = file(EXPLICIT_VR_LE, &data_set);
    let file = parse_bytes(&data).unwrap();

    let err = file.element(tags::PATIENT_NAME).unwrap_err();
    assert_eq!(err.to_string(), "No such data element with tag (0010,0010)");

    let err = file.element_by_name("PatientName").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No such data element PatientName (with tag (0010,0010))"
    );
    assert!(file.element_by_name("NoSuchName").is_err());
}
