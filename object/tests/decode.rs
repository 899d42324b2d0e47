mod common;

use common::{
    canonical_file, data_set_offset, file, DataSetBuilder, CANONICAL, EXPLICIT_VR_BE,
    EXPLICIT_VR_LE, IMPLICIT_VR_LE,
};
use dcm_core::{DataElement, HasLength, Header, Tag, Value, VR};
use dcm_dictionary_std::tags;
use dcm_encoding::TransferSyntaxContext;
use dcm_object::{
    find_element_by_name, find_element_by_tag, parse, parse_bytes, CharacterSetScope,
    ParseOptions, ReadPreamble,
};

#[test]
fn implicit_vr_element_takes_vr_from_dictionary() {
    #[rustfmt::skip]
    static DATA_SET: &[u8] = &[
        0x08, 0x00, 0x18, 0x00, // (0008,0018) SOPInstanceUID
        0x06, 0x00, 0x00, 0x00, // len = 6
        b'1', b'.', b'2', b'.', b'3', 0x00,
    ];
    let data = file(IMPLICIT_VR_LE, DATA_SET);

    let file = parse_bytes(&data).unwrap();
    let elem = file.element(tags::SOP_INSTANCE_UID).unwrap();
    assert_eq!(elem.vr(), VR::UI);
    assert_eq!(elem.value(), &Value::strs(vec!["1.2.3"]));

    let meta = file.meta().unwrap();
    assert_eq!(meta.transfer_syntax(), IMPLICIT_VR_LE);
    assert_eq!(meta.media_storage_sop_instance_uid.as_deref(), Some("2.25.1234"));
}

#[test]
fn explicit_vr_big_endian_unsigned_long() {
    #[rustfmt::skip]
    static DATA_SET: &[u8] = &[
        0x00, 0x20, 0x90, 0x57, // (0020,9057) InStackPositionNumber
        b'U', b'L', 0x00, 0x04, // len = 4
        0x00, 0x00, 0x00, 0x01,
    ];
    let data = file(EXPLICIT_VR_BE, DATA_SET);

    let file = parse(&data[..], data.len() as u64).unwrap();
    let elem = file.element(tags::IN_STACK_POSITION_NUMBER).unwrap();
    assert_eq!(elem.vr(), VR::UL);
    assert_eq!(elem.uint32().unwrap(), 1);
}

#[test]
fn undefined_length_sequence_with_one_item() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .start_sequence(tags::REFERENCED_SERIES_SEQUENCE)
        .start_item()
        .text(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4")
        .end_item()
        .end_sequence()
        .us(tags::ROWS, &[512])
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = parse_bytes(&data).unwrap();
    let seq = file.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
    assert_eq!(seq.vr(), VR::SQ);
    assert!(seq.length().is_undefined());

    let items = seq.items().unwrap();
    assert_eq!(items.len(), 1);
    let children = items[0].items().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].tag(), tags::SERIES_INSTANCE_UID);
    assert_eq!(children[0].to_str().unwrap(), "1.2.3.4");

    // reading resumed right after the sequence delimiter
    assert_eq!(file.element(tags::ROWS).unwrap().uint16().unwrap(), 512);
    assert_eq!(file.elements().last().unwrap().tag(), tags::ROWS);
}

#[test]
fn specific_character_set_applies_to_following_text() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .text(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192")
        .text(tags::PATIENT_NAME, VR::PN, "Müller^Jürgen")
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = parse_bytes(&data).unwrap();
    let name = file.element_by_name("PatientName").unwrap();
    assert_eq!(name.to_str().unwrap(), "Müller^Jürgen");
}

#[test]
fn text_is_decoded_with_the_default_character_set() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .text(tags::PATIENT_NAME, VR::PN, "Müller")
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = parse_bytes(&data).unwrap();
    // UTF-8 bytes read as ISO 8859-1
    assert_eq!(file.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(), "MÃ¼ller");
}

fn logical_data_set(ts: TransferSyntaxContext) -> Vec<u8> {
    DataSetBuilder::new(ts)
        .text(tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY")
        .text(tags::SOP_INSTANCE_UID, VR::UI, "1.2.826.0.1.3680043.2.1125")
        .text(tags::MODALITY, VR::CS, "MR")
        .start_sequence(tags::REFERENCED_SERIES_SEQUENCE)
        .start_item()
        .text(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3")
        .us(tags::ROWS, &[64])
        .end_item()
        .start_item()
        .text(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.4")
        .end_item()
        .end_sequence()
        .text(tags::PATIENT_NAME, VR::PN, "Doe^John")
        .sl(tags::REFERENCE_PIXEL_X0, &[-7, 70000])
        .fd(tags::DIFFUSION_B_VALUE, &[1000.5])
        .ul(tags::IN_STACK_POSITION_NUMBER, &[0x0102_0304])
        .at(tags::DIMENSION_INDEX_POINTER, &[tags::ROWS, tags::COLUMNS])
        .us(tags::ROWS, &[512])
        .us(tags::COLUMNS, &[256])
        .uv(tags::SELECTOR_UV_VALUE, &[1 << 40])
        .fl(tags::ANOMALY_LOCATOR_INDICATOR, &[0.25, -2.0])
        .ss(tags::OVERLAY_ORIGIN, &[-1, 1])
        .build()
}

/// The elements of the main data set, leaving out the file meta group.
fn data_set(elements: &[DataElement]) -> Vec<DataElement> {
    elements
        .iter()
        .filter(|e| !e.tag().is_meta())
        .cloned()
        .collect()
}

#[test]
fn same_values_in_all_canonical_transfer_syntaxes() {
    let mut decoded = Vec::new();
    for (uid, ts) in CANONICAL.iter() {
        let data = canonical_file(uid, &logical_data_set(*ts));
        let file = parse_bytes(&data).unwrap_or_else(|e| panic!("{}: {}", uid, e));
        decoded.push(data_set(file.elements()));
    }

    let first = &decoded[0];
    assert_eq!(first.len(), 14);
    for other in &decoded[1..] {
        assert_eq!(first, other);
    }

    let ds = &decoded[0];
    assert_eq!(ds[0].value(), &Value::strs(vec!["ORIGINAL", "PRIMARY"]));
    assert_eq!(ds[3].items().unwrap().len(), 2);
    assert_eq!(ds[5].int32_slice().unwrap(), &[-7, 70000]);
    assert_eq!(ds[8].tags().unwrap(), &[tags::ROWS, tags::COLUMNS]);
    assert_eq!(ds[11].uint64().unwrap(), 1 << 40);
    assert_eq!(ds[12].float32_slice().unwrap(), &[0.25, -2.0]);
}

#[test]
fn decoding_the_same_bytes_twice_gives_equal_files() {
    let data = file(EXPLICIT_VR_LE, &logical_data_set(TransferSyntaxContext::explicit_vr_le()));

    let first = parse_bytes(&data).unwrap();
    let second = parse_bytes(&data).unwrap();
    let seq = first.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
    assert!(seq.length().is_undefined());
    assert_eq!(seq, seq);
    assert_eq!(seq.value(), second.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap().value());
    assert_eq!(first, second);
}

#[test]
fn elements_keep_wire_order() {
    // deliberately out of tag order
    let data_set = DataSetBuilder::explicit_vr_le()
        .us(tags::COLUMNS, &[2])
        .text(tags::PATIENT_ID, VR::LO, "ID1")
        .us(tags::ROWS, &[1])
        .text(tags::MODALITY, VR::CS, "CT")
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = parse_bytes(&data).unwrap();
    let order: Vec<Tag> = file.iter().map(|e| e.tag()).collect();
    assert_eq!(
        order,
        vec![
            Tag(0x0002, 0x0000),
            Tag(0x0002, 0x0001),
            Tag(0x0002, 0x0002),
            Tag(0x0002, 0x0003),
            Tag(0x0002, 0x0010),
            Tag(0x0002, 0x0012),
            tags::COLUMNS,
            tags::PATIENT_ID,
            tags::ROWS,
            tags::MODALITY,
        ]
    );
}

fn nested(depth: u32, items_per_level: usize, builder: DataSetBuilder) -> DataSetBuilder {
    if depth == 0 {
        return builder.us(tags::ROWS, &[depth as u16]);
    }
    let mut builder = builder.start_sequence(tags::REFERENCED_SERIES_SEQUENCE);
    for _ in 0..items_per_level {
        builder = nested(depth - 1, items_per_level, builder.start_item()).end_item();
    }
    builder.end_sequence()
}

fn count_leaves(elem: &DataElement) -> usize {
    match elem.value() {
        Value::Sequence(children) => children.iter().map(count_leaves).sum(),
        _ => 1,
    }
}

#[test]
fn nested_undefined_length_containers() {
    for depth in 1..6 {
        for (uid, ts) in CANONICAL.iter().take(3) {
            let data_set = nested(depth, 2, DataSetBuilder::new(*ts)).build();
            let data = file(uid, &data_set);
            let file = parse_bytes(&data).unwrap();

            let root = file.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
            assert_eq!(root.items().unwrap().len(), 2);
            assert_eq!(count_leaves(root), 2_usize.pow(depth));

            // follow the first item of each level down to the leaf
            let mut current = root;
            for _ in 1..depth {
                let item = &current.items().unwrap()[0];
                assert_eq!(item.tag(), Tag::ITEM);
                let children = item.items().unwrap();
                assert_eq!(children.len(), 1);
                current = &children[0];
                assert_eq!(current.items().unwrap().len(), 2);
            }
        }
    }
}

#[test]
fn read_until_excludes_pixel_data() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .us(tags::ROWS, &[2])
        .us(tags::COLUMNS, &[2])
        .raw(tags::PIXEL_DATA, VR::OW, &[1, 2, 3, 4, 5, 6, 7, 8])
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = ParseOptions::new()
        .read_until(tags::PIXEL_DATA)
        .parse_bytes(&data)
        .unwrap();
    assert_eq!(file.elements().last().unwrap().tag(), tags::COLUMNS);
    assert!(file.element(tags::PIXEL_DATA).is_err());

    let file = ParseOptions::new()
        .read_until(tags::PIXEL_DATA)
        .read_all()
        .parse_bytes(&data)
        .unwrap();
    let pixel_data = file.element(tags::PIXEL_DATA).unwrap();
    assert_eq!(pixel_data.uint16_slice().unwrap(), &[0x0201, 0x0403, 0x0605, 0x0807]);
}

#[test]
fn source_without_preamble() {
    let data_set = DataSetBuilder::explicit_vr_le().us(tags::ROWS, &[16]).build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = ParseOptions::new()
        .read_preamble(ReadPreamble::Never)
        .parse_bytes(&data[128..])
        .unwrap();
    assert_eq!(file.element(tags::ROWS).unwrap().uint16().unwrap(), 16);
}

#[test]
fn encapsulated_pixel_data_fragments() {
    let data_set = DataSetBuilder::explicit_vr_le()
        .header(tags::PIXEL_DATA, VR::OB, 0xFFFF_FFFF)
        .header(Tag::ITEM, VR::NA, 0)
        .raw(Tag::ITEM, VR::NA, &[0xFF, 0xD8, 0xFF, 0xD9])
        .end_sequence()
        .build();
    let data = file(EXPLICIT_VR_LE, &data_set);

    let file = parse_bytes(&data).unwrap();
    let pixel_data = file.element(tags::PIXEL_DATA).unwrap();
    assert_eq!(pixel_data.vr(), VR::OB);
    assert_eq!(pixel_data.fragments().unwrap(), &[vec![], vec![0xFF, 0xD8, 0xFF, 0xD9]]);
}

fn sequence_with_character_set() -> Vec<u8> {
    DataSetBuilder::explicit_vr_le()
        .start_sequence(tags::REFERENCED_SERIES_SEQUENCE)
        .start_item()
        .text(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192")
        .text(tags::PATIENT_NAME, VR::PN, "Müller")
        .end_item()
        .end_sequence()
        .text(tags::PATIENT_NAME, VR::PN, "Müller")
        .build()
}

#[test]
fn character_set_is_stream_wide_by_default() {
    let data = file(EXPLICIT_VR_LE, &sequence_with_character_set());
    let file = parse_bytes(&data).unwrap();

    let seq = file.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
    let inner = find_element_by_tag(seq.items().unwrap()[0].items().unwrap(), tags::PATIENT_NAME)
        .unwrap();
    assert_eq!(inner.to_str().unwrap(), "Müller");
    assert_eq!(file.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(), "Müller");
}

#[test]
fn scoped_character_set_ends_with_its_container() {
    let data = file(EXPLICIT_VR_LE, &sequence_with_character_set());
    let file = ParseOptions::new()
        .character_set_scope(CharacterSetScope::Scoped)
        .parse_bytes(&data)
        .unwrap();

    let seq = file.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
    let inner = find_element_by_name(seq.items().unwrap()[0].items().unwrap(), "PatientName")
        .unwrap();
    assert_eq!(inner.to_str().unwrap(), "Müller");
    assert_eq!(file.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(), "MÃ¼ller");
}

#[test]
fn data_set_starts_after_meta_group() {
    let data_set = DataSetBuilder::explicit_vr_le().us(tags::ROWS, &[1]).build();
    let data = file(EXPLICIT_VR_LE, &data_set);
    assert_eq!(data.len(), data_set_offset(EXPLICIT_VR_LE) + data_set.len());

    let file = parse_bytes(&data).unwrap();
    let meta = file.meta().unwrap();
    assert_eq!(
        meta.information_group_length as usize,
        data_set_offset(EXPLICIT_VR_LE) - 132 - 12
    );
    assert_eq!(meta.information_version, Some([0, 1]));
    assert_eq!(meta.implementation_class_uid.as_deref(), Some("2.25.5678"));
}
