#![cfg(feature = "deflate")]
mod common;

use common::{deflate, file, DataSetBuilder, DEFLATED_EXPLICIT_VR_LE};
use dcm_core::VR;
use dcm_dictionary_std::tags;
use dcm_object::{parse_bytes, ParseOptions};

fn data_set() -> Vec<u8> {
    DataSetBuilder::explicit_vr_le()
        .text(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5")
        .start_sequence(tags::REFERENCED_SERIES_SEQUENCE)
        .start_item()
        .text(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3")
        .end_item()
        .end_sequence()
        .us(tags::ROWS, &[512])
        .raw(tags::PIXEL_DATA, VR::OB, &[0; 16])
        .build()
}

#[test]
fn deflated_data_set_is_inflated() {
    let data = file(DEFLATED_EXPLICIT_VR_LE, &deflate(&data_set()));

    let file = parse_bytes(&data).unwrap();
    assert_eq!(file.meta().unwrap().transfer_syntax(), DEFLATED_EXPLICIT_VR_LE);
    assert_eq!(file.element(tags::SOP_INSTANCE_UID).unwrap().to_str().unwrap(), "1.2.3.4.5");
    assert_eq!(
        file.element(tags::REFERENCED_SERIES_SEQUENCE)
            .unwrap()
            .items()
            .unwrap()
            .len(),
        1
    );
    assert_eq!(file.element(tags::ROWS).unwrap().uint16().unwrap(), 512);
}

#[test]
fn read_until_applies_to_the_inflated_data_set() {
    let data = file(DEFLATED_EXPLICIT_VR_LE, &deflate(&data_set()));

    let file = ParseOptions::new()
        .read_until(tags::PIXEL_DATA)
        .parse_bytes(&data)
        .unwrap();
    assert_eq!(file.elements().last().unwrap().vr(), VR::US);
}
