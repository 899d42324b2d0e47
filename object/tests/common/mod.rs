//! Builders of DICOM byte fixtures for the integration tests.
#![allow(dead_code)]

use dcm_core::{Tag, VR};
use dcm_encoding::byteordered::ByteOrdered;
use dcm_encoding::TransferSyntaxContext;

pub const IMPLICIT_VR_LE: &str = "1.2.840.10008.1.2";
pub const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";
pub const EXPLICIT_VR_BE: &str = "1.2.840.10008.1.2.2";
pub const DEFLATED_EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1.99";

/// The four canonical transfer syntaxes and their encoding contexts.
pub const CANONICAL: [(&str, TransferSyntaxContext); 4] = [
    (IMPLICIT_VR_LE, TransferSyntaxContext::implicit_vr_le()),
    (EXPLICIT_VR_LE, TransferSyntaxContext::explicit_vr_le()),
    (EXPLICIT_VR_BE, TransferSyntaxContext::explicit_vr_be()),
    (DEFLATED_EXPLICIT_VR_LE, TransferSyntaxContext::explicit_vr_le()),
];

/// Writer of data set bytes in a given encoding context.
#[derive(Debug)]
pub struct DataSetBuilder {
    ts: TransferSyntaxContext,
    out: Vec<u8>,
}

impl DataSetBuilder {
    pub fn new(ts: TransferSyntaxContext) -> Self {
        DataSetBuilder { ts, out: Vec::new() }
    }

    pub fn explicit_vr_le() -> Self {
        Self::new(TransferSyntaxContext::explicit_vr_le())
    }

    fn writer(&mut self) -> ByteOrdered<&mut Vec<u8>, dcm_encoding::Endianness> {
        ByteOrdered::runtime(&mut self.out, self.ts.endianness)
    }

    fn tag(&mut self, tag: Tag) {
        let mut w = self.writer();
        w.write_u16(tag.0).unwrap();
        w.write_u16(tag.1).unwrap();
    }

    /// Write an element header.
    /// Items and delimiters never carry a VR.
    pub fn header(mut self, tag: Tag, vr: VR, len: u32) -> Self {
        self.tag(tag);
        if tag.0 == 0xFFFE || self.ts.implicit_vr {
            self.writer().write_u32(len).unwrap();
        } else {
            self.out.extend_from_slice(&vr.to_bytes());
            if vr.has_extended_length() {
                self.out.extend_from_slice(&[0, 0]);
                self.writer().write_u32(len).unwrap();
            } else {
                self.writer().write_u16(len as u16).unwrap();
            }
        }
        self
    }

    /// Write a text element, padded to even length.
    pub fn text(self, tag: Tag, vr: VR, value: &str) -> Self {
        let mut bytes = value.as_bytes().to_vec();
        if bytes.len() % 2 == 1 {
            bytes.push(if vr == VR::UI { 0 } else { b' ' });
        }
        self.raw(tag, vr, &bytes)
    }

    /// Write an element with the given value bytes as is.
    pub fn raw(self, tag: Tag, vr: VR, value: &[u8]) -> Self {
        let mut b = self.header(tag, vr, value.len() as u32);
        b.out.extend_from_slice(value);
        b
    }

    pub fn us(self, tag: Tag, values: &[u16]) -> Self {
        let mut b = self.header(tag, VR::US, 2 * values.len() as u32);
        for v in values {
            b.writer().write_u16(*v).unwrap();
        }
        b
    }

    pub fn ss(self, tag: Tag, values: &[i16]) -> Self {
        let mut b = self.header(tag, VR::SS, 2 * values.len() as u32);
        for v in values {
            b.writer().write_i16(*v).unwrap();
        }
        b
    }

    pub fn ul(self, tag: Tag, values: &[u32]) -> Self {
        let mut b = self.header(tag, VR::UL, 4 * values.len() as u32);
        for v in values {
            b.writer().write_u32(*v).unwrap();
        }
        b
    }

    pub fn sl(self, tag: Tag, values: &[i32]) -> Self {
        let mut b = self.header(tag, VR::SL, 4 * values.len() as u32);
        for v in values {
            b.writer().write_i32(*v).unwrap();
        }
        b
    }

    pub fn fl(self, tag: Tag, values: &[f32]) -> Self {
        let mut b = self.header(tag, VR::FL, 4 * values.len() as u32);
        for v in values {
            b.writer().write_f32(*v).unwrap();
        }
        b
    }

    pub fn fd(self, tag: Tag, values: &[f64]) -> Self {
        let mut b = self.header(tag, VR::FD, 8 * values.len() as u32);
        for v in values {
            b.writer().write_f64(*v).unwrap();
        }
        b
    }

    pub fn uv(self, tag: Tag, values: &[u64]) -> Self {
        let mut b = self.header(tag, VR::UV, 8 * values.len() as u32);
        for v in values {
            b.writer().write_u64(*v).unwrap();
        }
        b
    }

    pub fn at(self, tag: Tag, values: &[Tag]) -> Self {
        let mut b = self.header(tag, VR::AT, 4 * values.len() as u32);
        for v in values {
            b.tag(*v);
        }
        b
    }

    /// Open a sequence of undefined length.
    pub fn start_sequence(self, tag: Tag) -> Self {
        self.header(tag, VR::SQ, 0xFFFF_FFFF)
    }

    /// Open an item of undefined length.
    pub fn start_item(self) -> Self {
        self.header(Tag::ITEM, VR::NA, 0xFFFF_FFFF)
    }

    pub fn end_item(self) -> Self {
        self.header(Tag::ITEM_DELIMITER, VR::NA, 0)
    }

    pub fn end_sequence(self) -> Self {
        self.header(Tag::SEQUENCE_DELIMITER, VR::NA, 0)
    }

    pub fn build(self) -> Vec<u8> {
        self.out
    }
}

/// Encode a file meta group declaring the given transfer syntax,
/// group length element included.
pub fn meta_group(transfer_syntax: &str) -> Vec<u8> {
    let body = DataSetBuilder::explicit_vr_le()
        .raw(Tag(0x0002, 0x0001), VR::OB, &[0, 1])
        .text(Tag(0x0002, 0x0002), VR::UI, "1.2.840.10008.5.1.4.1.1.7")
        .text(Tag(0x0002, 0x0003), VR::UI, "2.25.1234")
        .text(Tag(0x0002, 0x0010), VR::UI, transfer_syntax)
        .text(Tag(0x0002, 0x0012), VR::UI, "2.25.5678")
        .build();
    let mut out = DataSetBuilder::explicit_vr_le()
        .ul(Tag(0x0002, 0x0000), &[body.len() as u32])
        .build();
    out.extend(body);
    out
}

/// Encode a whole file:
/// preamble, magic code, file meta group and the given data set.
pub fn file(transfer_syntax: &str, data_set: &[u8]) -> Vec<u8> {
    let mut out = vec![0; 128];
    out.extend_from_slice(b"DICM");
    out.extend(meta_group(transfer_syntax));
    out.extend_from_slice(data_set);
    out
}

/// The number of bytes before the data set in a file made by [`file`].
pub fn data_set_offset(transfer_syntax: &str) -> usize {
    132 + meta_group(transfer_syntax).len()
}

/// Compress a data set as a raw deflate stream.
pub fn deflate(data_set: &[u8]) -> Vec<u8> {
    use flate2::{write::DeflateEncoder, Compression};
    use std::io::Write;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data_set).unwrap();
    encoder.finish().unwrap()
}

/// Encode a file for one of the canonical transfer syntaxes,
/// deflating the data set when the deflated syntax is inflated on reading.
pub fn canonical_file(transfer_syntax: &str, data_set: &[u8]) -> Vec<u8> {
    if transfer_syntax == DEFLATED_EXPLICIT_VR_LE && cfg!(feature = "deflate") {
        file(transfer_syntax, &deflate(data_set))
    } else {
        file(transfer_syntax, data_set)
    }
}
