//! This module contains the recursive reader of DICOM data elements.
//!
//! Each element is read from its header:
//! the tag, the value representation
//! (from the stream under explicit VR, from the dictionary under implicit VR),
//! and the value length.
//! Sequences and items are read by recursion until their defined length
//! is exhausted or until the matching delimiter is found.
use crate::error::{
    InconsistentContainerEndSnafu, InvalidDelimiterLengthSnafu, InvalidVrSnafu,
    MaxDepthExceededSnafu, UndefinedValueLengthSnafu, UndelimitedContainerSnafu,
    UnexpectedTagSnafu, ValueTooLongSnafu,
};
use crate::stateful::decode::{Halted, ReadResult, StatefulDecoder};
use dcm_core::dictionary::{DataDictionary, DictionaryEntry};
use dcm_core::{DataElement, DataElementHeader, Length, Tag, Value, VR};
use dcm_dictionary_std::tags;
use dcm_encoding::text::SpecificCharacterSet;
use dcm_encoding::TransferSyntaxContext;
use std::io::Read;
use tracing::{trace, warn};

/// The default maximum nesting depth of sequences and items.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// The set of options for the data set reader.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct DataSetReaderOptions {
    /// the maximum nesting depth of containers
    pub max_depth: u32,
}

impl Default for DataSetReaderOptions {
    fn default() -> Self {
        DataSetReaderOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DataSetReaderOptions {
    /// Replace the maximum nesting depth of the options.
    ///
    /// Elements at the root of the data set have a depth of zero.
    /// A container whose children would be deeper than this
    /// is a decoding error.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// What a single read at the current position produced.
#[derive(Debug)]
enum Token {
    Element(DataElement),
    ItemDelimiter,
    SequenceDelimiter,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ContainerKind {
    Sequence,
    Item,
}

/// A reader of data elements from a stateful decoder.
///
/// `D` is the data dictionary used to look up the VR of elements
/// in implicit VR data sets.
///
/// The reader itself holds no decoding state,
/// so the same reader can be used on the meta group and the main data set.
/// Failures are recorded in the decoder:
/// the methods here return [`Halted`] when the decoder stopped
/// before anything could be produced.
/// When the decoder stops in the middle of a container,
/// the container is still produced with the children read so far,
/// and the decoder reports the failure through
/// [`is_halted`](StatefulDecoder::is_halted).
#[derive(Debug)]
pub struct DataSetReader<D> {
    dict: D,
    options: DataSetReaderOptions,
}

impl<D> DataSetReader<D>
where
    D: DataDictionary,
{
    /// Create a new reader with the given dictionary and options.
    pub fn new(dict: D, options: DataSetReaderOptions) -> Self {
        DataSetReader { dict, options }
    }

    /// The data dictionary of this reader.
    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    /// The options of this reader.
    pub fn options(&self) -> &DataSetReaderOptions {
        &self.options
    }

    /// Read all remaining data elements at the root of the data set.
    pub fn read_data_set<S>(&self, dec: &mut StatefulDecoder<S>) -> Vec<DataElement>
    where
        S: Read,
    {
        self.read_data_set_until(dec, None)
    }

    /// Read the remaining data elements at the root of the data set,
    /// stopping before the first element with a tag
    /// greater than or equal to `until`.
    ///
    /// Reading also stops when the decoder halts,
    /// in which case the elements read so far are returned.
    pub fn read_data_set_until<S>(
        &self,
        dec: &mut StatefulDecoder<S>,
        until: Option<Tag>,
    ) -> Vec<DataElement>
    where
        S: Read,
    {
        let mut elements = Vec::new();
        while dec.remaining_length() > 0 && !dec.is_halted() {
            let position = dec.position();
            let header = match self.read_header(dec) {
                Ok(header) => header,
                Err(Halted) => break,
            };
            if matches!(until, Some(until) if header.tag >= until) {
                trace!("Stopped reading before {} at position {}", header.tag, position);
                break;
            }
            match self.read_after_header(dec, header, 0) {
                Ok(Token::Element(elem)) => elements.push(elem),
                Ok(_) => {
                    // ignore delimiter, we are not in a container
                    warn!(
                        "Delimiter {} outside of a container at position {}",
                        header.tag, position
                    );
                }
                Err(Halted) => break,
            }
        }
        elements
    }

    /// Read a single data element at the root of the data set.
    ///
    /// A delimiter at this position is an unexpected tag.
    pub fn read_element<S>(&self, dec: &mut StatefulDecoder<S>) -> ReadResult<DataElement>
    where
        S: Read,
    {
        let position = dec.position();
        let header = self.read_header(dec)?;
        match self.read_after_header(dec, header, 0)? {
            Token::Element(elem) => Ok(elem),
            _ => Err(dec.fail(
                UnexpectedTagSnafu {
                    tag: header.tag,
                    position,
                }
                .build(),
            )),
        }
    }

    /// Read a data element header in the current transfer syntax.
    pub fn read_header<S>(&self, dec: &mut StatefulDecoder<S>) -> ReadResult<DataElementHeader>
    where
        S: Read,
    {
        let position = dec.position();
        let tag = dec.read_tag()?;

        // items and delimiters never have a VR
        if tag.is_item_group() {
            let len = dec.read_u32()?;
            return Ok(DataElementHeader::new(tag, VR::NA, Length(len)));
        }

        if dec.transfer_syntax().implicit_vr {
            let vr = self
                .dict
                .by_tag(tag)
                .map(|entry| entry.vr())
                .unwrap_or(VR::UN);
            let len = dec.read_u32()?;
            return Ok(DataElementHeader::new(tag, vr, Length(len)));
        }

        let raw = dec.read_bytes(2)?;
        let raw = [raw[0], raw[1]];
        let vr = match VR::from_binary(raw) {
            Some(vr) => vr,
            None => {
                return Err(dec.fail(InvalidVrSnafu { tag, vr: raw, position }.build()));
            }
        };
        let len = if vr.has_extended_length() {
            // 2 reserved bytes
            dec.skip_bytes(2)?;
            dec.read_u32()?
        } else {
            u32::from(dec.read_u16()?)
        };
        Ok(DataElementHeader::new(tag, vr, Length(len)))
    }

    fn read_after_header<S>(
        &self,
        dec: &mut StatefulDecoder<S>,
        header: DataElementHeader,
        depth: u32,
    ) -> ReadResult<Token>
    where
        S: Read,
    {
        let tag = header.tag;

        if tag.is_item_delimiter() || tag.is_sequence_delimiter() {
            if header.len != Length(0) {
                let e = InvalidDelimiterLengthSnafu {
                    tag,
                    len: header.len,
                }
                .build();
                return Err(dec.fail(e));
            }
            return Ok(if tag.is_item_delimiter() {
                Token::ItemDelimiter
            } else {
                Token::SequenceDelimiter
            });
        }

        if tag.is_item() {
            let item = self.read_container(dec, header, ContainerKind::Item, depth);
            return Ok(Token::Element(item));
        }

        if tag.is_item_group() {
            let e = UnexpectedTagSnafu {
                tag,
                position: dec.position().saturating_sub(8),
            }
            .build();
            return Err(dec.fail(e));
        }

        if header.vr == VR::SQ {
            let seq = self.read_container(dec, header, ContainerKind::Sequence, depth);
            return Ok(Token::Element(seq));
        }

        if header.len.is_undefined() {
            return match header.vr {
                VR::OB | VR::OW => Ok(Token::Element(self.read_fragments(dec, header))),
                VR::UN => {
                    // content of an undefined length UN is always implicit VR little endian
                    let header = DataElementHeader::new(tag, VR::SQ, header.len);
                    let mut dec = dec.push_transfer_syntax(TransferSyntaxContext::implicit_vr_le());
                    let seq = self.read_container(&mut *dec, header, ContainerKind::Sequence, depth);
                    Ok(Token::Element(seq))
                }
                vr => Err(dec.fail(UndefinedValueLengthSnafu { tag, vr }.build())),
            };
        }

        let len = u64::from(header.len.0);
        if len > dec.remaining_length() {
            let e = ValueTooLongSnafu {
                tag,
                len: header.len.0,
                remaining: dec.remaining_length(),
                position: dec.position(),
            }
            .build();
            return Err(dec.fail(e));
        }

        let value = dec.read_value(&header)?;
        if tag == tags::SPECIFIC_CHARACTER_SET {
            update_character_set(dec, &value);
        }
        Ok(Token::Element(DataElement::new(header, value)))
    }

    /// Read the children of a sequence or item.
    ///
    /// Always produces the container,
    /// with the children read before any failure.
    fn read_container<S>(
        &self,
        dec: &mut StatefulDecoder<S>,
        header: DataElementHeader,
        kind: ContainerKind,
        depth: u32,
    ) -> DataElement
    where
        S: Read,
    {
        let tag = header.tag;
        let mut children = Vec::new();

        if depth >= self.options.max_depth {
            let e = MaxDepthExceededSnafu {
                tag,
                max_depth: self.options.max_depth,
                position: dec.position(),
            }
            .build();
            dec.fail(e);
            return DataElement::new(header, Value::Sequence(children));
        }

        let end = match header.len.get() {
            Some(len) if u64::from(len) > dec.remaining_length() => {
                let e = ValueTooLongSnafu {
                    tag,
                    len,
                    remaining: dec.remaining_length(),
                    position: dec.position(),
                }
                .build();
                dec.fail(e);
                return DataElement::new(header, Value::Sequence(children));
            }
            Some(len) => Some(dec.position() + u64::from(len)),
            None => None,
        };

        trace!("Entering {} {:?} at position {}", tag, kind, dec.position());
        dec.enter_container();

        loop {
            let position = dec.position();
            match end {
                Some(end) if position >= end => break,
                None if dec.remaining_length() == 0 => {
                    dec.fail(UndelimitedContainerSnafu { tag, position }.build());
                    break;
                }
                _ => {}
            }

            let child = match self.read_header(dec) {
                Ok(child) => child,
                Err(Halted) => break,
            };
            if kind == ContainerKind::Sequence && !child.tag.is_item_group() {
                dec.fail(
                    UnexpectedTagSnafu {
                        tag: child.tag,
                        position,
                    }
                    .build(),
                );
                break;
            }

            match self.read_after_header(dec, child, depth + 1) {
                Ok(Token::Element(elem)) => {
                    children.push(elem);
                    if dec.is_halted() {
                        break;
                    }
                }
                Ok(Token::ItemDelimiter) if kind == ContainerKind::Item => break,
                Ok(Token::SequenceDelimiter) if kind == ContainerKind::Sequence => break,
                Ok(_) => {
                    dec.fail(
                        UnexpectedTagSnafu {
                            tag: child.tag,
                            position,
                        }
                        .build(),
                    );
                    break;
                }
                Err(Halted) => break,
            }
        }

        if let Some(end) = end {
            let position = dec.position();
            if !dec.is_halted() && position != end {
                dec.fail(InconsistentContainerEndSnafu { tag, end, position }.build());
            }
        }

        dec.exit_container();
        trace!("Leaving {} at position {}", tag, dec.position());
        DataElement::new(header, Value::Sequence(children))
    }

    /// Read the fragments of encapsulated pixel data,
    /// up to the sequence delimiter.
    fn read_fragments<S>(&self, dec: &mut StatefulDecoder<S>, header: DataElementHeader) -> DataElement
    where
        S: Read,
    {
        let mut fragments = Vec::new();
        loop {
            let position = dec.position();
            if dec.remaining_length() == 0 {
                dec.fail(
                    UndelimitedContainerSnafu {
                        tag: header.tag,
                        position,
                    }
                    .build(),
                );
                break;
            }

            let tag = match dec.read_tag() {
                Ok(tag) => tag,
                Err(Halted) => break,
            };
            let len = match dec.read_u32() {
                Ok(len) => Length(len),
                Err(Halted) => break,
            };
            match tag {
                Tag::ITEM => {
                    let len = match len.get() {
                        Some(len) => u64::from(len),
                        None => {
                            dec.fail(UndefinedValueLengthSnafu { tag, vr: VR::NA }.build());
                            break;
                        }
                    };
                    if len > dec.remaining_length() {
                        let e = ValueTooLongSnafu {
                            tag,
                            len: len as u32,
                            remaining: dec.remaining_length(),
                            position: dec.position(),
                        }
                        .build();
                        dec.fail(e);
                        break;
                    }
                    match dec.read_bytes(len) {
                        Ok(fragment) => fragments.push(fragment),
                        Err(Halted) => break,
                    }
                }
                Tag::SEQUENCE_DELIMITER => {
                    if len != Length(0) {
                        dec.fail(InvalidDelimiterLengthSnafu { tag, len }.build());
                    }
                    break;
                }
                _ => {
                    dec.fail(UnexpectedTagSnafu { tag, position }.build());
                    break;
                }
            }
        }
        DataElement::new(header, Value::Fragments(fragments))
    }
}

/// Make the character set named by a Specific Character Set value
/// the active one.
///
/// The first supported term is used.
/// A value with no terms at all means the default character set.
fn update_character_set<S>(dec: &mut StatefulDecoder<S>, value: &Value)
where
    S: Read,
{
    let terms = match value.strings() {
        Ok(terms) => terms,
        Err(_) => return,
    };
    let mut terms = terms.iter().map(|t| t.trim()).filter(|t| !t.is_empty()).peekable();
    if terms.peek().is_none() {
        dec.set_character_set(SpecificCharacterSet::Default);
        return;
    }
    let mut unsupported = Vec::new();
    for term in terms {
        match SpecificCharacterSet::from_code(term) {
            Some(charset) => {
                trace!("Active character set is now {:?}", charset);
                dec.set_character_set(charset);
                return;
            }
            None => unsupported.push(term),
        }
    }
    warn!(
        "Unsupported character set {:?}, keeping {:?}",
        unsupported,
        dec.character_set()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use dcm_core::dictionary::StubDataDictionary;
    use dcm_core::value::C;
    use dcm_core::{HasLength, Header};
    use dcm_dictionary_std::StandardDataDictionary;

    fn explicit_le(data: &[u8]) -> StatefulDecoder<&[u8]> {
        StatefulDecoder::new(data, data.len() as u64, TransferSyntaxContext::explicit_vr_le())
    }

    fn implicit_le(data: &[u8]) -> StatefulDecoder<&[u8]> {
        StatefulDecoder::new(data, data.len() as u64, TransferSyntaxContext::implicit_vr_le())
    }

    fn reader() -> DataSetReader<StandardDataDictionary> {
        DataSetReader::new(StandardDataDictionary, Default::default())
    }

    fn us(tag: (u16, u16), value: u16) -> DataElement {
        DataElement::new(
            DataElementHeader::new(tag, VR::US, Length(2)),
            Value::U16(C::from_slice(&[value])),
        )
    }

    fn item(len: u32, children: Vec<DataElement>) -> DataElement {
        DataElement::new(
            DataElementHeader::new(Tag::ITEM, VR::NA, Length(len)),
            Value::Sequence(children),
        )
    }

    #[test]
    fn read_sequence_explicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, // sequence tag: (0018,6011) SequenceOfUltrasoundRegions
            b'S', b'Q', // VR
            0x00, 0x00, // reserved
            0x2e, 0x00, 0x00, 0x00, // length: 28 + 18 = 46 (#= 2)
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x14, 0x00, 0x00, 0x00, // item length: 20 (#= 2)
            // -- 20 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 1
            // -- 30 --
            0x18, 0x00, 0x14, 0x60, b'U', b'S', 0x02, 0x00, 0x02, 0x00, // (0018, 6014) RegionDataType, len = 2, value = 2
            // -- 40 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x0a, 0x00, 0x00, 0x00, // item length: 10 (#= 1)
            // -- 48 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x04, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 4
            // -- 58 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set(&mut dec);

        let ground_truth = vec![
            DataElement::new(
                DataElementHeader::new((0x0018, 0x6011), VR::SQ, Length(46)),
                Value::Sequence(vec![
                    item(20, vec![us((0x0018, 0x6012), 1), us((0x0018, 0x6014), 2)]),
                    item(10, vec![us((0x0018, 0x6012), 4)]),
                ]),
            ),
            DataElement::new(
                DataElementHeader::new((0x0020, 0x4000), VR::LT, Length(4)),
                Value::strs(vec!["TEST"]),
            ),
        ];
        assert_eq!(elements, ground_truth);
        assert_eq!(dec.position(), DATA.len() as u64);
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn read_sequence_explicit_empty() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // SequenceStart: (0040,0555) AcquisitionContextSequence; len = 0
            0x40, 0x00, 0x55, 0x05, b'S', b'Q', 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            // ElementHeader: (2050,0020) PresentationLUTShape; len = 8
            0x50, 0x20, 0x20, 0x00, b'C', b'S', 0x08, 0x00, // PrimitiveValue
            b'I', b'D', b'E', b'N', b'T', b'I', b'T', b'Y',
        ];

        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set(&mut dec);
        assert_eq!(elements.len(), 2);
        assert!(elements[0].items().unwrap().is_empty());
        assert_eq!(elements[1].strings().unwrap(), &["IDENTITY".to_string()]);
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn read_undefined_length_sequence_implicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            0xff, 0xff, 0xff, 0xff, // undefined length
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0xff, 0xff, 0xff, 0xff, // undefined length
            0x20, 0x00, 0x0e, 0x00, // (0020,000E) SeriesInstanceUID
            0x06, 0x00, 0x00, 0x00, // len = 6
            b'1', b'.', b'2', b'.', b'3', 0x00,
            0xfe, 0xff, 0x0d, 0xe0, // item delimiter
            0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0xdd, 0xe0, // sequence delimiter
            0x00, 0x00, 0x00, 0x00,
            // -- 46 --
            0x28, 0x00, 0x10, 0x00, // (0028,0010) Rows
            0x02, 0x00, 0x00, 0x00, // len = 2
            0x00, 0x02,
        ];

        let mut dec = implicit_le(DATA);
        let r = reader();
        let seq = r.read_element(&mut dec).unwrap();
        assert_eq!(dec.position(), 46);

        assert_eq!(seq.tag(), Tag(0x0008, 0x1115));
        assert_eq!(seq.vr(), VR::SQ);
        assert!(seq.length().is_undefined());
        let items = seq.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tag(), Tag::ITEM);
        let children = items[0].items().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].vr(), VR::UI);
        assert_eq!(children[0].to_str().unwrap(), "1.2.3");

        let rows = r.read_element(&mut dec).unwrap();
        assert_eq!(rows, us((0x0028, 0x0010), 512));
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn implicit_vr_unknown_tag_is_un() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, // (0009,1010) private element
            0x02, 0x00, 0x00, 0x00,
            0xAB, 0xCD,
        ];
        let mut dec = implicit_le(DATA);
        let elem = reader().read_element(&mut dec).unwrap();
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(elem.bytes().unwrap(), &[0xAB, 0xCD]);

        let mut dec = implicit_le(DATA);
        let stub = DataSetReader::new(StubDataDictionary, Default::default());
        assert_eq!(stub.read_element(&mut dec).unwrap().vr(), VR::UN);
    }

    #[test]
    fn encapsulated_pixel_data() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0,0010) PixelData
            b'O', b'B', 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff, // undefined length
            0xfe, 0xff, 0x00, 0xe0, // item: basic offset table
            0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0x00, 0xe0, // item: fragment
            0x04, 0x00, 0x00, 0x00,
            0x01, 0x02, 0x03, 0x04,
            0xfe, 0xff, 0xdd, 0xe0, // sequence delimiter
            0x00, 0x00, 0x00, 0x00,
        ];
        let mut dec = explicit_le(DATA);
        let elem = reader().read_element(&mut dec).unwrap();
        assert_eq!(elem.vr(), VR::OB);
        assert_eq!(elem.fragments().unwrap(), &[vec![], vec![1, 2, 3, 4]]);
        assert_eq!(dec.position(), DATA.len() as u64);
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn undefined_length_un_is_implicit_vr_sequence() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'U', b'N', 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff, // undefined length
            0xfe, 0xff, 0x00, 0xe0, // item, len = 10
            0x0a, 0x00, 0x00, 0x00,
            0x28, 0x00, 0x11, 0x00, // (0028,0011) Columns, implicit VR
            0x02, 0x00, 0x00, 0x00,
            0x00, 0x01,
            0xfe, 0xff, 0xdd, 0xe0, // sequence delimiter
            0x00, 0x00, 0x00, 0x00,
            // back to explicit VR
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
        ];
        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set(&mut dec);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].vr(), VR::SQ);
        let items = elements[0].items().unwrap();
        assert_eq!(items, &[item(10, vec![us((0x0028, 0x0011), 256)])]);
        assert_eq!(elements[1], us((0x0028, 0x0010), 512));
        assert_eq!(dec.transfer_syntax(), TransferSyntaxContext::explicit_vr_le());
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn specific_character_set_switches_text_decoding() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0a, 0x00, // (0008,0005) SpecificCharacterSet
            b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x0c, 0x00, // (0010,0010) PatientName
            b'S', b'i', b'm', 0xF5, b'e', b's', b'^', b'J', b'o', 0xE3, b'o', b' ',
        ];
        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set(&mut dec);
        assert_eq!(elements[1].to_str().unwrap(), "Simões^João");
        assert_eq!(dec.character_set(), SpecificCharacterSet::IsoIr100);
    }

    #[test]
    fn unsupported_character_set_keeps_the_active_one() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x06, 0x00, // (0008,0005) SpecificCharacterSet
            b'K', b'L', b'I', b'N', b'G', b' ',
        ];
        let mut dec = explicit_le(DATA);
        dec.set_character_set(SpecificCharacterSet::IsoIr192);
        let elements = reader().read_data_set(&mut dec);
        assert_eq!(elements.len(), 1);
        assert_eq!(dec.character_set(), SpecificCharacterSet::IsoIr192);
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn stray_delimiters_at_root_are_skipped() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item delimiter
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
        ];
        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set(&mut dec);
        assert_eq!(elements, vec![us((0x0028, 0x0010), 512)]);
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn read_until_stops_before_tag() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
            0x28, 0x00, 0x11, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
        ];
        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set_until(&mut dec, Some(Tag(0x0028, 0x0011)));
        assert_eq!(elements, vec![us((0x0028, 0x0010), 512)]);
    }

    #[test]
    fn invalid_vr() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
            0x28, 0x00, 0x11, 0x00, b'X', b'X', 0x02, 0x00, 0x00, 0x02,
        ];
        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set(&mut dec);
        assert_eq!(elements.len(), 1);
        let err = dec.finish().unwrap_err();
        assert!(matches!(err, Error::InvalidVr { vr: [b'X', b'X'], position: 10, .. }));
        assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
    }

    #[test]
    fn value_too_long() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x10, 0x00, b'D', b'o', b'e',
        ];
        let mut dec = explicit_le(DATA);
        assert_eq!(reader().read_element(&mut dec), Err(Halted));
        let err = dec.finish().unwrap_err();
        assert!(matches!(err, Error::ValueTooLong { len: 16, remaining: 3, .. }));
    }

    #[test]
    fn undelimited_sequence() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x00, 0xe0, 0x0a, 0x00, 0x00, 0x00, // item, len = 10
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
        ];
        let mut dec = explicit_le(DATA);
        let elements = reader().read_data_set(&mut dec);
        // the partial sequence is kept
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].items().unwrap().len(), 1);
        let err = dec.finish().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndelimitedContainer);
    }

    #[test]
    fn inconsistent_item_end() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0x14, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0x00, 0xe0, 0x06, 0x00, 0x00, 0x00, // item, len = 6
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
            0x00, 0x00,
        ];
        let mut dec = explicit_le(DATA);
        let _ = reader().read_data_set(&mut dec);
        let err = dec.finish().unwrap_err();
        assert!(matches!(
            err,
            Error::InconsistentContainerEnd { end: 26, position: 30, .. }
        ));
    }

    #[test]
    fn max_depth_exceeded() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x00, 0xe0, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];
        let mut dec = explicit_le(DATA);
        let r = DataSetReader::new(StubDataDictionary, DataSetReaderOptions::default().max_depth(1));
        let _ = r.read_data_set(&mut dec);
        let err = dec.finish().unwrap_err();
        assert!(matches!(err, Error::MaxDepthExceeded { max_depth: 1, .. }));

        let mut dec = explicit_le(DATA);
        let r = DataSetReader::new(StubDataDictionary, DataSetReaderOptions::default().max_depth(2));
        let elements = r.read_data_set(&mut dec);
        assert_eq!(elements[0].items().unwrap().len(), 1);
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn data_element_in_sequence_is_unexpected() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0x0a, 0x00, 0x00, 0x00,
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
        ];
        let mut dec = explicit_le(DATA);
        let _ = reader().read_data_set(&mut dec);
        let err = dec.finish().unwrap_err();
        assert!(matches!(err, Error::UnexpectedTag { tag: Tag(0x0028, 0x0010), position: 12, .. }));
    }
}
