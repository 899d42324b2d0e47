//! This module contains an assortment of types required for interpreting DICOM data elements.
//! It comprises a variety of basic data types, such as the DICOM attribute tag, the
//! value representation, the element header, and the decoded data element itself.

use crate::value::{CastValueError, Value};
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// It is named `length` to make it distinct from the conventional method
    /// signature `len(&self) -> usize` for the number of elements of a
    /// collection.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements, items
    /// and encapsulated pixel data.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
#[allow(clippy::len_without_is_empty)]
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag().is_item()
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag().is_item_delimiter()
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag().is_sequence_delimiter()
    }
}

/// A data type that represents and owns a decoded DICOM data element.
///
/// The element keeps the header exactly as read from the wire,
/// so the length of a container decoded from an undefined length
/// stays undefined.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement {
    header: DataElementHeader,
    value: Value,
}

impl HasLength for DataElement {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl Header for DataElement {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl HasLength for &DataElement {
    #[inline]
    fn length(&self) -> Length {
        (**self).length()
    }
}

impl<'a> Header for &'a DataElement {
    #[inline]
    fn tag(&self) -> Tag {
        (**self).tag()
    }
}

impl DataElement {
    /// Create a data element from the given header and value.
    #[inline]
    pub fn new(header: DataElementHeader, value: Value) -> Self {
        DataElement { header, value }
    }

    /// Create an empty data element,
    /// with a length of zero and an empty value of the kind its VR calls for.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader::new(tag, vr, Length(0)),
            value: Value::empty_for(vr),
        }
    }

    /// Retrieve the element header.
    #[inline]
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.header.vr
    }

    /// Retrieve the data value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Move the data value out of the element, discarding the rest.
    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Macro for implementing getters to single and multi-values,
/// by delegating to `Value`.
///
/// Should be placed inside `DataElement`'s impl block.
macro_rules! impl_primitive_getters {
    ($name_single: ident, $name_multi: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        ///
        /// If it contains multiple values,
        /// only the first one is returned.
        /// An error is returned if the variant is not compatible.
        pub fn $name_single(&self) -> Result<$ret, CastValueError> {
            self.value().$name_single()
        }

        /// Get a sequence of values of the requested type without copying.
        ///
        /// An error is returned if the variant is not compatible.
        pub fn $name_multi(&self) -> Result<&[$ret], CastValueError> {
            self.value().$name_multi()
        }
    };
}

impl DataElement {
    /// Get a single string value.
    ///
    /// If it contains multiple strings,
    /// only the first one is returned.
    ///
    /// An error is returned if the variant is not compatible.
    pub fn string(&self) -> Result<&str, CastValueError> {
        self.value().string()
    }

    /// Get the inner sequence of string values.
    ///
    /// An error is returned if the variant is not compatible.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        self.value().strings()
    }

    /// Get all string values joined by the value separator (`\`).
    pub fn to_str(&self) -> Result<String, CastValueError> {
        self.value().to_str()
    }

    /// Get the raw bytes of an OB/UN value.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        self.value().bytes()
    }

    /// Get the child elements of a sequence or item.
    pub fn items(&self) -> Result<&[DataElement], CastValueError> {
        self.value().items()
    }

    /// Get the fragments of an encapsulated pixel data element.
    pub fn fragments(&self) -> Result<&[Vec<u8>], CastValueError> {
        self.value().fragments()
    }

    /// Get the sequence of attribute tags.
    pub fn tags(&self) -> Result<&[Tag], CastValueError> {
        self.value().tags()
    }

    impl_primitive_getters!(uint16, uint16_slice, u16);
    impl_primitive_getters!(int16, int16_slice, i16);
    impl_primitive_getters!(uint32, uint32_slice, u32);
    impl_primitive_getters!(int32, int32_slice, i32);
    impl_primitive_getters!(uint64, uint64_slice, u64);
    impl_primitive_getters!(int64, int64_slice, i64);
    impl_primitive_getters!(float32, float32_slice, f32);
    impl_primitive_getters!(float64, float64_slice, f64);
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
///
/// Unlike [`Length`] on its own,
/// two headers with undefined lengths and equal tag and VR are equal.
#[derive(Debug, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl PartialEq for DataElementHeader {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.vr == other.vr && self.len.inner_eq(other.len)
    }
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation, which can be unknown.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
    /// Not applicable.
    ///
    /// Items and delimiters (group `FFFE`) carry no value representation,
    /// not even under an explicit VR transfer syntax.
    NA,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    ///
    /// `NA` is never produced, as it has no binary form.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
            .filter(|vr| *vr != VR::NA)
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
            NA => "NA",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether an explicit VR header with this VR
    /// has two reserved bytes followed by a 32-bit length,
    /// as opposed to a 16-bit length.
    pub fn has_extended_length(self) -> bool {
        use VR::*;
        matches!(
            self,
            OB | OD | OF | OL | OV | OW | SQ | SV | UC | UN | UR | UT | UV
        )
    }

    /// Whether values of this VR are decoded with the active
    /// character set rather than the default repertoire.
    pub fn uses_specific_character_set(self) -> bool {
        use VR::*;
        matches!(self, LO | LT | PN | SH | ST | UC | UT)
    }

    /// Whether textual values of this VR are single-valued,
    /// so that the backslash is not a value separator.
    pub fn is_single_valued_text(self) -> bool {
        use VR::*;
        matches!(self, LT | ST | UR | UT)
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            "NA" => Ok(NA),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are totally ordered by group number first, then by element number,
/// which is also the order in which elements appear in a well formed data set.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this is the item tag.
    #[inline]
    pub fn is_item(self) -> bool {
        self == Tag::ITEM
    }

    /// Whether this is the item delimiter tag.
    #[inline]
    pub fn is_item_delimiter(self) -> bool {
        self == Tag::ITEM_DELIMITER
    }

    /// Whether this is the sequence delimiter tag.
    #[inline]
    pub fn is_sequence_delimiter(self) -> bool {
        self == Tag::SEQUENCE_DELIMITER
    }

    /// Whether this tag belongs to the item/delimiter group `FFFE`,
    /// whose headers never carry a value representation.
    #[inline]
    pub fn is_item_group(self) -> bool {
        self.0 == 0xFFFE
    }

    /// Whether this tag belongs to the file meta information group.
    #[inline]
    pub fn is_meta(self) -> bool {
        self.0 == 0x0002
    }

    /// Whether this tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which is then determined
/// by the delimiters found in the content.
///
/// This also means that numeric comparisons
/// do not function the same way as primitive number types:
///
/// Two length of undefined length are not equal.
///
/// ```
/// # use dcm_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
/// ```
///
/// Comparing between at least one undefined length is always `false`.
///
/// ```
/// # use dcm_core::Length;
/// assert!(Length(16) < Length(64));
/// assert!(!(Length::UNDEFINED < Length(64)));
/// assert!(!(Length::UNDEFINED > Length(64)));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }

    /// Check whether the length is equally specified as another length.
    /// Unlike the implemented `PartialEq`, two undefined lengths are
    /// considered equivalent by this method.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tags_are_ordered_by_group_then_element() {
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0010, 0x0000));
        assert!(Tag(0x0010, 0x0010) < Tag(0x0010, 0x0020));
        let mut tags = vec![Tag(0x0020, 0x000D), Tag(0x0008, 0x0018), Tag(0x0008, 0x0005)];
        tags.sort();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0005), Tag(0x0008, 0x0018), Tag(0x0020, 0x000D)]
        );
    }

    #[test]
    fn tag_display_and_debug() {
        assert_eq!(Tag(0x7FE0, 0x0010).to_string(), "(7FE0,0010)");
        assert_eq!(format!("{:?}", Tag(0x0008, 0x0016)), "Tag(0x0008, 0x0016)");
    }

    #[test]
    fn structural_tags() {
        assert!(Tag(0xFFFE, 0xE000).is_item());
        assert!(Tag(0xFFFE, 0xE00D).is_item_delimiter());
        assert!(Tag(0xFFFE, 0xE0DD).is_sequence_delimiter());
        assert!(Tag::SEQUENCE_DELIMITER.is_item_group());
        assert!(!Tag(0x0008, 0x0005).is_item_group());
        assert!(Tag(0x0009, 0x0010).is_private());
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary(*b"UI"), Some(VR::UI));
        assert_eq!(VR::from_binary(*b"SQ"), Some(VR::SQ));
        assert_eq!(VR::from_binary(*b"ZZ"), None);
        assert_eq!(VR::from_binary([0xFF, 0x00]), None);
        // no binary form for NA
        assert_eq!(VR::from_binary(*b"NA"), None);
        assert_eq!(VR::UV.to_bytes(), *b"UV");
    }

    #[test]
    fn vr_length_field_width() {
        for vr in &[
            VR::OB,
            VR::OD,
            VR::OF,
            VR::OL,
            VR::OV,
            VR::OW,
            VR::SQ,
            VR::SV,
            VR::UC,
            VR::UN,
            VR::UR,
            VR::UT,
            VR::UV,
        ] {
            assert!(vr.has_extended_length(), "{} should have a 32-bit length", vr);
        }
        for vr in &[VR::AE, VR::CS, VR::UI, VR::US, VR::UL, VR::FD, VR::AT, VR::LT] {
            assert!(!vr.has_extended_length(), "{} should have a 16-bit length", vr);
        }
    }

    #[test]
    fn undefined_length_semantics() {
        assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
        assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
        assert_eq!(Length(8).get(), Some(8));
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }

    #[test]
    fn containers_of_undefined_length_are_equal_to_themselves() {
        let item = DataElement::new(
            DataElementHeader::new(Tag::ITEM, VR::NA, Length::UNDEFINED),
            Value::Sequence(vec![DataElement::new(
                DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(2)),
                Value::U16(smallvec![512]),
            )]),
        );
        let sequence = DataElement::new(
            DataElementHeader::new(Tag(0x0008, 0x1115), VR::SQ, Length::UNDEFINED),
            Value::Sequence(vec![item]),
        );
        assert_eq!(sequence, sequence.clone());
        assert_eq!(sequence.value(), sequence.value());

        let defined = DataElementHeader::new(Tag(0x0008, 0x1115), VR::SQ, Length(16));
        assert_ne!(*sequence.header(), defined);
        assert_ne!(
            DataElementHeader::new(Tag::ITEM, VR::NA, Length::UNDEFINED),
            DataElementHeader::new(Tag::ITEM_DELIMITER, VR::NA, Length::UNDEFINED)
        );
    }

    #[test]
    fn data_element_getters() {
        let element = DataElement::new(
            DataElementHeader::new(Tag(0x0028, 0x3002), VR::US, Length(6)),
            Value::U16(smallvec![256, 0, 16]),
        );
        assert_eq!(element.uint16_slice().unwrap(), &[256, 0, 16]);
        assert_eq!(element.uint16().unwrap(), 256);
        assert!(element.strings().is_err());

        let element = DataElement::new(
            DataElementHeader::new(Tag(0x0008, 0x0060), VR::CS, Length(2)),
            Value::strs(vec!["MR"]),
        );
        assert_eq!(element.string().unwrap(), "MR");
        assert_eq!(element.tag(), Tag(0x0008, 0x0060));
        assert_eq!(element.vr(), VR::CS);
    }

    #[test]
    fn empty_element_has_vr_appropriate_value() {
        let element = DataElement::empty(Tag(0x0008, 0x1140), VR::SQ);
        assert_eq!(element.items().unwrap().len(), 0);
        let element = DataElement::empty(Tag(0x0010, 0x0010), VR::PN);
        assert_eq!(element.strings().unwrap().len(), 0);
        assert!(element.is_empty());
    }
}
