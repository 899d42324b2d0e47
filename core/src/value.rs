//! This module includes the closed representation of a decoded data element's value.
//!
//! Which variant a value takes is decided solely by the element's
//! value representation, as settled by [`Value::empty_for`].

use crate::header::{DataElement, Tag, VR};
use smallvec::SmallVec;
use std::fmt;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// A decoded data element value.
///
/// Multi-valued content keeps the order in which the values were encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An opaque byte blob.
    /// Used for OB and UN.
    Bytes(Vec<u8>),
    /// A sequence of strings, already decoded and stripped of padding.
    /// Used for all textual VRs.
    Strs(C<String>),
    /// A sequence of attribute tags.
    /// Used for AT.
    Tags(C<Tag>),
    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16(C<u16>),
    /// A sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),
    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),
    /// A sequence of signed 32-bit integers.
    /// Used for SL.
    I32(C<i32>),
    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),
    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),
    /// A sequence of 32-bit floating point numbers.
    /// Used for FL and OF.
    F32(C<f32>),
    /// A sequence of 64-bit floating point numbers.
    /// Used for FD and OD.
    F64(C<f64>),
    /// The child elements of a container,
    /// in the order they were read.
    ///
    /// A sequence (SQ) holds one item element per item,
    /// and each item holds the elements of its nested data set.
    Sequence(Vec<DataElement>),
    /// The fragments of encapsulated pixel data,
    /// the first of them being the basic offset table.
    Fragments(Vec<Vec<u8>>),
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This is the equivalent of `Value` without the content.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// An opaque byte blob.
    Bytes,
    /// A sequence of strings.
    Strs,
    /// A sequence of attribute tags.
    Tags,
    /// A sequence of unsigned 16-bit integers.
    U16,
    /// A sequence of signed 16-bit integers.
    I16,
    /// A sequence of unsigned 32-bit integers.
    U32,
    /// A sequence of signed 32-bit integers.
    I32,
    /// A sequence of unsigned 64-bit integers.
    U64,
    /// A sequence of signed 64-bit integers.
    I64,
    /// A sequence of 32-bit floating point numbers.
    F32,
    /// A sequence of 64-bit floating point numbers.
    F64,
    /// Child data elements.
    Sequence,
    /// Encapsulated pixel data fragments.
    Fragments,
}

/// An error type for an attempt of accessing a value
/// in an inappropriate format.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value is {:?}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

/// Macro for implementing getters to single and multi-values
/// of a specific numeric variant.
macro_rules! impl_primitive_getters {
    ($name_single: ident, $name_multi: ident, $variant: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        ///
        /// If it contains multiple values,
        /// only the first one is returned.
        /// An error is returned if the variant is not compatible
        /// or the value is empty.
        pub fn $name_single(&self) -> Result<$ret, CastValueError> {
            match self {
                Value::$variant(c) if !c.is_empty() => Ok(c[0]),
                value => Err(CastValueError {
                    requested: stringify!($name_single),
                    got: value.value_type(),
                }),
            }
        }

        /// Get a sequence of values of the requested type without copying.
        ///
        /// An error is returned if the variant is not compatible.
        pub fn $name_multi(&self) -> Result<&[$ret], CastValueError> {
            match self {
                Value::$variant(c) => Ok(&c[..]),
                value => Err(CastValueError {
                    requested: stringify!($name_multi),
                    got: value.value_type(),
                }),
            }
        }
    };
}

impl Value {
    /// Build a multi-valued string value.
    pub fn strs<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Strs(values.into_iter().map(Into::into).collect())
    }

    /// Obtain an empty value of the variant
    /// which elements of the given value representation decode to.
    pub fn empty_for(vr: VR) -> Self {
        use VR::*;
        match vr {
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR
            | UT => Value::Strs(C::new()),
            AT => Value::Tags(C::new()),
            US | OW => Value::U16(C::new()),
            SS => Value::I16(C::new()),
            UL | OL => Value::U32(C::new()),
            SL => Value::I32(C::new()),
            UV | OV => Value::U64(C::new()),
            SV => Value::I64(C::new()),
            FL | OF => Value::F32(C::new()),
            FD | OD => Value::F64(C::new()),
            OB | UN => Value::Bytes(Vec::new()),
            SQ | NA => Value::Sequence(Vec::new()),
        }
    }

    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bytes(_) => ValueType::Bytes,
            Value::Strs(_) => ValueType::Strs,
            Value::Tags(_) => ValueType::Tags,
            Value::U16(_) => ValueType::U16,
            Value::I16(_) => ValueType::I16,
            Value::U32(_) => ValueType::U32,
            Value::I32(_) => ValueType::I32,
            Value::U64(_) => ValueType::U64,
            Value::I64(_) => ValueType::I64,
            Value::F32(_) => ValueType::F32,
            Value::F64(_) => ValueType::F64,
            Value::Sequence(_) => ValueType::Sequence,
            Value::Fragments(_) => ValueType::Fragments,
        }
    }

    /// Obtain the number of individual values.
    ///
    /// A byte blob counts as a single value,
    /// a container counts its children,
    /// and encapsulated pixel data counts its fragments.
    pub fn multiplicity(&self) -> usize {
        match self {
            Value::Bytes(b) => usize::from(!b.is_empty()),
            Value::Strs(c) => c.len(),
            Value::Tags(c) => c.len(),
            Value::U16(c) => c.len(),
            Value::I16(c) => c.len(),
            Value::U32(c) => c.len(),
            Value::I32(c) => c.len(),
            Value::U64(c) => c.len(),
            Value::I64(c) => c.len(),
            Value::F32(c) => c.len(),
            Value::F64(c) => c.len(),
            Value::Sequence(c) => c.len(),
            Value::Fragments(c) => c.len(),
        }
    }

    /// Get a single string value.
    ///
    /// If it contains multiple strings,
    /// only the first one is returned.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            Value::Strs(c) if !c.is_empty() => Ok(&c[0]),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            Value::Strs(c) => Ok(&c[..]),
            value => Err(CastValueError {
                requested: "strings",
                got: value.value_type(),
            }),
        }
    }

    /// Get all string values joined by the value separator (`\`).
    pub fn to_str(&self) -> Result<String, CastValueError> {
        self.strings().map(|s| s.join("\\"))
    }

    /// Get the sequence of attribute tags.
    pub fn tags(&self) -> Result<&[Tag], CastValueError> {
        match self {
            Value::Tags(c) => Ok(&c[..]),
            value => Err(CastValueError {
                requested: "tags",
                got: value.value_type(),
            }),
        }
    }

    /// Get the raw bytes of a byte blob.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            Value::Bytes(b) => Ok(&b[..]),
            value => Err(CastValueError {
                requested: "bytes",
                got: value.value_type(),
            }),
        }
    }

    /// Get the child elements of a container.
    pub fn items(&self) -> Result<&[DataElement], CastValueError> {
        match self {
            Value::Sequence(items) => Ok(&items[..]),
            value => Err(CastValueError {
                requested: "items",
                got: value.value_type(),
            }),
        }
    }

    /// Get the fragments of encapsulated pixel data.
    pub fn fragments(&self) -> Result<&[Vec<u8>], CastValueError> {
        match self {
            Value::Fragments(f) => Ok(&f[..]),
            value => Err(CastValueError {
                requested: "fragments",
                got: value.value_type(),
            }),
        }
    }

    impl_primitive_getters!(uint16, uint16_slice, U16, u16);
    impl_primitive_getters!(int16, int16_slice, I16, i16);
    impl_primitive_getters!(uint32, uint32_slice, U32, u32);
    impl_primitive_getters!(int32, int32_slice, I32, i32);
    impl_primitive_getters!(uint64, uint64_slice, U64, u64);
    impl_primitive_getters!(int64, int64_slice, I64, i64);
    impl_primitive_getters!(float32, float32_slice, F32, f32);
    impl_primitive_getters!(float64, float64_slice, F64, f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{DataElementHeader, Length};
    use smallvec::smallvec;

    #[test]
    fn empty_value_follows_vr() {
        assert_eq!(Value::empty_for(VR::UI).value_type(), ValueType::Strs);
        assert_eq!(Value::empty_for(VR::AT).value_type(), ValueType::Tags);
        assert_eq!(Value::empty_for(VR::OW).value_type(), ValueType::U16);
        assert_eq!(Value::empty_for(VR::OV).value_type(), ValueType::U64);
        assert_eq!(Value::empty_for(VR::SV).value_type(), ValueType::I64);
        assert_eq!(Value::empty_for(VR::OD).value_type(), ValueType::F64);
        assert_eq!(Value::empty_for(VR::UN).value_type(), ValueType::Bytes);
        assert_eq!(Value::empty_for(VR::SQ).value_type(), ValueType::Sequence);
        assert_eq!(Value::empty_for(VR::NA).value_type(), ValueType::Sequence);
    }

    #[test]
    fn numeric_getters() {
        let value = Value::U32(smallvec![1, 2, 3]);
        assert_eq!(value.uint32().unwrap(), 1);
        assert_eq!(value.uint32_slice().unwrap(), &[1, 2, 3]);
        assert_eq!(value.multiplicity(), 3);

        let err = value.float64().unwrap_err();
        assert_eq!(err.requested, "float64");
        assert_eq!(err.got, ValueType::U32);

        // empty values have no first value
        assert!(Value::F32(C::new()).float32().is_err());
        assert_eq!(Value::F32(C::new()).float32_slice().unwrap(), &[] as &[f32]);
    }

    #[test]
    fn string_getters() {
        let value = Value::strs(vec!["ORIGINAL", "PRIMARY", "AXIAL"]);
        assert_eq!(value.string().unwrap(), "ORIGINAL");
        assert_eq!(value.strings().unwrap().len(), 3);
        assert_eq!(value.to_str().unwrap(), "ORIGINAL\\PRIMARY\\AXIAL");
        assert!(value.bytes().is_err());
    }

    #[test]
    fn container_getters() {
        let child = DataElement::new(
            DataElementHeader::new(Tag(0x0008, 0x1150), VR::UI, Length(6)),
            Value::strs(vec!["1.2.3"]),
        );
        let item = DataElement::new(
            DataElementHeader::new(Tag::ITEM, VR::NA, Length::UNDEFINED),
            Value::Sequence(vec![child.clone()]),
        );
        let value = Value::Sequence(vec![item]);
        let items = value.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].items().unwrap(), &[child]);

        let fragments = Value::Fragments(vec![vec![], vec![0xFF, 0xD8]]);
        assert_eq!(fragments.fragments().unwrap().len(), 2);
        assert_eq!(fragments.multiplicity(), 2);
    }

    #[test]
    fn cast_error_display() {
        let err = Value::Bytes(vec![1]).tags().unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad value cast: requested tags but value is Bytes"
        );
    }
}
