//! DICOM decoding primitives.
//!
//! This crate provides the byte-order aware decoding of primitive values,
//! the text codecs selected by the Specific Character Set attribute,
//! and the [transfer syntax context] describing
//! how the data elements of a data set are laid out on the wire.
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! [transfer syntax context]: ./transfer_syntax/struct.TransferSyntaxContext.html

pub mod decode;
pub mod text;
pub mod transfer_syntax;

pub use byteordered;
pub use decode::{BasicDecode, BasicDecoder};
pub use text::{SpecificCharacterSet, TextCodec};
pub use transfer_syntax::{Endianness, TransferSyntaxContext};
