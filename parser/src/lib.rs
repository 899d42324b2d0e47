//! This crate provides the middle layer of DICOM data set decoding:
//! a stateful decoder of primitive values over a bounded byte source,
//! and a reader which assembles those values into trees of data elements.
//!
//! - [`stateful::decode`] reads tags, lengths, numbers and text
//!   in the transfer syntax and character set currently in effect.
//! - [`dataset`] reads data element headers and values,
//!   recursing into sequences and items.
//!
//! All APIs are based on synchronous I/O.
//! Decoding never panics on malformed input:
//! the first error found is kept in the decoder
//! and retrieved once reading is over.

pub mod dataset;
pub mod error;
pub mod stateful;

pub use dataset::{DataSetReader, DataSetReaderOptions};
pub use error::{Error, ErrorKind, Result};
pub use stateful::decode::{
    CharacterSetScope, Halted, ReadResult, StatefulDecoder, TransferSyntaxGuard,
};
