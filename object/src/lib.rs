//! This crate contains the high-level API for decoding DICOM files.
//! A decoded file is an ordered list of data elements,
//! the file meta group first,
//! in which sequences hold their items and items hold their nested data sets.
//!
//! Decoding a DICOM file held in memory can be done with [`parse_bytes`].
//! For additional reading options, use [`ParseOptions`].
//!
//! # Examples
//!
//! Read a file and fetch some attributes:
//!
//! ```no_run
//! use dcm_dictionary_std::tags;
//! # fn foo(data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
//! let file = dcm_object::parse_bytes(data)?;
//!
//! let patient_name = file.element(tags::PATIENT_NAME)?.to_str()?;
//! let modality = file.element_by_name("Modality")?.to_str()?;
//! # Ok(())
//! # }
//! ```
//!
//! Elements can be fetched by tag,
//! either by creating a [`Tag`]
//! or by using one of the [readily available constants][const]
//! from the `dcm-dictionary-std` crate.
//!
//! [const]: dcm_dictionary_std::tags
//!
//! The pixel data and the elements after it can be left out
//! by using [`ParseOptions`]:
//!
//! ```no_run
//! use dcm_object::ParseOptions;
//! # fn foo(data: &[u8]) -> Result<(), dcm_object::Error> {
//!
//! let file = ParseOptions::new()
//!     .read_until(dcm_dictionary_std::tags::PIXEL_DATA)
//!     .parse_bytes(data)?;
//! # Ok(())
//! # }
//! ```
//!
//! When the file is malformed,
//! [`ParseOptions::parse_partial`] still returns
//! the elements decoded before the first error.
pub mod file;
pub mod mem;
pub mod meta;

pub use crate::file::{parse, parse_bytes, CharacterSetScope, ParseOptions, ReadPreamble};
pub use crate::mem::{find_element_by_name, find_element_by_name_with, find_element_by_tag, DicomFile};
pub use crate::meta::FileMetaTable;
pub use dcm_core::{DataElement, Tag, Value, VR};
pub use dcm_dictionary_std::StandardDataDictionary;
pub use dcm_parser::ErrorKind;

use dcm_core::value::CastValueError;
use snafu::{Backtrace, Snafu};

/// The error type for decoding a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The magic code `DICM` was not found where expected.
    #[snafu(display("Invalid DICOM data: magic code not found"))]
    NotDicom { backtrace: Backtrace },
    /// A required file meta group element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },
    /// A file meta group element holds a value of an unexpected kind.
    #[snafu(display("Unexpected value in data element `{}`", alias))]
    UnexpectedElementValue {
        alias: &'static str,
        source: CastValueError,
        backtrace: Backtrace,
    },
    /// The transfer syntax of the file could not be resolved.
    #[snafu(display("Could not resolve transfer syntax"))]
    ResolveTransferSyntax {
        #[snafu(backtrace)]
        source: dcm_transfer_syntax_registry::Error,
    },
    /// The data set could not be decoded.
    #[snafu(display("Could not decode data set"))]
    DecodeDataSet {
        #[snafu(backtrace)]
        source: dcm_parser::Error,
    },
    /// A deflated data set could not be inflated.
    #[snafu(display("Could not inflate data set"))]
    InflateDataSet {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotDicom { .. } | Error::UnexpectedElementValue { .. } => {
                ErrorKind::MalformedEncoding
            }
            Error::MissingElement { .. } => ErrorKind::MissingRequiredElement,
            Error::ResolveTransferSyntax { source } => match source {
                dcm_transfer_syntax_registry::Error::UnknownUid { .. } => ErrorKind::UnknownUid,
                dcm_transfer_syntax_registry::Error::NotATransferSyntax { .. } => {
                    ErrorKind::NotATransferSyntax
                }
                _ => ErrorKind::UnknownUid,
            },
            Error::DecodeDataSet { source } => source.kind(),
            Error::InflateDataSet { .. } => ErrorKind::Io,
        }
    }
}

/// An error looking up an element by tag.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
}

/// An error looking up an element by attribute name.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessByNameError {
    /// The attribute is known, but no element has its tag.
    #[snafu(display("No such data element {} (with tag {})", name, tag))]
    NoSuchAttributeName {
        name: String,
        tag: Tag,
        backtrace: Backtrace,
    },
    /// The data dictionary has no attribute with this name.
    #[snafu(display("Unknown data attribute named `{}`", name))]
    UnknownAttributeName { name: String, backtrace: Backtrace },
}
