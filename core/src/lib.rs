#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the decoder, containing the concepts
//! and data structures shared by all other crates of the workspace.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises various data types for DICOM element headers,
//!   including common definitions for DICOM tags and value representations,
//!   and the decoded [`DataElement`] itself.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries
//!   and UID dictionaries,
//!   which translate attribute names, tags and UIDs
//!   to a dictionary entry containing relevant information about them.
//! - [`value`] holds the closed set of value variants
//!   a decoded element can hold.

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::{DataDictionary, UidDictionary};
pub use header::{DataElement, DataElementHeader, HasLength, Header, Length, Tag, VR};
pub use value::{CastValueError, Value, ValueType};

// re-export crates that are part of the public API
pub use smallvec;
