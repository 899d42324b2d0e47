//! This crate implements the standard DICOM dictionaries and constants.
//!
//! ## Run-time dictionaries
//!
//! The following modules provide definitions for dictionaries
//! which can be queried during a program's lifetime:
//!
//! - [`data_element`]: Contains information about the
//!   DICOM attributes specified in the standard,
//!   and it is used by default to infer the value representation
//!   of elements in implicit VR data sets.
//! - [`uid`]: Contains information about normative DICOM
//!   unique identifiers and their category
//!   (transfer syntax, SOP class, and so on).
//!
//! The records in these dictionaries are collected
//! from [DICOM PS3.6].
//! Each dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;
pub mod tags;
pub mod uid;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
pub use uid::{StandardUidDictionary, StandardUidRegistry};
