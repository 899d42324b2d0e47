//! Interpretation of DICOM data sets as trees of data elements.
//!
//! The [`DataSetReader`] drives a [`StatefulDecoder`](crate::StatefulDecoder)
//! to read one data element at a time,
//! recursing into sequences and items.

pub mod read;

pub use self::read::{DataSetReader, DataSetReaderOptions, DEFAULT_MAX_DEPTH};
