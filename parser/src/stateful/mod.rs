//! Stateful decoding of DICOM primitive values.
pub mod decode;
