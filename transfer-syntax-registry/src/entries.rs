//! A list of compiled transfer syntax specifiers.
//!
//! The constants exported here refer to the library's built-in support
//! for DICOM transfer syntaxes.
//! Only the four canonical transfer syntaxes have a descriptor of their own.
//! Other registered transfer syntaxes are canonicalized
//! to [`EXPLICIT_VR_LITTLE_ENDIAN`].

use crate::TransferSyntax;
use byteordered::Endianness;
use dcm_encoding::TransferSyntaxContext;

/// **Fully implemented:** Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    TransferSyntaxContext::new(Endianness::Little, true),
    false,
);

/// **Fully implemented:** Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    TransferSyntaxContext::new(Endianness::Little, false),
    false,
);

/// **Fully implemented:** Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    TransferSyntaxContext::new(Endianness::Big, false),
    false,
);

/// **Implemented:** Deflated Explicit VR Little Endian
///
/// The data set is only inflated with the `deflate` feature;
/// otherwise it is read as plain explicit VR little endian.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.1.99",
    "Deflated Explicit VR Little Endian",
    TransferSyntaxContext::new(Endianness::Little, false),
    true,
);
