//! Error types of the data set parser.
use dcm_core::{Length, Tag, VR};
use dcm_encoding::text::DecodeTextError;
use snafu::{Backtrace, Snafu};
use std::fmt;

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for decoding a DICOM data set.
///
/// The stateful decoder keeps only the first error raised,
/// see [`StatefulDecoder::finish`](crate::StatefulDecoder::finish).
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A read would go past the end of the bounded input.
    #[snafu(display(
        "Unexpected end of input at position {}: {} bytes requested, {} remaining",
        position,
        requested,
        remaining
    ))]
    UnexpectedEof {
        position: u64,
        requested: u64,
        remaining: u64,
        backtrace: Backtrace,
    },
    /// The byte source failed for a reason other than reaching its end.
    #[snafu(display("Could not read from source at position {}", position))]
    ReadSource {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// The two bytes after an explicit VR element tag are not a known VR.
    #[snafu(display(
        "Invalid value representation {} for element {} at position {}",
        DisplayVr(*vr),
        tag,
        position
    ))]
    InvalidVr {
        tag: Tag,
        vr: [u8; 2],
        position: u64,
        backtrace: Backtrace,
    },
    /// The value length of an element goes past the end of the input.
    #[snafu(display(
        "Element {} at position {} has length {}, but only {} bytes remain",
        tag,
        position,
        len,
        remaining
    ))]
    ValueTooLong {
        tag: Tag,
        len: u32,
        remaining: u64,
        position: u64,
        backtrace: Backtrace,
    },
    /// An element which can only have a defined length has an undefined one.
    #[snafu(display("Element {} of VR {} has an undefined length", tag, vr))]
    UndefinedValueLength {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },
    /// An item or sequence delimiter with a non-zero length.
    #[snafu(display("Delimiter {} has non-zero length {}", tag, len))]
    InvalidDelimiterLength {
        tag: Tag,
        len: Length,
        backtrace: Backtrace,
    },
    /// An element tag which cannot occur at this point of the data set,
    /// such as a data element directly inside a sequence
    /// or a delimiter which does not close the current container.
    #[snafu(display("Unexpected tag {} at position {}", tag, position))]
    UnexpectedTag {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    /// The content of a defined length container
    /// goes past the container's declared end.
    #[snafu(display(
        "Inconsistent end of {}: expected end at position {}, but read up to {}",
        tag,
        end,
        position
    ))]
    InconsistentContainerEnd {
        tag: Tag,
        end: u64,
        position: u64,
        backtrace: Backtrace,
    },
    /// The input ended inside an undefined length container.
    #[snafu(display(
        "Undefined length container {} was not delimited before the end of input at position {}",
        tag,
        position
    ))]
    UndelimitedContainer {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    /// Containers are nested deeper than allowed.
    #[snafu(display(
        "Maximum nesting depth of {} exceeded by {} at position {}",
        max_depth,
        tag,
        position
    ))]
    MaxDepthExceeded {
        tag: Tag,
        max_depth: u32,
        position: u64,
        backtrace: Backtrace,
    },
    /// Text could not be decoded with the active coding system.
    #[snafu(display("Could not decode text at position {}", position))]
    DecodeText {
        position: u64,
        #[snafu(backtrace)]
        source: DecodeTextError,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            Error::ReadSource { .. } => ErrorKind::Io,
            Error::UndelimitedContainer { .. } => ErrorKind::UndelimitedContainer,
            Error::InvalidVr { .. }
            | Error::ValueTooLong { .. }
            | Error::UndefinedValueLength { .. }
            | Error::InvalidDelimiterLength { .. }
            | Error::UnexpectedTag { .. }
            | Error::InconsistentContainerEnd { .. }
            | Error::MaxDepthExceeded { .. }
            | Error::DecodeText { .. } => ErrorKind::MalformedEncoding,
        }
    }
}

/// The broad categories of failure when decoding a DICOM file.
///
/// Errors of this crate and of the file level API
/// can all be classified into one of these.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A UID is not in the UID registry.
    UnknownUid,
    /// A UID is registered, but does not identify a transfer syntax.
    NotATransferSyntax,
    /// The file meta group lacks a required element.
    MissingRequiredElement,
    /// The content does not follow the encoding rules:
    /// bad magic code, bad VR, impossible length, bad nesting.
    MalformedEncoding,
    /// A read went past the declared end of the input.
    UnexpectedEof,
    /// An undefined length container was never closed.
    UndelimitedContainer,
    /// The underlying byte source failed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::UnknownUid => "unknown UID",
            ErrorKind::NotATransferSyntax => "not a transfer syntax",
            ErrorKind::MissingRequiredElement => "missing required element",
            ErrorKind::MalformedEncoding => "malformed encoding",
            ErrorKind::UnexpectedEof => "unexpected end of input",
            ErrorKind::UndelimitedContainer => "undelimited container",
            ErrorKind::Io => "I/O error",
        };
        f.write_str(s)
    }
}

/// Show the two bytes of a VR field,
/// escaping those which are not printable.
struct DisplayVr([u8; 2]);

impl fmt::Display for DisplayVr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`")?;
        for b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", *b as char)?;
            } else {
                write!(f, "\\x{:02X}", b)?;
            }
        }
        f.write_str("`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_vr_is_shown_escaped() {
        let err = InvalidVrSnafu {
            tag: Tag(0x0010, 0x0010),
            vr: *b"P\x01",
            position: 12_u64,
        }
        .build();
        assert_eq!(
            err.to_string(),
            "Invalid value representation `P\\x01` for element (0010,0010) at position 12"
        );
        assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
    }
}
