//! The encoding parameters implied by a transfer syntax.

use crate::decode::BasicDecoder;
pub use byteordered::Endianness;

/// The way data elements are laid out on the wire:
/// the byte order of all binary fields,
/// and whether the value representation is present in each header.
///
/// A context is obtained by resolving a transfer syntax UID,
/// and is pushed onto the stateful decoder for as long as it applies.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxContext {
    /// The byte order of numeric fields and values.
    pub endianness: Endianness,
    /// Whether the value representation is omitted from element headers,
    /// in which case it is looked up in the data dictionary.
    pub implicit_vr: bool,
}

impl TransferSyntaxContext {
    /// Create a new encoding context.
    pub const fn new(endianness: Endianness, implicit_vr: bool) -> Self {
        TransferSyntaxContext {
            endianness,
            implicit_vr,
        }
    }

    /// Explicit VR Little Endian,
    /// also the fixed encoding of the file meta group.
    pub const fn explicit_vr_le() -> Self {
        TransferSyntaxContext::new(Endianness::Little, false)
    }

    /// Implicit VR Little Endian, the default transfer syntax.
    pub const fn implicit_vr_le() -> Self {
        TransferSyntaxContext::new(Endianness::Little, true)
    }

    /// Explicit VR Big Endian.
    pub const fn explicit_vr_be() -> Self {
        TransferSyntaxContext::new(Endianness::Big, false)
    }

    /// Whether the value representation is present in element headers.
    #[inline]
    pub fn is_explicit_vr(&self) -> bool {
        !self.implicit_vr
    }

    /// Obtain a primitive decoder for this context's byte order.
    #[inline]
    pub fn basic_decoder(&self) -> BasicDecoder {
        BasicDecoder::new(self.endianness)
    }
}

impl Default for TransferSyntaxContext {
    /// Implicit VR Little Endian.
    fn default() -> Self {
        TransferSyntaxContext::implicit_vr_le()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::BasicDecode;

    #[test]
    fn contexts() {
        let ctx = TransferSyntaxContext::explicit_vr_be();
        assert!(ctx.is_explicit_vr());
        assert_eq!(ctx.basic_decoder().endianness(), Endianness::Big);

        let ctx = TransferSyntaxContext::default();
        assert!(ctx.implicit_vr);
        assert_eq!(ctx.endianness, Endianness::Little);
        assert_ne!(ctx, TransferSyntaxContext::explicit_vr_le());
    }
}
