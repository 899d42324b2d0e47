//! Implementation of Deflated Explicit VR Little Endian.
use std::io::Read;

use flate2::read::DeflateDecoder;

/// Immaterial type representing an adapter for deflated data.
///
/// The data set of a deflated file is a raw deflate stream
/// (no zlib header) starting right after the file meta group.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct FlateAdapter;

impl FlateAdapter {
    /// Wrap the given reader so that reading from it
    /// yields the inflated data set.
    pub fn adapt_reader<R: Read>(&self, reader: R) -> DeflateDecoder<R> {
        DeflateDecoder::new(reader)
    }

    /// Inflate the whole reader into a new buffer.
    pub fn inflate_all<R: Read>(&self, reader: R) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.adapt_reader(reader).read_to_end(&mut out)?;
        Ok(out)
    }
}
