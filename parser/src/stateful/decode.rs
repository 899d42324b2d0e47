//! This module provides the stateful decoder:
//! a sequential reader of primitive data over a bounded byte source,
//! aware of the transfer syntax and character set in effect.
//!
//! All read methods share a sticky error discipline.
//! The first failure is recorded in the decoder
//! and every read after it returns [`Halted`] without touching the source.
//! The recorded error is retrieved with [`StatefulDecoder::finish`].

use crate::error::{
    DecodeTextSnafu, Error, ReadSourceSnafu, Result, UndefinedValueLengthSnafu,
    UnexpectedEofSnafu,
};
use dcm_core::value::C;
use dcm_core::{DataElementHeader, Tag, Value, VR};
use dcm_encoding::decode::{BasicDecode, BasicDecoder};
use dcm_encoding::text::{SpecificCharacterSet, TextCodec};
use dcm_encoding::TransferSyntaxContext;
use snafu::{IntoError, ResultExt};
use std::io::Read;
use std::ops::{Deref, DerefMut};
use tracing::warn;

/// Marker returned by the reads of a stateful decoder
/// which has stopped because of an error.
///
/// The error itself is kept in the decoder.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct Halted;

/// Result type of the stateful decoder's reads.
pub type ReadResult<T> = std::result::Result<T, Halted>;

/// How the active character set relates to the nesting of containers.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum CharacterSetScope {
    /// A single active character set for the whole stream.
    /// A Specific Character Set element inside a sequence item
    /// also applies to everything read after the item.
    Flat,
    /// The active character set is saved when a container is entered
    /// and restored when it ends,
    /// so that a Specific Character Set element only applies
    /// until the end of the data set which holds it.
    Scoped,
}

impl Default for CharacterSetScope {
    fn default() -> Self {
        CharacterSetScope::Flat
    }
}

/// A stateful abstraction for the full DICOM content reading process.
///
/// `S` is the type of the byte source,
/// which is never read past the length given at construction.
#[derive(Debug)]
pub struct StatefulDecoder<S> {
    from: S,
    position: u64,
    remaining: u64,
    /// transfer syntax stack, never empty
    ts: Vec<TransferSyntaxContext>,
    basic: BasicDecoder,
    charset: SpecificCharacterSet,
    charset_scope: CharacterSetScope,
    saved_charsets: Vec<SpecificCharacterSet>,
    error: Option<Error>,
}

impl<S> StatefulDecoder<S>
where
    S: Read,
{
    /// Create a new stateful decoder over `len` bytes of the given source,
    /// with a base transfer syntax context
    /// and the default character set.
    pub fn new(from: S, len: u64, ts: TransferSyntaxContext) -> Self {
        StatefulDecoder {
            from,
            position: 0,
            remaining: len,
            basic: ts.basic_decoder(),
            ts: vec![ts],
            charset: SpecificCharacterSet::Default,
            charset_scope: CharacterSetScope::Flat,
            saved_charsets: Vec::new(),
            error: None,
        }
    }

    /// Replace the character set scoping policy.
    pub fn with_character_set_scope(mut self, scope: CharacterSetScope) -> Self {
        self.charset_scope = scope;
        self
    }

    /// The number of bytes read so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The number of bytes which may still be read.
    #[inline]
    pub fn remaining_length(&self) -> u64 {
        self.remaining
    }

    /// Whether an error was recorded.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.error.is_some()
    }

    /// The recorded error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The transfer syntax context currently in effect.
    #[inline]
    pub fn transfer_syntax(&self) -> TransferSyntaxContext {
        // the base context is never popped
        self.ts[self.ts.len() - 1]
    }

    /// The active character set.
    #[inline]
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.charset
    }

    /// Replace the active character set.
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.charset = charset;
    }

    /// Mark the start of a sequence or item.
    ///
    /// With [`CharacterSetScope::Scoped`],
    /// the active character set is saved
    /// until the matching [`exit_container`](Self::exit_container).
    pub fn enter_container(&mut self) {
        if self.charset_scope == CharacterSetScope::Scoped {
            self.saved_charsets.push(self.charset);
        }
    }

    /// Mark the end of a sequence or item.
    pub fn exit_container(&mut self) {
        if self.charset_scope == CharacterSetScope::Scoped {
            if let Some(charset) = self.saved_charsets.pop() {
                self.charset = charset;
            }
        }
    }

    /// Make the given transfer syntax context the current one,
    /// until the returned guard is dropped.
    ///
    /// The guard dereferences to the decoder itself.
    pub fn push_transfer_syntax(&mut self, ts: TransferSyntaxContext) -> TransferSyntaxGuard<'_, S> {
        self.ts.push(ts);
        self.basic = ts.basic_decoder();
        TransferSyntaxGuard { decoder: self }
    }

    fn pop_transfer_syntax(&mut self) {
        if self.ts.len() > 1 {
            self.ts.pop();
        }
        self.basic = self.transfer_syntax().basic_decoder();
    }

    /// Record the given error, unless one was recorded already.
    pub fn fail(&mut self, error: Error) -> Halted {
        if self.error.is_none() {
            self.error = Some(error);
        }
        Halted
    }

    /// Consume the decoder, returning the first error recorded.
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Check that `n` more bytes may be read.
    fn require(&mut self, n: u64) -> ReadResult<()> {
        if self.error.is_some() {
            return Err(Halted);
        }
        if n > self.remaining {
            let e = UnexpectedEofSnafu {
                position: self.position,
                requested: n,
                remaining: self.remaining,
            }
            .build();
            return Err(self.fail(e));
        }
        Ok(())
    }

    fn advance(&mut self, n: u64) {
        self.position += n;
        self.remaining -= n;
    }

    fn io_fail(&mut self, e: std::io::Error, requested: u64) -> Halted {
        let error = if e.kind() == std::io::ErrorKind::UnexpectedEof {
            // the source is shorter than declared
            UnexpectedEofSnafu {
                position: self.position,
                requested,
                remaining: 0_u64,
            }
            .build()
        } else {
            ReadSourceSnafu {
                position: self.position,
            }
            .into_error(e)
        };
        self.fail(error)
    }

    /// Read a primitive value of `width` bytes.
    fn read_with<T, F>(&mut self, width: u64, f: F) -> ReadResult<T>
    where
        F: FnOnce(&BasicDecoder, &mut S) -> std::io::Result<T>,
    {
        self.require(width)?;
        match f(&self.basic, &mut self.from) {
            Ok(v) => {
                self.advance(width);
                Ok(v)
            }
            Err(e) => Err(self.io_fail(e, width)),
        }
    }

    /// Read as many values of `width` bytes as fit in `len` bytes,
    /// skipping any leftover bytes.
    fn read_many<T, F>(
        &mut self,
        tag: Tag,
        len: u32,
        width: usize,
        init: T,
        f: F,
    ) -> ReadResult<C<T>>
    where
        T: Clone,
        F: FnOnce(&BasicDecoder, &mut S, &mut [T]) -> std::io::Result<()>,
    {
        let len = len as usize;
        let n = len / width;
        let leftover = len % width;
        self.require(len as u64)?;

        let mut values: C<T> = C::from_elem(init, n);
        if let Err(e) = f(&self.basic, &mut self.from, &mut values) {
            return Err(self.io_fail(e, len as u64));
        }
        self.advance((n * width) as u64);

        if leftover != 0 {
            warn!(
                "Value length {} of element {} is not a multiple of {}, ignoring {} trailing bytes",
                len, tag, width, leftover
            );
            self.skip_bytes(leftover as u64)?;
        }
        Ok(values)
    }

    /// Read an unsigned 16-bit integer.
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_with(2, |b, s| b.decode_us(s))
    }

    /// Read an unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_with(4, |b, s| b.decode_ul(s))
    }

    /// Read an unsigned 64-bit integer.
    pub fn read_u64(&mut self) -> ReadResult<u64> {
        self.read_with(8, |b, s| b.decode_uv(s))
    }

    /// Read a signed 16-bit integer.
    pub fn read_i16(&mut self) -> ReadResult<i16> {
        self.read_with(2, |b, s| b.decode_ss(s))
    }

    /// Read a signed 32-bit integer.
    pub fn read_i32(&mut self) -> ReadResult<i32> {
        self.read_with(4, |b, s| b.decode_sl(s))
    }

    /// Read a signed 64-bit integer.
    pub fn read_i64(&mut self) -> ReadResult<i64> {
        self.read_with(8, |b, s| b.decode_sv(s))
    }

    /// Read a 32-bit floating point number.
    pub fn read_f32(&mut self) -> ReadResult<f32> {
        self.read_with(4, |b, s| b.decode_fl(s))
    }

    /// Read a 64-bit floating point number.
    pub fn read_f64(&mut self) -> ReadResult<f64> {
        self.read_with(8, |b, s| b.decode_fd(s))
    }

    /// Read an attribute tag: a group number followed by an element number.
    pub fn read_tag(&mut self) -> ReadResult<Tag> {
        let group = self.read_u16()?;
        let element = self.read_u16()?;
        Ok(Tag(group, element))
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: u64) -> ReadResult<Vec<u8>> {
        self.require(n)?;
        let mut buf = vec![0; n as usize];
        if let Err(e) = self.from.read_exact(&mut buf) {
            return Err(self.io_fail(e, n));
        }
        self.advance(n);
        Ok(buf)
    }

    /// Read and discard exactly `n` bytes.
    pub fn skip_bytes(&mut self, n: u64) -> ReadResult<()> {
        self.require(n)?;
        let copied = std::io::copy(&mut (&mut self.from).take(n), &mut std::io::sink());
        match copied {
            Ok(m) if m == n => {
                self.advance(n);
                Ok(())
            }
            Ok(_) => {
                let e = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
                Err(self.io_fail(e, n))
            }
            Err(e) => Err(self.io_fail(e, n)),
        }
    }

    /// Read `n` bytes of text, decoded with the active character set.
    pub fn read_string(&mut self, n: u64) -> ReadResult<String> {
        let codec = self.charset;
        self.read_string_with(n, codec)
    }

    /// Read `n` bytes of text, decoded with the given codec.
    pub fn read_string_with<T>(&mut self, n: u64, codec: T) -> ReadResult<String>
    where
        T: TextCodec,
    {
        let position = self.position;
        let bytes = self.read_bytes(n)?;
        codec
            .decode(&bytes)
            .context(DecodeTextSnafu { position })
            .map_err(|e| self.fail(e))
    }

    /// Read the value of a primitive data element
    /// with the given header, which must have a defined length.
    ///
    /// Textual values are decoded with the active character set
    /// when the VR calls for it and with the default repertoire otherwise,
    /// split on backslashes unless the VR is single-valued,
    /// and stripped of trailing spaces and null characters.
    pub fn read_value(&mut self, header: &DataElementHeader) -> ReadResult<Value> {
        let tag = header.tag;
        let len = match header.len.get() {
            Some(len) => len,
            None => {
                let e = UndefinedValueLengthSnafu { tag, vr: header.vr }.build();
                return Err(self.fail(e));
            }
        };
        if len == 0 {
            return Ok(Value::empty_for(header.vr));
        }

        use VR::*;
        let value = match header.vr {
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR | UT => {
                let text = if header.vr.uses_specific_character_set() {
                    self.read_string(len as u64)?
                } else {
                    self.read_string_with(len as u64, SpecificCharacterSet::Default)?
                };
                Value::Strs(split_text(&text, header.vr.is_single_valued_text()))
            }
            AT => {
                let v = self.read_many(tag, len, 4, Tag(0, 0), |b, s, dst: &mut [Tag]| {
                    let mut raw = [0_u16; 2];
                    for t in dst.iter_mut() {
                        b.decode_us_into(&mut *s, &mut raw)?;
                        *t = Tag(raw[0], raw[1]);
                    }
                    Ok(())
                })?;
                Value::Tags(v)
            }
            US | OW => Value::U16(self.read_many(tag, len, 2, 0, |b, s, dst| {
                b.decode_us_into(s, dst)
            })?),
            SS => Value::I16(self.read_many(tag, len, 2, 0, |b, s, dst| {
                b.decode_ss_into(s, dst)
            })?),
            UL | OL => Value::U32(self.read_many(tag, len, 4, 0, |b, s, dst| {
                b.decode_ul_into(s, dst)
            })?),
            SL => Value::I32(self.read_many(tag, len, 4, 0, |b, s, dst| {
                b.decode_sl_into(s, dst)
            })?),
            UV | OV => Value::U64(self.read_many(tag, len, 8, 0, |b, s, dst| {
                b.decode_uv_into(s, dst)
            })?),
            SV => Value::I64(self.read_many(tag, len, 8, 0, |b, s, dst| {
                b.decode_sv_into(s, dst)
            })?),
            FL | OF => Value::F32(self.read_many(tag, len, 4, 0., |b, s, dst| {
                b.decode_fl_into(s, dst)
            })?),
            FD | OD => Value::F64(self.read_many(tag, len, 8, 0., |b, s, dst| {
                b.decode_fd_into(s, dst)
            })?),
            OB | UN => Value::Bytes(self.read_bytes(len as u64)?),
            SQ | NA => {
                // containers are read by the data set reader
                self.skip_bytes(len as u64)?;
                Value::Sequence(Vec::new())
            }
        };
        Ok(value)
    }
}

/// Split decoded text into its values and strip their padding.
fn split_text(text: &str, single_valued: bool) -> C<String> {
    let text = trim_padding(text);
    if text.is_empty() {
        return C::new();
    }
    if single_valued {
        return std::iter::once(text.to_string()).collect();
    }
    text.split('\\').map(|v| trim_padding(v).to_string()).collect()
}

fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == ' ' || c == '\0')
}

/// Guard of a transfer syntax context pushed onto a stateful decoder.
///
/// The context is popped when the guard is dropped,
/// including on early returns.
#[derive(Debug)]
pub struct TransferSyntaxGuard<'a, S>
where
    S: Read,
{
    decoder: &'a mut StatefulDecoder<S>,
}

impl<'a, S> Deref for TransferSyntaxGuard<'a, S>
where
    S: Read,
{
    type Target = StatefulDecoder<S>;

    fn deref(&self) -> &Self::Target {
        self.decoder
    }
}

impl<'a, S> DerefMut for TransferSyntaxGuard<'a, S>
where
    S: Read,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.decoder
    }
}

impl<'a, S> Drop for TransferSyntaxGuard<'a, S>
where
    S: Read,
{
    fn drop(&mut self) {
        self.decoder.pop_transfer_syntax();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use dcm_core::Length;
    use dcm_encoding::Endianness;

    fn decoder(data: &[u8], ts: TransferSyntaxContext) -> StatefulDecoder<&[u8]> {
        StatefulDecoder::new(data, data.len() as u64, ts)
    }

    #[test]
    fn reads_follow_byte_order() {
        let data: &[u8] = &[0x00, 0x00, 0x00, 0x01, 0x01, 0x00];
        let mut dec = decoder(data, TransferSyntaxContext::explicit_vr_be());
        assert_eq!(dec.read_u32(), Ok(1));
        assert_eq!(dec.read_u16(), Ok(0x0100));
        assert_eq!(dec.position(), 6);
        assert_eq!(dec.remaining_length(), 0);
        assert!(dec.finish().is_ok());

        let mut dec = decoder(data, TransferSyntaxContext::explicit_vr_le());
        assert_eq!(dec.read_u32(), Ok(0x0100_0000));
    }

    #[test]
    fn first_error_is_kept() {
        let data: &[u8] = &[0x01, 0x02, 0x03];
        let mut dec = decoder(data, TransferSyntaxContext::explicit_vr_le());
        assert_eq!(dec.read_u16(), Ok(0x0201));
        assert_eq!(dec.read_u32(), Err(Halted));
        assert_eq!(dec.position(), 2);

        // the remaining byte is there, but the decoder is halted
        assert_eq!(dec.read_bytes(1), Err(Halted));
        let _ = dec.fail(
            crate::error::UnexpectedTagSnafu {
                tag: Tag(0, 0),
                position: 0_u64,
            }
            .build(),
        );

        let err = dec.finish().unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEof {
                position: 2,
                requested: 4,
                remaining: 1,
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn bound_is_respected_over_longer_source() {
        let data: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8];
        let mut dec = StatefulDecoder::new(data, 4, TransferSyntaxContext::explicit_vr_le());
        assert_eq!(dec.read_bytes(4), Ok(vec![1, 2, 3, 4]));
        assert_eq!(dec.read_u16(), Err(Halted));
    }

    #[test]
    fn short_source_is_unexpected_eof() {
        let data: &[u8] = &[1, 2];
        let mut dec = StatefulDecoder::new(data, 100, TransferSyntaxContext::explicit_vr_le());
        assert_eq!(dec.read_u32(), Err(Halted));
        assert_eq!(dec.finish().unwrap_err().kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn transfer_syntax_guard_pops_on_drop() {
        let data: &[u8] = &[0x00, 0x01, 0x00, 0x01];
        let mut dec = decoder(data, TransferSyntaxContext::explicit_vr_le());
        {
            let mut guard = dec.push_transfer_syntax(TransferSyntaxContext::explicit_vr_be());
            assert_eq!(guard.transfer_syntax().endianness, Endianness::Big);
            assert_eq!(guard.read_u16(), Ok(1));
        }
        assert_eq!(dec.transfer_syntax(), TransferSyntaxContext::explicit_vr_le());
        assert_eq!(dec.read_u16(), Ok(0x0100));
    }

    #[test]
    fn text_values_are_split_and_trimmed() {
        let data: &[u8] = b"1.2.3\0";
        let mut dec = decoder(data, TransferSyntaxContext::implicit_vr_le());
        let header = DataElementHeader::new(Tag(0x0008, 0x0018), VR::UI, Length(6));
        assert_eq!(dec.read_value(&header), Ok(Value::strs(vec!["1.2.3"])));

        let data: &[u8] = b"ORIGINAL\\PRIMARY ";
        let mut dec = decoder(data, TransferSyntaxContext::implicit_vr_le());
        let header = DataElementHeader::new(Tag(0x0008, 0x0008), VR::CS, Length(17));
        assert_eq!(
            dec.read_value(&header),
            Ok(Value::strs(vec!["ORIGINAL", "PRIMARY"]))
        );

        let data: &[u8] = b"a\\b ";
        let mut dec = decoder(data, TransferSyntaxContext::implicit_vr_le());
        let header = DataElementHeader::new(Tag(0x0020, 0x4000), VR::LT, Length(4));
        assert_eq!(dec.read_value(&header), Ok(Value::strs(vec!["a\\b"])));

        let data: &[u8] = b"  ";
        let mut dec = decoder(data, TransferSyntaxContext::implicit_vr_le());
        let header = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(2));
        assert_eq!(dec.read_value(&header), Ok(Value::Strs(C::new())));
    }

    #[test]
    fn text_uses_active_character_set_only_where_applicable() {
        let data: &[u8] = b"Sim\xF5es";
        let mut dec = decoder(data, TransferSyntaxContext::implicit_vr_le());
        dec.set_character_set(SpecificCharacterSet::IsoIr100);
        let header = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(6));
        assert_eq!(dec.read_value(&header), Ok(Value::strs(vec!["Simões"])));
    }

    #[test]
    fn numeric_values_with_leftover_bytes() {
        let data: &[u8] = &[0x01, 0x00, 0x02, 0x00, 0xFF];
        let mut dec = decoder(data, TransferSyntaxContext::implicit_vr_le());
        let header = DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(5));
        assert_eq!(dec.read_value(&header), Ok(Value::U16(C::from_slice(&[1, 2]))));
        assert_eq!(dec.position(), 5);
    }

    #[test]
    fn attribute_tags() {
        let data: &[u8] = &[0x10, 0x00, 0x20, 0x00, 0x28, 0x00, 0x10, 0x00];
        let mut dec = decoder(data, TransferSyntaxContext::implicit_vr_le());
        let header = DataElementHeader::new(Tag(0x0020, 0x5000), VR::AT, Length(8));
        assert_eq!(
            dec.read_value(&header),
            Ok(Value::Tags(C::from_slice(&[
                Tag(0x0010, 0x0020),
                Tag(0x0028, 0x0010)
            ])))
        );
    }

    #[test]
    fn empty_value() {
        let mut dec = decoder(&[], TransferSyntaxContext::implicit_vr_le());
        let header = DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(0));
        assert_eq!(dec.read_value(&header), Ok(Value::U16(C::new())));
    }

    #[test]
    fn scoped_character_set_is_restored() {
        let mut dec = decoder(&[], TransferSyntaxContext::implicit_vr_le())
            .with_character_set_scope(CharacterSetScope::Scoped);
        dec.enter_container();
        dec.set_character_set(SpecificCharacterSet::IsoIr192);
        dec.exit_container();
        assert_eq!(dec.character_set(), SpecificCharacterSet::Default);

        let mut dec = decoder(&[], TransferSyntaxContext::implicit_vr_le());
        dec.enter_container();
        dec.set_character_set(SpecificCharacterSet::IsoIr192);
        dec.exit_container();
        assert_eq!(dec.character_set(), SpecificCharacterSet::IsoIr192);
    }
}
