use crate::mem::DicomFile;
use crate::meta::{self, FileMetaTable, DICM_MAGIC_CODE};
use crate::{DecodeDataSetSnafu, NotDicomSnafu, ResolveTransferSyntaxSnafu, Result};
use dcm_core::dictionary::DataDictionary;
use dcm_core::{DataElement, Tag};
use dcm_dictionary_std::StandardDataDictionary;
use dcm_encoding::TransferSyntaxContext;
use dcm_parser::dataset::DEFAULT_MAX_DEPTH;
use dcm_parser::{DataSetReader, DataSetReaderOptions, Halted, StatefulDecoder};
use dcm_transfer_syntax_registry::TransferSyntax;
use snafu::{ensure, ResultExt};
use std::io::Read;
use tracing::debug;

pub use dcm_parser::CharacterSetScope;

/// The length of the file preamble, in bytes.
pub const PREAMBLE_LEN: u64 = 128;

/// Create a DICOM file by reading from a byte source of the given length.
///
/// This function assumes the standard file encoding structure:
/// 128-byte preamble, magic code, file meta group,
/// and the rest of the data set.
pub fn parse<S>(source: S, len: u64) -> Result<DicomFile>
where
    S: Read,
{
    ParseOptions::new().parse(source, len)
}

/// Create a DICOM file from the given bytes.
///
/// See [`parse`].
pub fn parse_bytes(data: &[u8]) -> Result<DicomFile> {
    ParseOptions::new().parse_bytes(data)
}

/// A builder type for decoding a DICOM file with additional options.
///
/// This builder exposes additional properties
/// to configure the reading of a DICOM file.
///
/// # Example
///
/// Create a `ParseOptions`,
/// call adaptor methods in a chain,
/// and finish the operation with [`.parse()`](ParseOptions::parse).
///
/// ```no_run
/// # use dcm_object::{ParseOptions, ReadPreamble};
/// # let data: Vec<u8> = Vec::new();
/// let file = ParseOptions::new()
///     .read_preamble(ReadPreamble::Never)
///     .read_until(dcm_dictionary_std::tags::PIXEL_DATA)
///     .parse_bytes(&data)?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ParseOptions<D = StandardDataDictionary> {
    dictionary: D,
    read_until: Option<Tag>,
    read_preamble: ReadPreamble,
    max_depth: u32,
    character_set_scope: CharacterSetScope,
}

impl<D> Default for ParseOptions<D>
where
    D: Default,
{
    fn default() -> Self {
        ParseOptions {
            dictionary: D::default(),
            read_until: None,
            read_preamble: ReadPreamble::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            character_set_scope: CharacterSetScope::default(),
        }
    }
}

impl ParseOptions {
    /// Create options which read the whole file
    /// with the standard data dictionary.
    pub fn new() -> Self {
        ParseOptions::default()
    }
}

impl<D> ParseOptions<D> {
    /// Set the operation to read only until the given tag is found.
    ///
    /// The reading process ends immediately before this tag,
    /// or any other tag that is next in the standard DICOM tag ordering,
    /// is found in the file's root data set.
    /// An element with the exact tag will be excluded from the output.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.read_until = Some(tag);
        self
    }

    /// Set the operation to read all elements of the data set to the end.
    ///
    /// This is the default behavior.
    pub fn read_all(mut self) -> Self {
        self.read_until = None;
        self
    }

    /// Set whether to read the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the maximum nesting depth of sequences and items.
    ///
    /// Deeper data sets fail to decode.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set how a Specific Character Set element
    /// found inside a sequence affects the rest of the file.
    pub fn character_set_scope(mut self, scope: CharacterSetScope) -> Self {
        self.character_set_scope = scope;
        self
    }

    /// Set the data element dictionary to use when reading the file.
    pub fn dictionary<Di>(self, dict: Di) -> ParseOptions<Di>
    where
        Di: DataDictionary,
    {
        ParseOptions {
            dictionary: dict,
            read_until: self.read_until,
            read_preamble: self.read_preamble,
            max_depth: self.max_depth,
            character_set_scope: self.character_set_scope,
        }
    }
}

impl<D> ParseOptions<D>
where
    D: DataDictionary,
{
    /// Decode a DICOM file from a byte source of the given length.
    pub fn parse<S>(self, source: S, len: u64) -> Result<DicomFile<D>>
    where
        S: Read,
    {
        match self.parse_partial(source, len) {
            (file, None) => Ok(file),
            (_, Some(e)) => Err(e),
        }
    }

    /// Decode a DICOM file from the given bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DicomFile<D>> {
        self.parse(data, data.len() as u64)
    }

    /// Decode a DICOM file from a byte source of the given length,
    /// keeping what was decoded before a failure.
    ///
    /// The returned file holds every element read before the first error,
    /// which is returned alongside it.
    pub fn parse_partial<S>(self, source: S, len: u64) -> (DicomFile<D>, Option<crate::Error>)
    where
        S: Read,
    {
        let reader = DataSetReader::new(
            &self.dictionary,
            DataSetReaderOptions::default().max_depth(self.max_depth),
        );
        let mut dec = StatefulDecoder::new(source, len, TransferSyntaxContext::explicit_vr_le())
            .with_character_set_scope(self.character_set_scope);
        let mut read = ReadState::default();

        let outcome = self.read_file(&reader, &mut dec, &mut read);
        // a halted decoder stops the process before anything else can fail
        let error = match dec.finish().context(DecodeDataSetSnafu) {
            Err(e) => Some(e),
            Ok(()) => outcome.err(),
        };

        (DicomFile::from_parts(read.elements, read.meta, self.dictionary), error)
    }

    fn read_file<Di, S>(
        &self,
        reader: &DataSetReader<Di>,
        dec: &mut StatefulDecoder<S>,
        read: &mut ReadState,
    ) -> Result<()>
    where
        Di: DataDictionary,
        S: Read,
    {
        if self.read_preamble == ReadPreamble::Always && dec.skip_bytes(PREAMBLE_LEN).is_err() {
            return Ok(());
        }
        let magic = match dec.read_bytes(4) {
            Ok(magic) => magic,
            Err(Halted) => return Ok(()),
        };
        ensure!(magic == DICM_MAGIC_CODE, NotDicomSnafu);

        if let Err(Halted) = meta::read_meta_group(reader, dec, &mut read.elements) {
            return Ok(());
        }
        let meta = FileMetaTable::from_elements(&read.elements)?;
        let ts = dcm_transfer_syntax_registry::resolve(meta.transfer_syntax())
            .context(ResolveTransferSyntaxSnafu)?;
        debug!("Transfer syntax: {}", ts);
        read.meta = Some(meta);

        if ts.is_deflated() {
            return self.read_deflated_data_set(reader, dec, ts, read);
        }

        let mut dec = dec.push_transfer_syntax(ts.context());
        let elements = reader.read_data_set_until(&mut *dec, self.read_until);
        read.elements.extend(elements);
        Ok(())
    }

    #[cfg(feature = "deflate")]
    fn read_deflated_data_set<Di, S>(
        &self,
        reader: &DataSetReader<Di>,
        dec: &mut StatefulDecoder<S>,
        ts: &TransferSyntax,
        read: &mut ReadState,
    ) -> Result<()>
    where
        Di: DataDictionary,
        S: Read,
    {
        use crate::InflateDataSetSnafu;
        use dcm_transfer_syntax_registry::deflate::FlateAdapter;

        let remaining = dec.remaining_length();
        let deflated = match dec.read_bytes(remaining) {
            Ok(deflated) => deflated,
            Err(Halted) => return Ok(()),
        };
        let inflated = FlateAdapter
            .inflate_all(&deflated[..])
            .context(InflateDataSetSnafu)?;
        debug!("Inflated data set from {} to {} bytes", deflated.len(), inflated.len());

        let mut inner = StatefulDecoder::new(&inflated[..], inflated.len() as u64, ts.context())
            .with_character_set_scope(self.character_set_scope);
        let elements = reader.read_data_set_until(&mut inner, self.read_until);
        read.elements.extend(elements);
        inner.finish().context(DecodeDataSetSnafu)
    }

    #[cfg(not(feature = "deflate"))]
    fn read_deflated_data_set<Di, S>(
        &self,
        reader: &DataSetReader<Di>,
        dec: &mut StatefulDecoder<S>,
        ts: &TransferSyntax,
        read: &mut ReadState,
    ) -> Result<()>
    where
        Di: DataDictionary,
        S: Read,
    {
        tracing::warn!(
            "{} requires the `deflate` feature, decoding the data set as is",
            ts
        );
        let mut dec = dec.push_transfer_syntax(ts.context());
        let elements = reader.read_data_set_until(&mut *dec, self.read_until);
        read.elements.extend(elements);
        Ok(())
    }
}

/// What was decoded so far.
#[derive(Debug, Default)]
struct ReadState {
    elements: Vec<DataElement>,
    meta: Option<FileMetaTable>,
}

/// An enumerate of supported options for
/// whether to read the 128-byte DICOM file preamble.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Never read the preamble,
    /// thus assuming that the source starts at the magic code.
    Never,
    /// Always read the preamble first,
    /// thus assuming that the original source always has it.
    Always,
}

impl Default for ReadPreamble {
    fn default() -> Self {
        ReadPreamble::Always
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_options_read_the_whole_file() {
        let options = ParseOptions::new();
        assert_eq!(options.read_until, None);
        assert_eq!(options.read_preamble, ReadPreamble::Always);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.character_set_scope, CharacterSetScope::Flat);

        let options = options.read_until(Tag(0x7FE0, 0x0010)).max_depth(8);
        assert_eq!(options.read_until, Some(Tag(0x7FE0, 0x0010)));
        assert_eq!(options.read_all().read_until, None);
    }
}
