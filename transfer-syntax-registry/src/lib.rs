//! This crate contains the DICOM transfer syntax registry.
//!
//! The transfer syntax registry maps a DICOM UID of a transfer syntax
//! into the respective transfer syntax specifier,
//! and from there to the [encoding context](TransferSyntaxContext)
//! in which a data set is decoded.
//!
//! The resolver is deliberately permissive:
//! any UID which the standard UID dictionary registers as a transfer syntax,
//! but which is not one of the four canonical ones,
//! is canonicalized to Explicit VR Little Endian.
//!
//! ```
//! # use dcm_transfer_syntax_registry::{canonicalize, resolve_encoding};
//! # use dcm_encoding::Endianness;
//! assert_eq!(canonicalize("1.2.840.10008.1.2\0")?, "1.2.840.10008.1.2");
//!
//! let ctx = resolve_encoding("1.2.840.10008.1.2.2")?;
//! assert_eq!(ctx.endianness, Endianness::Big);
//! assert!(!ctx.implicit_vr);
//! # Ok::<(), dcm_transfer_syntax_registry::Error>(())
//! ```

pub mod entries;

#[cfg(feature = "deflate")]
pub mod deflate;

use dcm_core::dictionary::{UidDictionary, UidDictionaryEntry, UidType};
use dcm_dictionary_std::StandardUidDictionary;
use dcm_encoding::TransferSyntaxContext;
use lazy_static::lazy_static;
use snafu::{Backtrace, Snafu};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// An error resolving a transfer syntax UID.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The UID is not in the UID registry.
    #[snafu(display("Unknown UID `{}`", uid))]
    UnknownUid { uid: String, backtrace: Backtrace },
    /// The UID is registered, but does not identify a transfer syntax.
    #[snafu(display("UID `{}` is a {}, not a transfer syntax", uid, uid_type))]
    NotATransferSyntax {
        uid: String,
        uid_type: UidType,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A transfer syntax specifier:
/// the UID, its name,
/// and the encoding context it implies.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntax {
    uid: &'static str,
    name: &'static str,
    context: TransferSyntaxContext,
    deflated: bool,
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        context: TransferSyntaxContext,
        deflated: bool,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            context,
            deflated,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain the encoding context of data sets in this transfer syntax.
    pub const fn context(&self) -> TransferSyntaxContext {
        self.context
    }

    /// Whether the data set is compressed with deflate.
    pub const fn is_deflated(&self) -> bool {
        self.deflated
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<&'static str, &'static TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> = self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistry {
    /// Obtain a built-in transfer syntax by UID.
    ///
    /// Trailing null characters and spaces are ignored.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<&'static TransferSyntax> {
        self.m.get(trim_uid(uid.as_ref())).copied()
    }

    /// Iterate over all built-in transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TransferSyntax> + '_ {
        self.m.values().copied()
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistry = {
        TransferSyntaxRegistry {
            m: initialize_registry(),
        }
    };
}

fn initialize_registry() -> HashMap<&'static str, &'static TransferSyntax> {
    use crate::entries::*;

    let mut m = HashMap::<&'static str, &'static TransferSyntax>::new();

    // the three base transfer syntaxes
    m.insert(IMPLICIT_VR_LITTLE_ENDIAN.uid(), &IMPLICIT_VR_LITTLE_ENDIAN);
    m.insert(EXPLICIT_VR_LITTLE_ENDIAN.uid(), &EXPLICIT_VR_LITTLE_ENDIAN);
    m.insert(EXPLICIT_VR_BIG_ENDIAN.uid(), &EXPLICIT_VR_BIG_ENDIAN);
    // same encoding as explicit VR little endian once inflated
    m.insert(
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN.uid(),
        &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    );
    m
}

/// Retrieve the default transfer syntax.
pub fn default() -> &'static TransferSyntax {
    &entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &REGISTRY
}

/// UIDs in DICOM values are padded to an even length with a null character,
/// which is not part of the UID.
fn trim_uid(uid: &str) -> &str {
    uid.trim_end_matches(|c: char| c == '\0' || c == ' ')
}

/// Canonicalize a transfer syntax UID
/// against the standard UID dictionary.
///
/// See [`canonicalize_with`].
pub fn canonicalize(uid: &str) -> Result<&'static str> {
    canonicalize_with(&StandardUidDictionary, uid)
}

/// Canonicalize a transfer syntax UID against the given UID dictionary.
///
/// - The four canonical transfer syntaxes
///   (implicit VR little endian, explicit VR little endian,
///   explicit VR big endian, deflated explicit VR little endian)
///   are returned as is.
/// - A UID absent from the dictionary is an [`Error::UnknownUid`].
/// - A UID of another kind is an [`Error::NotATransferSyntax`].
/// - Any other transfer syntax falls back to explicit VR little endian.
///
/// The result is always one of the four canonical UIDs,
/// which makes canonicalization idempotent.
pub fn canonicalize_with<D>(dict: &D, uid: &str) -> Result<&'static str>
where
    D: UidDictionary,
{
    let uid = trim_uid(uid);
    if let Some(ts) = REGISTRY.get(uid) {
        return Ok(ts.uid());
    }

    let entry = match dict.by_uid(uid) {
        Some(entry) => entry,
        None => return UnknownUidSnafu { uid }.fail(),
    };

    match entry.uid_type() {
        UidType::TransferSyntax => {
            warn!(
                "Transfer syntax {} ({}) is not natively supported, decoding as Explicit VR Little Endian",
                entry.name(),
                uid
            );
            Ok(entries::EXPLICIT_VR_LITTLE_ENDIAN.uid())
        }
        uid_type => NotATransferSyntaxSnafu { uid, uid_type }.fail(),
    }
}

/// Canonicalize the UID and retrieve its transfer syntax descriptor.
pub fn resolve(uid: &str) -> Result<&'static TransferSyntax> {
    let canonical = canonicalize(uid)?;
    Ok(match canonical {
        "1.2.840.10008.1.2" => &entries::IMPLICIT_VR_LITTLE_ENDIAN,
        "1.2.840.10008.1.2.1" => &entries::EXPLICIT_VR_LITTLE_ENDIAN,
        "1.2.840.10008.1.2.2" => &entries::EXPLICIT_VR_BIG_ENDIAN,
        "1.2.840.10008.1.2.1.99" => &entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
        other => unreachable!("canonical transfer syntax `{}` has no encoding", other),
    })
}

/// Resolve the encoding context (byte order and implicit VR flag)
/// of the transfer syntax identified by the given UID.
pub fn resolve_encoding(uid: &str) -> Result<TransferSyntaxContext> {
    resolve(uid).map(TransferSyntax::context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcm_encoding::Endianness;

    #[test]
    fn registry_has_the_canonical_transfer_syntaxes() {
        let registry = get_registry();
        assert_eq!(registry.iter().count(), 4);

        let ts = registry.get("1.2.840.10008.1.2.1\0").unwrap();
        assert_eq!(ts.name(), "Explicit VR Little Endian");
        assert_eq!(ts.context(), TransferSyntaxContext::explicit_vr_le());

        assert!(registry.get("1.2.840.10008.1.2.4.50").is_none());
        assert_eq!(default().uid(), "1.2.840.10008.1.2");
    }

    #[test]
    fn canonical_uids_map_to_their_encoding() {
        let ctx = resolve_encoding("1.2.840.10008.1.2").unwrap();
        assert_eq!(ctx, TransferSyntaxContext::new(Endianness::Little, true));
        let ctx = resolve_encoding("1.2.840.10008.1.2.1").unwrap();
        assert_eq!(ctx, TransferSyntaxContext::new(Endianness::Little, false));
        let ctx = resolve_encoding("1.2.840.10008.1.2.1.99").unwrap();
        assert_eq!(ctx, TransferSyntaxContext::new(Endianness::Little, false));
        let ctx = resolve_encoding("1.2.840.10008.1.2.2").unwrap();
        assert_eq!(ctx, TransferSyntaxContext::new(Endianness::Big, false));
    }

    #[test]
    fn only_deflated_is_deflated() {
        assert!(resolve("1.2.840.10008.1.2.1.99").unwrap().is_deflated());
        assert!(!resolve("1.2.840.10008.1.2.1").unwrap().is_deflated());
    }
}
