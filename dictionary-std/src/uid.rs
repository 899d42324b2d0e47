//! UID dictionary implementation

use std::collections::HashMap;

use dcm_core::dictionary::{UidDictionary, UidDictionaryEntryRef};
use once_cell::sync::Lazy;

use crate::uids::ENTRIES;

static DICT: Lazy<StandardUidRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard UID registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardUidDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardUidRegistry {
    &DICT
}

/// The data struct actually containing the standard UID dictionary.
///
/// This structure is made opaque via the unit type [`StandardUidDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardUidRegistry {
    /// mapping: keyword → entry
    by_keyword: HashMap<&'static str, &'static UidDictionaryEntryRef<'static>>,
    /// mapping: uid → entry
    by_uid: HashMap<&'static str, &'static UidDictionaryEntryRef<'static>>,
}

impl StandardUidRegistry {
    fn new() -> StandardUidRegistry {
        StandardUidRegistry {
            by_keyword: HashMap::with_capacity(ENTRIES.len()),
            by_uid: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record all of the given dictionary entries
    fn index_all(&mut self, entries: &'static [UidDictionaryEntryRef<'static>]) -> &mut Self {
        let entries_by_keyword = entries.iter().map(|e| (e.alias, e));
        self.by_keyword.extend(entries_by_keyword);

        let entries_by_uid = entries.iter().map(|e| (e.uid, e));
        self.by_uid.extend(entries_by_uid);

        self
    }
}

impl UidDictionary for StandardUidRegistry {
    type Entry = UidDictionaryEntryRef<'static>;

    #[inline]
    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry> {
        self.by_keyword.get(keyword).copied()
    }

    #[inline]
    fn by_uid(&self, uid: &str) -> Option<&Self::Entry> {
        self.by_uid.get(uid).copied()
    }
}

/// A UID dictionary which consults
/// the library's global registry of normative DICOM UIDs.
///
/// This is the dictionary used to tell whether a UID
/// found in a file names a transfer syntax,
/// a SOP class, or something else entirely.
/// Note that the [`uids`](crate::uids) module
/// already provides easy to use constants for these UIDs.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct StandardUidDictionary;

impl UidDictionary for StandardUidDictionary {
    type Entry = UidDictionaryEntryRef<'static>;

    #[inline]
    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry> {
        DICT.by_keyword(keyword)
    }

    #[inline]
    fn by_uid(&self, uid: &str) -> Option<&Self::Entry> {
        DICT.by_uid(uid)
    }
}

fn init_dictionary() -> StandardUidRegistry {
    let mut d = StandardUidRegistry::new();
    d.index_all(ENTRIES);
    d
}

#[cfg(test)]
mod tests {
    use crate::StandardUidDictionary;
    use dcm_core::dictionary::{UidDictionary, UidDictionaryEntry, UidDictionaryEntryRef, UidType};

    // tests for just a few UIDs to make sure that the entries
    // were well installed into the dictionary index
    #[test]
    fn can_fetch_sop_classes() {
        let dict = StandardUidDictionary::default();

        let entry = dict.by_uid("1.2.840.10008.1.1");
        assert_eq!(
            entry,
            Some(&UidDictionaryEntryRef {
                uid: "1.2.840.10008.1.1",
                alias: "VerificationSOPClass",
                name: "Verification SOP Class",
                retired: false,
                r#type: UidType::SopClass,
            })
        );

        let entry = dict.by_uid(crate::uids::CT_IMAGE_STORAGE).unwrap();
        assert_eq!(entry.uid_type(), UidType::SopClass);
        assert_eq!(entry.name(), "CT Image Storage");
    }

    #[test]
    fn can_fetch_transfer_syntaxes() {
        let dict = StandardUidDictionary;

        let entry = dict.by_uid("1.2.840.10008.1.2").unwrap();
        assert_eq!(entry.uid_type(), UidType::TransferSyntax);
        assert!(!entry.is_retired());

        let entry = dict.by_uid("1.2.840.10008.1.2.2").unwrap();
        assert_eq!(entry.uid_type(), UidType::TransferSyntax);
        assert!(entry.is_retired());

        // JPEG baseline is registered, even if not decodable here
        let entry = dict.by_uid("1.2.840.10008.1.2.4.50").unwrap();
        assert_eq!(entry.uid_type(), UidType::TransferSyntax);

        let entry = dict.by_keyword("ExplicitVRLittleEndian").unwrap();
        assert_eq!(entry.uid(), "1.2.840.10008.1.2.1");
    }

    #[test]
    fn unknown_uids_are_absent() {
        let dict = StandardUidDictionary;
        assert_eq!(dict.by_uid("9.9.9.9"), None);
        assert_eq!(dict.by_uid(""), None);
        assert_eq!(dict.by_keyword("NoSuchThing"), None);
    }
}
