//! Data element dictionary implementation

use crate::tags::{ENTRIES, REPEATING_ELEMENTS, REPEATING_GROUPS};
use dcm_core::dictionary::{DataDictionary, DictionaryEntryRef};
use dcm_core::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntryRef<'static>>,
    /// repeating elements of the form (ggxx, eeee). The `xx` portion is zeroed.
    repeating_ggxx: HashSet<Tag>,
    /// repeating elements of the form (gggg, eexx). The `xx` portion is zeroed.
    repeating_eexx: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len() + 2),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            repeating_ggxx: REPEATING_GROUPS.iter().copied().collect(),
            repeating_eexx: REPEATING_ELEMENTS.iter().copied().collect(),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        self
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VR::UL,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: Tag(0x0009, 0x0010),
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when reading implicit VR data sets.
///
/// The dictionary index is automatically initialized upon the first use.
///
/// Only the attributes listed in [`tags`](crate::tags) are known:
/// the file meta group, the item tags,
/// and the attributes most commonly found in image storage objects,
/// including the repeating overlay and curve groups.
/// Generic group lengths and private creators are resolved by rule.
/// Any other attribute, standard or private, has no entry,
/// so an implicit VR reader decodes it as `UN` bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DictionaryEntryRef<'static>> {
        let r = registry();

        r.by_tag
            .get(&tag)
            .or_else(|| {
                // check tags repeating in different groups
                let group_trimmed = Tag(tag.0 & 0xFF00, tag.1);
                if r.repeating_ggxx.contains(&group_trimmed) {
                    return r.by_tag.get(&group_trimmed);
                }
                // check tags repeating in different elements
                let elem_trimmed = Tag(tag.0, tag.1 & 0xFF00);
                if r.repeating_eexx.contains(&elem_trimmed) {
                    return r.by_tag.get(&elem_trimmed);
                }

                None
            })
            .copied()
            .or_else(|| {
                // check for private creator
                if tag.is_private() && (0x0010..=0x00FF).contains(&tag.1) {
                    return Some(&PRIVATE_CREATOR_ENTRY);
                }
                // check for group length
                if tag.element() == 0x0000 {
                    return Some(&GROUP_LENGTH_ENTRY);
                }

                None
            })
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic entries are not part of the table,
    // make them reachable by name
    d.by_name.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);
    d.by_name.insert("PrivateCreator", &PRIVATE_CREATOR_ENTRY);
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dcm_core::dictionary::{DataDictionary, DictionaryEntryRef};
    use dcm_core::header::{Tag, VR};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DictionaryEntryRef {
                tag: Tag(0x0010, 0x0010),
                alias: "PatientName",
                vr: VR::PN,
            })
        );

        assert_eq!(
            dict.by_name("Modality"),
            Some(&DictionaryEntryRef {
                tag: Tag(0x0008, 0x0060),
                alias: "Modality",
                vr: VR::CS,
            })
        );

        let sop_instance_uid = dict
            .by_tag(Tag(0x0008, 0x0018))
            .expect("SOP Instance UID attribute should exist");
        assert_eq!(sop_instance_uid.alias, "SOPInstanceUID");
        assert_eq!(sop_instance_uid.vr, VR::UI);

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.alias, "PixelData");
        assert!(pixel_data.vr == VR::OB || pixel_data.vr == VR::OW);
    }

    #[test]
    fn repeating_groups_and_elements() {
        let dict = StandardDataDictionary;

        let overlay_data = dict
            .by_tag(Tag(0x6000, 0x3000))
            .expect("Overlay Data attribute should exist");
        assert_eq!(overlay_data.alias, "OverlayData");

        // repeated overlay data
        let overlay_data = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Tag(0x6000, 0x3000));
        assert_eq!(overlay_data.alias, "OverlayData");

        let source_image_ids = dict
            .by_tag(Tag(0x0020, 0x3105))
            .expect("Source Image IDs attribute should exist");
        assert_eq!(source_image_ids.alias, "SourceImageIDs");
        assert_eq!(source_image_ids.vr, VR::CS);
    }

    #[test]
    fn attributes_outside_the_table_are_unknown() {
        let dict = StandardDataDictionary;
        // Laterality
        assert_eq!(dict.by_tag(Tag(0x0020, 0x0060)), None);
        assert_eq!(dict.by_name("Laterality"), None);
        // resolved by rule
        assert_eq!(dict.by_tag(Tag(0x0020, 0x0000)).map(|e| e.vr), Some(VR::UL));
        assert_eq!(dict.by_tag(Tag(0x0029, 0x0010)).map(|e| e.vr), Some(VR::LO));
    }

    // tests for just a few attributes to make sure that the tag constants
    // were well installed into the crate
    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(STATUS, Tag(0x0000, 0x0900));
        assert_eq!(TRANSFER_SYNTAX_UID, Tag(0x0002, 0x0010));
        assert_eq!(SPECIFIC_CHARACTER_SET, Tag(0x0008, 0x0005));
    }

    #[test]
    fn has_group_length_tags() {
        use crate::tags::*;
        assert_eq!(COMMAND_GROUP_LENGTH, Tag(0x0000, 0x0000));
        assert_eq!(FILE_META_INFORMATION_GROUP_LENGTH, Tag(0x0002, 0x0000));

        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_tag(FILE_META_INFORMATION_GROUP_LENGTH),
            Some(&DictionaryEntryRef {
                tag: FILE_META_INFORMATION_GROUP_LENGTH,
                alias: "FileMetaInformationGroupLength",
                vr: VR::UL,
            }),
        );

        // generic group length
        let entry = dict.by_tag(Tag(0x7FE0, 0x0000)).unwrap();
        assert_eq!(entry.alias, "GenericGroupLength");
        assert_eq!(entry.vr, VR::UL);

        assert_eq!(
            dict.by_name("GenericGroupLength").map(|e| e.vr),
            Some(VR::UL)
        );
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary::default();

        for tag in &[
            Tag(0x0009, 0x0010),
            Tag(0x0009, 0x0011),
            Tag(0x000B, 0x0010),
            Tag(0x00ED, 0x00FF),
        ] {
            let entry = dict.by_tag(*tag).unwrap();
            assert_eq!(entry.alias, "PrivateCreator");
            assert_eq!(entry.vr, VR::LO);
        }

        // private data elements are unknown
        assert_eq!(dict.by_tag(Tag(0x0009, 0x1001)), None);
    }

    #[test]
    fn item_tags_have_no_vr() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.by_tag(Tag::ITEM).map(|e| e.vr), Some(VR::NA));
        assert_eq!(
            dict.by_tag(Tag::SEQUENCE_DELIMITER).map(|e| e.alias),
            Some("SequenceDelimitationItem")
        );
    }
}
