//! Canonicalization of transfer syntax UIDs
//! against the standard UID dictionary.

use dcm_core::dictionary::UidType;
use dcm_dictionary_std::uids;
use dcm_transfer_syntax_registry::{canonicalize, resolve_encoding, Error};

#[test]
fn canonical_uids_are_returned_unchanged() {
    for uid in &[
        "1.2.840.10008.1.2",
        "1.2.840.10008.1.2.1",
        "1.2.840.10008.1.2.2",
        "1.2.840.10008.1.2.1.99",
    ] {
        assert_eq!(canonicalize(uid).unwrap(), *uid);
    }
}

#[test]
fn padded_uid_is_trimmed() {
    assert_eq!(
        canonicalize("1.2.840.10008.1.2.1\0").unwrap(),
        "1.2.840.10008.1.2.1"
    );
}

#[test]
fn unknown_uid() {
    let err = canonicalize("9.9.9.9").unwrap_err();
    assert!(matches!(err, Error::UnknownUid { ref uid, .. } if uid == "9.9.9.9"));
    assert!(resolve_encoding("9.9.9.9").is_err());
}

#[test]
fn sop_class_is_not_a_transfer_syntax() {
    let err = canonicalize(uids::CT_IMAGE_STORAGE).unwrap_err();
    assert!(matches!(
        err,
        Error::NotATransferSyntax {
            uid_type: UidType::SopClass,
            ..
        }
    ));

    let err = canonicalize(uids::VERIFICATION).unwrap_err();
    assert_eq!(
        err.to_string(),
        "UID `1.2.840.10008.1.1` is a SOP Class, not a transfer syntax"
    );
}

#[test]
fn registered_transfer_syntax_falls_back_to_explicit_vr_little_endian() {
    assert_eq!(
        canonicalize(uids::JPEG_BASELINE8_BIT).unwrap(),
        "1.2.840.10008.1.2.1"
    );
    assert_eq!(
        resolve_encoding(uids::JPEG_BASELINE8_BIT).unwrap(),
        resolve_encoding("1.2.840.10008.1.2.1").unwrap()
    );
}

#[test]
fn canonicalize_is_idempotent() {
    for uid in &[
        "1.2.840.10008.1.2",
        "1.2.840.10008.1.2.2",
        "1.2.840.10008.1.2.1.99\0",
        uids::JPEG_BASELINE8_BIT,
        uids::RLE_LOSSLESS,
    ] {
        let once = canonicalize(uid).unwrap();
        assert_eq!(canonicalize(once).unwrap(), once);
    }
}
