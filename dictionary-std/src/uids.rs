//! UID declarations and the standard UID registry table.
// Automatically generated. Edit at your own risk.
#![allow(deprecated)]

use dcm_core::dictionary::{UidDictionaryEntryRef, UidType};

/// SOP Class: Verification SOP Class
#[rustfmt::skip]
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
#[rustfmt::skip]
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
#[rustfmt::skip]
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Encapsulated Uncompressed Explicit VR Little Endian
#[rustfmt::skip]
pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.98";
/// Transfer Syntax: Deflated Explicit VR Little Endian
#[rustfmt::skip]
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: MPEG2 Main Profile / Main Level
#[rustfmt::skip]
pub const MPEG2MPML: &str = "1.2.840.10008.1.2.4.100";
/// Transfer Syntax: Fragmentable MPEG2 Main Profile / Main Level
#[rustfmt::skip]
pub const MPEG2MPMLF: &str = "1.2.840.10008.1.2.4.100.1";
/// Transfer Syntax: MPEG2 Main Profile / High Level
#[rustfmt::skip]
pub const MPEG2MPHL: &str = "1.2.840.10008.1.2.4.101";
/// Transfer Syntax: Fragmentable MPEG2 Main Profile / High Level
#[rustfmt::skip]
pub const MPEG2MPHLF: &str = "1.2.840.10008.1.2.4.101.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4HP41: &str = "1.2.840.10008.1.2.4.102";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4HP41F: &str = "1.2.840.10008.1.2.4.102.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4HP41BD: &str = "1.2.840.10008.1.2.4.103";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4HP41BDF: &str = "1.2.840.10008.1.2.4.103.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
#[rustfmt::skip]
pub const MPEG4HP422D: &str = "1.2.840.10008.1.2.4.104";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
#[rustfmt::skip]
pub const MPEG4HP422DF: &str = "1.2.840.10008.1.2.4.104.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
#[rustfmt::skip]
pub const MPEG4HP423D: &str = "1.2.840.10008.1.2.4.105";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
#[rustfmt::skip]
pub const MPEG4HP423DF: &str = "1.2.840.10008.1.2.4.105.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
#[rustfmt::skip]
pub const MPEG4HP42STEREO: &str = "1.2.840.10008.1.2.4.106";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
#[rustfmt::skip]
pub const MPEG4HP42STEREOF: &str = "1.2.840.10008.1.2.4.106.1";
/// Transfer Syntax: HEVC/H.265 Main Profile / Level 5.1
#[rustfmt::skip]
pub const HEVCMP51: &str = "1.2.840.10008.1.2.4.107";
/// Transfer Syntax: HEVC/H.265 Main 10 Profile / Level 5.1
#[rustfmt::skip]
pub const HEVCM10P51: &str = "1.2.840.10008.1.2.4.108";
/// Transfer Syntax: JPEG Baseline (Process 1): Default Transfer Syntax for Lossy JPEG 8 Bit Image Compression
#[rustfmt::skip]
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2
#[rustfmt::skip]
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Extended (Process 3
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_EXTENDED35: &str = "1.2.840.10008.1.2.4.52";
/// Transfer Syntax: JPEG Spectral Selection, Non-Hierarchical (Process 6
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL68: &str = "1.2.840.10008.1.2.4.53";
/// Transfer Syntax: JPEG Spectral Selection, Non-Hierarchical (Process 7
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL79: &str = "1.2.840.10008.1.2.4.54";
/// Transfer Syntax: JPEG Full Progression, Non-Hierarchical (Process 10
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1012: &str = "1.2.840.10008.1.2.4.55";
/// Transfer Syntax: JPEG Full Progression, Non-Hierarchical (Process 11
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1113: &str = "1.2.840.10008.1.2.4.56";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 14)
#[rustfmt::skip]
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 15) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_LOSSLESS_NON_HIERARCHICAL15: &str = "1.2.840.10008.1.2.4.58";
/// Transfer Syntax: JPEG Extended, Hierarchical (Process 16
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_EXTENDED_HIERARCHICAL1618: &str = "1.2.840.10008.1.2.4.59";
/// Transfer Syntax: JPEG Extended, Hierarchical (Process 17
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_EXTENDED_HIERARCHICAL1719: &str = "1.2.840.10008.1.2.4.60";
/// Transfer Syntax: JPEG Spectral Selection, Hierarchical (Process 20
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL2022: &str = "1.2.840.10008.1.2.4.61";
/// Transfer Syntax: JPEG Spectral Selection, Hierarchical (Process 21
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL2123: &str = "1.2.840.10008.1.2.4.62";
/// Transfer Syntax: JPEG Full Progression, Hierarchical (Process 24
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL2426: &str = "1.2.840.10008.1.2.4.63";
/// Transfer Syntax: JPEG Full Progression, Hierarchical (Process 25
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL2527: &str = "1.2.840.10008.1.2.4.64";
/// Transfer Syntax: JPEG Lossless, Hierarchical (Process 28) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_LOSSLESS_HIERARCHICAL28: &str = "1.2.840.10008.1.2.4.65";
/// Transfer Syntax: JPEG Lossless, Hierarchical (Process 29) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_LOSSLESS_HIERARCHICAL29: &str = "1.2.840.10008.1.2.4.66";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1]): Default Transfer Syntax for Lossless JPEG Image Compression
#[rustfmt::skip]
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// Transfer Syntax: JPEG-LS Lossless Image Compression
#[rustfmt::skip]
pub const JPEGLS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG-LS Lossy (Near-Lossless) Image Compression
#[rustfmt::skip]
pub const JPEGLS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
#[rustfmt::skip]
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG2000MC_LOSSLESS: &str = "1.2.840.10008.1.2.4.92";
/// Transfer Syntax: JPEG 2000 Part 2 Multi-component Image Compression
#[rustfmt::skip]
pub const JPEG2000MC: &str = "1.2.840.10008.1.2.4.93";
/// Transfer Syntax: JPIP Referenced
#[rustfmt::skip]
pub const JPIP_REFERENCED: &str = "1.2.840.10008.1.2.4.94";
/// Transfer Syntax: JPIP Referenced Deflate
#[rustfmt::skip]
pub const JPIP_REFERENCED_DEFLATE: &str = "1.2.840.10008.1.2.4.95";
/// Transfer Syntax: RLE Lossless
#[rustfmt::skip]
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// Transfer Syntax: RFC 2557 MIME encapsulation (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const RFC2557MIME_ENCAPSULATION: &str = "1.2.840.10008.1.2.6.1";
/// Transfer Syntax: XML Encoding (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const XML_ENCODING: &str = "1.2.840.10008.1.2.6.2";
/// Transfer Syntax: SMPTE ST 2110-20 Uncompressed Progressive Active Video
#[rustfmt::skip]
pub const SMPTEST211020_UNCOMPRESSED_PROGRESSIVE_ACTIVE_VIDEO: &str = "1.2.840.10008.1.2.7.1";
/// Transfer Syntax: SMPTE ST 2110-20 Uncompressed Interlaced Active Video
#[rustfmt::skip]
pub const SMPTEST211020_UNCOMPRESSED_INTERLACED_ACTIVE_VIDEO: &str = "1.2.840.10008.1.2.7.2";
/// Transfer Syntax: SMPTE ST 2110-30 PCM Digital Audio
#[rustfmt::skip]
pub const SMPTEST211030PCM_DIGITAL_AUDIO: &str = "1.2.840.10008.1.2.7.3";
/// Transfer Syntax: Papyrus 3 Implicit VR Little Endian (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PAPYRUS3_IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.20";
/// SOP Class: Storage Commitment Push Model SOP Class
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PUSH_MODEL: &str = "1.2.840.10008.1.20.1";
/// Well-known SOP Instance: Storage Commitment Push Model SOP Instance
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PUSH_MODEL_INSTANCE: &str = "1.2.840.10008.1.20.1.1";
/// SOP Class: Storage Commitment Pull Model SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PULL_MODEL: &str = "1.2.840.10008.1.20.2";
/// Well-known SOP Instance: Storage Commitment Pull Model SOP Instance (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PULL_MODEL_INSTANCE: &str = "1.2.840.10008.1.20.2.1";
/// SOP Class: Media Storage Directory Storage
#[rustfmt::skip]
pub const MEDIA_STORAGE_DIRECTORY_STORAGE: &str = "1.2.840.10008.1.3.10";
/// SOP Class: Procedural Event Logging SOP Class
#[rustfmt::skip]
pub const PROCEDURAL_EVENT_LOGGING: &str = "1.2.840.10008.1.40";
/// Well-known SOP Instance: Procedural Event Logging SOP Instance
#[rustfmt::skip]
pub const PROCEDURAL_EVENT_LOGGING_INSTANCE: &str = "1.2.840.10008.1.40.1";
/// SOP Class: Substance Administration Logging SOP Class
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_LOGGING: &str = "1.2.840.10008.1.42";
/// Well-known SOP Instance: Substance Administration Logging SOP Instance
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_LOGGING_INSTANCE: &str = "1.2.840.10008.1.42.1";
/// Well-known SOP Instance: Hot Iron Color Palette SOP Instance
#[rustfmt::skip]
pub const HOT_IRON_PALETTE: &str = "1.2.840.10008.1.5.1";
/// Well-known SOP Instance: PET Color Palette SOP Instance
#[rustfmt::skip]
pub const PET_PALETTE: &str = "1.2.840.10008.1.5.2";
/// Well-known SOP Instance: Hot Metal Blue Color Palette SOP Instance
#[rustfmt::skip]
pub const HOT_METAL_BLUE_PALETTE: &str = "1.2.840.10008.1.5.3";
/// Well-known SOP Instance: PET 20 Step Color Palette SOP Instance
#[rustfmt::skip]
pub const PET20_STEP_PALETTE: &str = "1.2.840.10008.1.5.4";
/// Well-known SOP Instance: Spring Color Palette SOP Instance
#[rustfmt::skip]
pub const SPRING_PALETTE: &str = "1.2.840.10008.1.5.5";
/// Well-known SOP Instance: Summer Color Palette SOP Instance
#[rustfmt::skip]
pub const SUMMER_PALETTE: &str = "1.2.840.10008.1.5.6";
/// Well-known SOP Instance: Fall Color Palette SOP Instance
#[rustfmt::skip]
pub const FALL_PALETTE: &str = "1.2.840.10008.1.5.7";
/// Well-known SOP Instance: Winter Color Palette SOP Instance
#[rustfmt::skip]
pub const WINTER_PALETTE: &str = "1.2.840.10008.1.5.8";
/// SOP Class: Basic Study Content Notification SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const BASIC_STUDY_CONTENT_NOTIFICATION: &str = "1.2.840.10008.1.9";
/// SOP Class: Video Endoscopic Image Real-Time Communication
#[rustfmt::skip]
pub const VIDEO_ENDOSCOPIC_IMAGE_REAL_TIME_COMMUNICATION: &str = "1.2.840.10008.10.1";
/// SOP Class: Video Photographic Image Real-Time Communication
#[rustfmt::skip]
pub const VIDEO_PHOTOGRAPHIC_IMAGE_REAL_TIME_COMMUNICATION: &str = "1.2.840.10008.10.2";
/// SOP Class: Audio Waveform Real-Time Communication
#[rustfmt::skip]
pub const AUDIO_WAVEFORM_REAL_TIME_COMMUNICATION: &str = "1.2.840.10008.10.3";
/// SOP Class: Rendition Selection Document Real-Time Communication
#[rustfmt::skip]
pub const RENDITION_SELECTION_DOCUMENT_REAL_TIME_COMMUNICATION: &str = "1.2.840.10008.10.4";
/// LDAP OID: dicomDeviceName
#[rustfmt::skip]
pub const DICOM_DEVICE_NAME: &str = "1.2.840.10008.15.0.3.1";
/// LDAP OID: dicomAssociationInitiator
#[rustfmt::skip]
pub const DICOM_ASSOCIATION_INITIATOR: &str = "1.2.840.10008.15.0.3.10";
/// LDAP OID: dicomAssociationAcceptor
#[rustfmt::skip]
pub const DICOM_ASSOCIATION_ACCEPTOR: &str = "1.2.840.10008.15.0.3.11";
/// LDAP OID: dicomHostname
#[rustfmt::skip]
pub const DICOM_HOSTNAME: &str = "1.2.840.10008.15.0.3.12";
/// LDAP OID: dicomPort
#[rustfmt::skip]
pub const DICOM_PORT: &str = "1.2.840.10008.15.0.3.13";
/// LDAP OID: dicomSOPClass
#[rustfmt::skip]
pub const DICOM_SOP_CLASS: &str = "1.2.840.10008.15.0.3.14";
/// LDAP OID: dicomTransferRole
#[rustfmt::skip]
pub const DICOM_TRANSFER_ROLE: &str = "1.2.840.10008.15.0.3.15";
/// LDAP OID: dicomTransferSyntax
#[rustfmt::skip]
pub const DICOM_TRANSFER_SYNTAX: &str = "1.2.840.10008.15.0.3.16";
/// LDAP OID: dicomPrimaryDeviceType
#[rustfmt::skip]
pub const DICOM_PRIMARY_DEVICE_TYPE: &str = "1.2.840.10008.15.0.3.17";
/// LDAP OID: dicomRelatedDeviceReference
#[rustfmt::skip]
pub const DICOM_RELATED_DEVICE_REFERENCE: &str = "1.2.840.10008.15.0.3.18";
/// LDAP OID: dicomPreferredCalledAETitle
#[rustfmt::skip]
pub const DICOM_PREFERRED_CALLED_AE_TITLE: &str = "1.2.840.10008.15.0.3.19";
/// LDAP OID: dicomDescription
#[rustfmt::skip]
pub const DICOM_DESCRIPTION: &str = "1.2.840.10008.15.0.3.2";
/// LDAP OID: dicomTLSCyphersuite
#[rustfmt::skip]
pub const DICOM_TLS_CYPHERSUITE: &str = "1.2.840.10008.15.0.3.20";
/// LDAP OID: dicomAuthorizedNodeCertificateReference
#[rustfmt::skip]
pub const DICOM_AUTHORIZED_NODE_CERTIFICATE_REFERENCE: &str = "1.2.840.10008.15.0.3.21";
/// LDAP OID: dicomThisNodeCertificateReference
#[rustfmt::skip]
pub const DICOM_THIS_NODE_CERTIFICATE_REFERENCE: &str = "1.2.840.10008.15.0.3.22";
/// LDAP OID: dicomInstalled
#[rustfmt::skip]
pub const DICOM_INSTALLED: &str = "1.2.840.10008.15.0.3.23";
/// LDAP OID: dicomStationName
#[rustfmt::skip]
pub const DICOM_STATION_NAME: &str = "1.2.840.10008.15.0.3.24";
/// LDAP OID: dicomDeviceSerialNumber
#[rustfmt::skip]
pub const DICOM_DEVICE_SERIAL_NUMBER: &str = "1.2.840.10008.15.0.3.25";
/// LDAP OID: dicomInstitutionName
#[rustfmt::skip]
pub const DICOM_INSTITUTION_NAME: &str = "1.2.840.10008.15.0.3.26";
/// LDAP OID: dicomInstitutionAddress
#[rustfmt::skip]
pub const DICOM_INSTITUTION_ADDRESS: &str = "1.2.840.10008.15.0.3.27";
/// LDAP OID: dicomInstitutionDepartmentName
#[rustfmt::skip]
pub const DICOM_INSTITUTION_DEPARTMENT_NAME: &str = "1.2.840.10008.15.0.3.28";
/// LDAP OID: dicomIssuerOfPatientID
#[rustfmt::skip]
pub const DICOM_ISSUER_OF_PATIENT_ID: &str = "1.2.840.10008.15.0.3.29";
/// LDAP OID: dicomManufacturer
#[rustfmt::skip]
pub const DICOM_MANUFACTURER: &str = "1.2.840.10008.15.0.3.3";
/// LDAP OID: dicomPreferredCallingAETitle
#[rustfmt::skip]
pub const DICOM_PREFERRED_CALLING_AE_TITLE: &str = "1.2.840.10008.15.0.3.30";
/// LDAP OID: dicomSupportedCharacterSet
#[rustfmt::skip]
pub const DICOM_SUPPORTED_CHARACTER_SET: &str = "1.2.840.10008.15.0.3.31";
/// LDAP OID: dicomManufacturerModelName
#[rustfmt::skip]
pub const DICOM_MANUFACTURER_MODEL_NAME: &str = "1.2.840.10008.15.0.3.4";
/// LDAP OID: dicomSoftwareVersion
#[rustfmt::skip]
pub const DICOM_SOFTWARE_VERSION: &str = "1.2.840.10008.15.0.3.5";
/// LDAP OID: dicomVendorData
#[rustfmt::skip]
pub const DICOM_VENDOR_DATA: &str = "1.2.840.10008.15.0.3.6";
/// LDAP OID: dicomAETitle
#[rustfmt::skip]
pub const DICOM_AE_TITLE: &str = "1.2.840.10008.15.0.3.7";
/// LDAP OID: dicomNetworkConnectionReference
#[rustfmt::skip]
pub const DICOM_NETWORK_CONNECTION_REFERENCE: &str = "1.2.840.10008.15.0.3.8";
/// LDAP OID: dicomApplicationCluster
#[rustfmt::skip]
pub const DICOM_APPLICATION_CLUSTER: &str = "1.2.840.10008.15.0.3.9";
/// LDAP OID: dicomConfigurationRoot
#[rustfmt::skip]
pub const DICOM_CONFIGURATION_ROOT: &str = "1.2.840.10008.15.0.4.1";
/// LDAP OID: dicomDevicesRoot
#[rustfmt::skip]
pub const DICOM_DEVICES_ROOT: &str = "1.2.840.10008.15.0.4.2";
/// LDAP OID: dicomUniqueAETitlesRegistryRoot
#[rustfmt::skip]
pub const DICOM_UNIQUE_AE_TITLES_REGISTRY_ROOT: &str = "1.2.840.10008.15.0.4.3";
/// LDAP OID: dicomDevice
#[rustfmt::skip]
pub const DICOM_DEVICE: &str = "1.2.840.10008.15.0.4.4";
/// LDAP OID: dicomNetworkAE
#[rustfmt::skip]
pub const DICOM_NETWORK_AE: &str = "1.2.840.10008.15.0.4.5";
/// LDAP OID: dicomNetworkConnection
#[rustfmt::skip]
pub const DICOM_NETWORK_CONNECTION: &str = "1.2.840.10008.15.0.4.6";
/// LDAP OID: dicomUniqueAETitle
#[rustfmt::skip]
pub const DICOM_UNIQUE_AE_TITLE: &str = "1.2.840.10008.15.0.4.7";
/// LDAP OID: dicomTransferCapability
#[rustfmt::skip]
pub const DICOM_TRANSFER_CAPABILITY: &str = "1.2.840.10008.15.0.4.8";
/// Synchronization Frame of Reference: Universal Coordinated Time
#[rustfmt::skip]
pub const UTC: &str = "1.2.840.10008.15.1.1";
/// Coding Scheme: Dublin Core
#[rustfmt::skip]
pub const DC: &str = "1.2.840.10008.2.16.10";
/// Coding Scheme: New York University Melanoma Clinical Cooperative Group
#[rustfmt::skip]
pub const NYUMCCG: &str = "1.2.840.10008.2.16.11";
/// Coding Scheme: Mayo Clinic Non-radiological Images Specific Body Structure Anatomical Surface Region Guide
#[rustfmt::skip]
pub const MAYONRISBSASRG: &str = "1.2.840.10008.2.16.12";
/// Coding Scheme: Image Biomarker Standardisation Initiative
#[rustfmt::skip]
pub const IBSI: &str = "1.2.840.10008.2.16.13";
/// Coding Scheme: Radiomics Ontology
#[rustfmt::skip]
pub const RO: &str = "1.2.840.10008.2.16.14";
/// Coding Scheme: RadElement
#[rustfmt::skip]
pub const RADELEMENT: &str = "1.2.840.10008.2.16.15";
/// Coding Scheme: ICD-11
#[rustfmt::skip]
pub const I11: &str = "1.2.840.10008.2.16.16";
/// Coding Scheme: Unified numbering system (UNS) for metals and alloys
#[rustfmt::skip]
pub const UNS: &str = "1.2.840.10008.2.16.17";
/// Coding Scheme: Research Resource Identification
#[rustfmt::skip]
pub const RRID: &str = "1.2.840.10008.2.16.18";
/// Coding Scheme: DICOM Controlled Terminology
#[rustfmt::skip]
pub const DCM: &str = "1.2.840.10008.2.16.4";
/// Coding Scheme: Adult Mouse Anatomy Ontology
#[rustfmt::skip]
pub const MA: &str = "1.2.840.10008.2.16.5";
/// Coding Scheme: Uberon Ontology
#[rustfmt::skip]
pub const UBERON: &str = "1.2.840.10008.2.16.6";
/// Coding Scheme: Integrated Taxonomic Information System (ITIS) Taxonomic Serial Number (TSN)
#[rustfmt::skip]
pub const ITIS_TSN: &str = "1.2.840.10008.2.16.7";
/// Coding Scheme: Mouse Genome Initiative (MGI)
#[rustfmt::skip]
pub const MGI: &str = "1.2.840.10008.2.16.8";
/// Coding Scheme: PubChem Compound CID
#[rustfmt::skip]
pub const PUBCHEM_CID: &str = "1.2.840.10008.2.16.9";
/// DICOM UIDs as a Coding Scheme: DICOM UID Registry
#[rustfmt::skip]
pub const DCMUID: &str = "1.2.840.10008.2.6.1";
/// Application Context Name: DICOM Application Context Name
#[rustfmt::skip]
pub const DICOM_APPLICATION_CONTEXT: &str = "1.2.840.10008.3.1.1.1";
/// SOP Class: Detached Patient Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_PATIENT_MANAGEMENT: &str = "1.2.840.10008.3.1.2.1.1";
/// Meta SOP Class: Detached Patient Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_PATIENT_MANAGEMENT_META: &str = "1.2.840.10008.3.1.2.1.4";
/// SOP Class: Detached Visit Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_VISIT_MANAGEMENT: &str = "1.2.840.10008.3.1.2.2.1";
/// SOP Class: Detached Study Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_STUDY_MANAGEMENT: &str = "1.2.840.10008.3.1.2.3.1";
/// SOP Class: Study Component Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STUDY_COMPONENT_MANAGEMENT: &str = "1.2.840.10008.3.1.2.3.2";
/// SOP Class: Modality Performed Procedure Step SOP Class
#[rustfmt::skip]
pub const MODALITY_PERFORMED_PROCEDURE_STEP: &str = "1.2.840.10008.3.1.2.3.3";
/// SOP Class: Modality Performed Procedure Step Retrieve SOP Class
#[rustfmt::skip]
pub const MODALITY_PERFORMED_PROCEDURE_STEP_RETRIEVE: &str = "1.2.840.10008.3.1.2.3.4";
/// SOP Class: Modality Performed Procedure Step Notification SOP Class
#[rustfmt::skip]
pub const MODALITY_PERFORMED_PROCEDURE_STEP_NOTIFICATION: &str = "1.2.840.10008.3.1.2.3.5";
/// SOP Class: Detached Results Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_RESULTS_MANAGEMENT: &str = "1.2.840.10008.3.1.2.5.1";
/// Meta SOP Class: Detached Results Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_RESULTS_MANAGEMENT_META: &str = "1.2.840.10008.3.1.2.5.4";
/// Meta SOP Class: Detached Study Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_STUDY_MANAGEMENT_META: &str = "1.2.840.10008.3.1.2.5.5";
/// SOP Class: Detached Interpretation Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_INTERPRETATION_MANAGEMENT: &str = "1.2.840.10008.3.1.2.6.1";
/// Service Class: Storage Service Class
#[rustfmt::skip]
pub const STORAGE: &str = "1.2.840.10008.4.2";
/// SOP Class: Basic Film Session SOP Class
#[rustfmt::skip]
pub const BASIC_FILM_SESSION: &str = "1.2.840.10008.5.1.1.1";
/// SOP Class: Print Job SOP Class
#[rustfmt::skip]
pub const PRINT_JOB: &str = "1.2.840.10008.5.1.1.14";
/// SOP Class: Basic Annotation Box SOP Class
#[rustfmt::skip]
pub const BASIC_ANNOTATION_BOX: &str = "1.2.840.10008.5.1.1.15";
/// SOP Class: Printer SOP Class
#[rustfmt::skip]
pub const PRINTER: &str = "1.2.840.10008.5.1.1.16";
/// SOP Class: Printer Configuration Retrieval SOP Class
#[rustfmt::skip]
pub const PRINTER_CONFIGURATION_RETRIEVAL: &str = "1.2.840.10008.5.1.1.16.376";
/// Well-known SOP Instance: Printer SOP Instance
#[rustfmt::skip]
pub const PRINTER_INSTANCE: &str = "1.2.840.10008.5.1.1.17";
/// Well-known SOP Instance: Printer Configuration Retrieval SOP Instance
#[rustfmt::skip]
pub const PRINTER_CONFIGURATION_RETRIEVAL_INSTANCE: &str = "1.2.840.10008.5.1.1.17.376";
/// Meta SOP Class: Basic Color Print Management Meta SOP Class
#[rustfmt::skip]
pub const BASIC_COLOR_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.18";
/// Meta SOP Class: Referenced Color Print Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const REFERENCED_COLOR_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.18.1";
/// SOP Class: Basic Film Box SOP Class
#[rustfmt::skip]
pub const BASIC_FILM_BOX: &str = "1.2.840.10008.5.1.1.2";
/// SOP Class: VOI LUT Box SOP Class
#[rustfmt::skip]
pub const VOILUT_BOX: &str = "1.2.840.10008.5.1.1.22";
/// SOP Class: Presentation LUT SOP Class
#[rustfmt::skip]
pub const PRESENTATION_LUT: &str = "1.2.840.10008.5.1.1.23";
/// SOP Class: Image Overlay Box SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const IMAGE_OVERLAY_BOX: &str = "1.2.840.10008.5.1.1.24";
/// SOP Class: Basic Print Image Overlay Box SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const BASIC_PRINT_IMAGE_OVERLAY_BOX: &str = "1.2.840.10008.5.1.1.24.1";
/// Well-known SOP Instance: Print Queue SOP Instance (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PRINT_QUEUE_INSTANCE: &str = "1.2.840.10008.5.1.1.25";
/// SOP Class: Print Queue Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PRINT_QUEUE_MANAGEMENT: &str = "1.2.840.10008.5.1.1.26";
/// SOP Class: Stored Print Storage SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STORED_PRINT_STORAGE: &str = "1.2.840.10008.5.1.1.27";
/// SOP Class: Hardcopy Grayscale Image Storage SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const HARDCOPY_GRAYSCALE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.1.29";
/// SOP Class: Hardcopy Color Image Storage SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const HARDCOPY_COLOR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.1.30";
/// SOP Class: Pull Print Request SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PULL_PRINT_REQUEST: &str = "1.2.840.10008.5.1.1.31";
/// Meta SOP Class: Pull Stored Print Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PULL_STORED_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.32";
/// SOP Class: Media Creation Management SOP Class UID
#[rustfmt::skip]
pub const MEDIA_CREATION_MANAGEMENT: &str = "1.2.840.10008.5.1.1.33";
/// SOP Class: Basic Grayscale Image Box SOP Class
#[rustfmt::skip]
pub const BASIC_GRAYSCALE_IMAGE_BOX: &str = "1.2.840.10008.5.1.1.4";
/// SOP Class: Basic Color Image Box SOP Class
#[rustfmt::skip]
pub const BASIC_COLOR_IMAGE_BOX: &str = "1.2.840.10008.5.1.1.4.1";
/// SOP Class: Referenced Image Box SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const REFERENCED_IMAGE_BOX: &str = "1.2.840.10008.5.1.1.4.2";
/// SOP Class: Display System SOP Class
#[rustfmt::skip]
pub const DISPLAY_SYSTEM: &str = "1.2.840.10008.5.1.1.40";
/// Well-known SOP Instance: Display System SOP Instance
#[rustfmt::skip]
pub const DISPLAY_SYSTEM_INSTANCE: &str = "1.2.840.10008.5.1.1.40.1";
/// Meta SOP Class: Basic Grayscale Print Management Meta SOP Class
#[rustfmt::skip]
pub const BASIC_GRAYSCALE_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.9";
/// Meta SOP Class: Referenced Grayscale Print Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const REFERENCED_GRAYSCALE_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.9.1";
/// SOP Class: Computed Radiography Image Storage
#[rustfmt::skip]
pub const COMPUTED_RADIOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.1";
/// SOP Class: Digital X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.1";
/// SOP Class: Digital X-Ray Image Storage - For Processing
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING: &str = "1.2.840.10008.5.1.4.1.1.1.1.1";
/// SOP Class: Digital Mammography X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_MAMMOGRAPHY_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.2";
/// SOP Class: Digital Mammography X-Ray Image Storage - For Processing
#[rustfmt::skip]
pub const DIGITAL_MAMMOGRAPHY_X_RAY_IMAGE_STORAGE_FOR_PROCESSING: &str = "1.2.840.10008.5.1.4.1.1.1.2.1";
/// SOP Class: Digital Intra-Oral X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_INTRA_ORAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.3";
/// SOP Class: Digital Intra-Oral X-Ray Image Storage - For Processing
#[rustfmt::skip]
pub const DIGITAL_INTRA_ORAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING: &str = "1.2.840.10008.5.1.4.1.1.1.3.1";
/// SOP Class: Standalone Modality LUT Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STANDALONE_MODALITY_LUT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.10";
/// SOP Class: Encapsulated PDF Storage
#[rustfmt::skip]
pub const ENCAPSULATED_PDF_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.104.1";
/// SOP Class: Encapsulated CDA Storage
#[rustfmt::skip]
pub const ENCAPSULATED_CDA_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.104.2";
/// SOP Class: Encapsulated STL Storage
#[rustfmt::skip]
pub const ENCAPSULATED_STL_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.104.3";
/// SOP Class: Encapsulated OBJ Storage
#[rustfmt::skip]
pub const ENCAPSULATED_OBJ_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.104.4";
/// SOP Class: Encapsulated MTL Storage
#[rustfmt::skip]
pub const ENCAPSULATED_MTL_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.104.5";
/// SOP Class: Standalone VOI LUT Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STANDALONE_VOILUT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11";
/// SOP Class: Grayscale Softcopy Presentation State Storage
#[rustfmt::skip]
pub const GRAYSCALE_SOFTCOPY_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.1";
/// SOP Class: Segmented Volume Rendering Volumetric Presentation State Storage
#[rustfmt::skip]
pub const SEGMENTED_VOLUME_RENDERING_VOLUMETRIC_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.10";
/// SOP Class: Multiple Volume Rendering Volumetric Presentation State Storage
#[rustfmt::skip]
pub const MULTIPLE_VOLUME_RENDERING_VOLUMETRIC_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.11";
/// SOP Class: Variable Modality LUT Softcopy Presentation State Storage
#[rustfmt::skip]
pub const VARIABLE_MODALITY_LUT_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.12";
/// SOP Class: Color Softcopy Presentation State Storage
#[rustfmt::skip]
pub const COLOR_SOFTCOPY_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.2";
/// SOP Class: Pseudo-Color Softcopy Presentation State Storage
#[rustfmt::skip]
pub const PSEUDO_COLOR_SOFTCOPY_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.3";
/// SOP Class: Blending Softcopy Presentation State Storage
#[rustfmt::skip]
pub const BLENDING_SOFTCOPY_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.4";
/// SOP Class: XA/XRF Grayscale Softcopy Presentation State Storage
#[rustfmt::skip]
pub const XAXRF_GRAYSCALE_SOFTCOPY_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.5";
/// SOP Class: Grayscale Planar MPR Volumetric Presentation State Storage
#[rustfmt::skip]
pub const GRAYSCALE_PLANAR_MPR_VOLUMETRIC_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.6";
/// SOP Class: Compositing Planar MPR Volumetric Presentation State Storage
#[rustfmt::skip]
pub const COMPOSITING_PLANAR_MPR_VOLUMETRIC_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.7";
/// SOP Class: Advanced Blending Presentation State Storage
#[rustfmt::skip]
pub const ADVANCED_BLENDING_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.8";
/// SOP Class: Volume Rendering Volumetric Presentation State Storage
#[rustfmt::skip]
pub const VOLUME_RENDERING_VOLUMETRIC_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.9";
/// SOP Class: X-Ray Angiographic Image Storage
#[rustfmt::skip]
pub const X_RAY_ANGIOGRAPHIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.12.1";
/// SOP Class: Enhanced XA Image Storage
#[rustfmt::skip]
pub const ENHANCED_XA_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.12.1.1";
/// SOP Class: X-Ray Radiofluoroscopic Image Storage
#[rustfmt::skip]
pub const X_RAY_RADIOFLUOROSCOPIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.12.2";
/// SOP Class: Enhanced XRF Image Storage
#[rustfmt::skip]
pub const ENHANCED_XRF_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.12.2.1";
/// SOP Class: X-Ray Angiographic Bi-Plane Image Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const X_RAY_ANGIOGRAPHIC_BI_PLANE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.12.3";
/// SOP Class: Positron Emission Tomography Image Storage
#[rustfmt::skip]
pub const POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";
/// SOP Class: Legacy Converted Enhanced PET Image Storage
#[rustfmt::skip]
pub const LEGACY_CONVERTED_ENHANCED_PET_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128.1";
/// SOP Class: Standalone PET Curve Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STANDALONE_PET_CURVE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.129";
/// SOP Class: X-Ray 3D Angiographic Image Storage
#[rustfmt::skip]
pub const X_RAY3_D_ANGIOGRAPHIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.13.1.1";
/// SOP Class: X-Ray 3D Craniofacial Image Storage
#[rustfmt::skip]
pub const X_RAY3_D_CRANIOFACIAL_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.13.1.2";
/// SOP Class: Breast Tomosynthesis Image Storage
#[rustfmt::skip]
pub const BREAST_TOMOSYNTHESIS_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.13.1.3";
/// SOP Class: Breast Projection X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const BREAST_PROJECTION_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.13.1.4";
/// SOP Class: Breast Projection X-Ray Image Storage - For Processing
#[rustfmt::skip]
pub const BREAST_PROJECTION_X_RAY_IMAGE_STORAGE_FOR_PROCESSING: &str = "1.2.840.10008.5.1.4.1.1.13.1.5";
/// SOP Class: Enhanced PET Image Storage
#[rustfmt::skip]
pub const ENHANCED_PET_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.130";
/// SOP Class: Basic Structured Display Storage
#[rustfmt::skip]
pub const BASIC_STRUCTURED_DISPLAY_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.131";
/// SOP Class: Intravascular Optical Coherence Tomography Image Storage - For Presentation
#[rustfmt::skip]
pub const INTRAVASCULAR_OPTICAL_COHERENCE_TOMOGRAPHY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.14.1";
/// SOP Class: Intravascular Optical Coherence Tomography Image Storage - For Processing
#[rustfmt::skip]
pub const INTRAVASCULAR_OPTICAL_COHERENCE_TOMOGRAPHY_IMAGE_STORAGE_FOR_PROCESSING: &str = "1.2.840.10008.5.1.4.1.1.14.2";
/// SOP Class: CT Image Storage
#[rustfmt::skip]
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: Enhanced CT Image Storage
#[rustfmt::skip]
pub const ENHANCED_CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2.1";
/// SOP Class: Legacy Converted Enhanced CT Image Storage
#[rustfmt::skip]
pub const LEGACY_CONVERTED_ENHANCED_CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2.2";
/// SOP Class: Nuclear Medicine Image Storage
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.20";
/// SOP Class: CT Defined Procedure Protocol Storage
#[rustfmt::skip]
pub const CT_DEFINED_PROCEDURE_PROTOCOL_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.200.1";
/// SOP Class: CT Performed Procedure Protocol Storage
#[rustfmt::skip]
pub const CT_PERFORMED_PROCEDURE_PROTOCOL_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.200.2";
/// SOP Class: Protocol Approval Storage
#[rustfmt::skip]
pub const PROTOCOL_APPROVAL_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.200.3";
/// SOP Class: Protocol Approval Information Model - FIND
#[rustfmt::skip]
pub const PROTOCOL_APPROVAL_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.1.1.200.4";
/// SOP Class: Protocol Approval Information Model - MOVE
#[rustfmt::skip]
pub const PROTOCOL_APPROVAL_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.1.1.200.5";
/// SOP Class: Protocol Approval Information Model - GET
#[rustfmt::skip]
pub const PROTOCOL_APPROVAL_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.1.1.200.6";
/// SOP Class: XA Defined Procedure Protocol Storage
#[rustfmt::skip]
pub const XA_DEFINED_PROCEDURE_PROTOCOL_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.200.7";
/// SOP Class: XA Performed Procedure Protocol Storage
#[rustfmt::skip]
pub const XA_PERFORMED_PROCEDURE_PROTOCOL_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.200.8";
/// SOP Class: Inventory Storage
#[rustfmt::skip]
pub const INVENTORY_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.201.1";
/// Well-known SOP Instance: Storage Management SOP Instance
#[rustfmt::skip]
pub const STORAGE_MANAGEMENT_INSTANCE: &str = "1.2.840.10008.5.1.4.1.1.201.1.1";
/// SOP Class: Inventory - FIND
#[rustfmt::skip]
pub const INVENTORY_FIND: &str = "1.2.840.10008.5.1.4.1.1.201.2";
/// SOP Class: Inventory - MOVE
#[rustfmt::skip]
pub const INVENTORY_MOVE: &str = "1.2.840.10008.5.1.4.1.1.201.3";
/// SOP Class: Inventory - GET
#[rustfmt::skip]
pub const INVENTORY_GET: &str = "1.2.840.10008.5.1.4.1.1.201.4";
/// SOP Class: Inventory Creation
#[rustfmt::skip]
pub const INVENTORY_CREATION: &str = "1.2.840.10008.5.1.4.1.1.201.5";
/// SOP Class: Repository Query
#[rustfmt::skip]
pub const REPOSITORY_QUERY: &str = "1.2.840.10008.5.1.4.1.1.201.6";
/// SOP Class: Ultrasound Multi-frame Image Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE_RETIRED: &str = "1.2.840.10008.5.1.4.1.1.3";
/// SOP Class: Ultrasound Multi-frame Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.3.1";
/// SOP Class: Parametric Map Storage
#[rustfmt::skip]
pub const PARAMETRIC_MAP_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.30";
/// SOP Class: MR Image Storage
#[rustfmt::skip]
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Enhanced MR Image Storage
#[rustfmt::skip]
pub const ENHANCED_MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4.1";
/// SOP Class: MR Spectroscopy Storage
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4.2";
/// SOP Class: Enhanced MR Color Image Storage
#[rustfmt::skip]
pub const ENHANCED_MR_COLOR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4.3";
/// SOP Class: Legacy Converted Enhanced MR Image Storage
#[rustfmt::skip]
pub const LEGACY_CONVERTED_ENHANCED_MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4.4";
/// SOP Class: RT Image Storage
#[rustfmt::skip]
pub const RT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.1";
/// SOP Class: RT Physician Intent Storage
#[rustfmt::skip]
pub const RT_PHYSICIAN_INTENT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.10";
/// SOP Class: RT Segment Annotation Storage
#[rustfmt::skip]
pub const RT_SEGMENT_ANNOTATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.11";
/// SOP Class: RT Radiation Set Storage
#[rustfmt::skip]
pub const RT_RADIATION_SET_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.12";
/// SOP Class: C-Arm Photon-Electron Radiation Storage
#[rustfmt::skip]
pub const C_ARM_PHOTON_ELECTRON_RADIATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.13";
/// SOP Class: Tomotherapeutic Radiation Storage
#[rustfmt::skip]
pub const TOMOTHERAPEUTIC_RADIATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.14";
/// SOP Class: Robotic-Arm Radiation Storage
#[rustfmt::skip]
pub const ROBOTIC_ARM_RADIATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.15";
/// SOP Class: RT Radiation Record Set Storage
#[rustfmt::skip]
pub const RT_RADIATION_RECORD_SET_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.16";
/// SOP Class: RT Radiation Salvage Record Storage
#[rustfmt::skip]
pub const RT_RADIATION_SALVAGE_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.17";
/// SOP Class: Tomotherapeutic Radiation Record Storage
#[rustfmt::skip]
pub const TOMOTHERAPEUTIC_RADIATION_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.18";
/// SOP Class: C-Arm Photon-Electron Radiation Record Storage
#[rustfmt::skip]
pub const C_ARM_PHOTON_ELECTRON_RADIATION_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.19";
/// SOP Class: RT Dose Storage
#[rustfmt::skip]
pub const RT_DOSE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.2";
/// SOP Class: Robotic Radiation Record Storage
#[rustfmt::skip]
pub const ROBOTIC_RADIATION_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.20";
/// SOP Class: RT Radiation Set Delivery Instruction Storage
#[rustfmt::skip]
pub const RT_RADIATION_SET_DELIVERY_INSTRUCTION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.21";
/// SOP Class: RT Treatment Preparation Storage
#[rustfmt::skip]
pub const RT_TREATMENT_PREPARATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.22";
/// SOP Class: Enhanced RT Image Storage
#[rustfmt::skip]
pub const ENHANCED_RT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.23";
/// SOP Class: Enhanced Continuous RT Image Storage
#[rustfmt::skip]
pub const ENHANCED_CONTINUOUS_RT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.24";
/// SOP Class: RT Patient Position Acquisition Instruction Storage
#[rustfmt::skip]
pub const RT_PATIENT_POSITION_ACQUISITION_INSTRUCTION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.25";
/// SOP Class: RT Structure Set Storage
#[rustfmt::skip]
pub const RT_STRUCTURE_SET_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.3";
/// SOP Class: RT Beams Treatment Record Storage
#[rustfmt::skip]
pub const RT_BEAMS_TREATMENT_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.4";
/// SOP Class: RT Plan Storage
#[rustfmt::skip]
pub const RT_PLAN_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.5";
/// SOP Class: RT Brachy Treatment Record Storage
#[rustfmt::skip]
pub const RT_BRACHY_TREATMENT_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.6";
/// SOP Class: RT Treatment Summary Record Storage
#[rustfmt::skip]
pub const RT_TREATMENT_SUMMARY_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.7";
/// SOP Class: RT Ion Plan Storage
#[rustfmt::skip]
pub const RT_ION_PLAN_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.8";
/// SOP Class: RT Ion Beams Treatment Record Storage
#[rustfmt::skip]
pub const RT_ION_BEAMS_TREATMENT_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.9";
/// SOP Class: Nuclear Medicine Image Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE_RETIRED: &str = "1.2.840.10008.5.1.4.1.1.5";
/// SOP Class: DICOS CT Image Storage
#[rustfmt::skip]
pub const DICOSCT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.1";
/// SOP Class: DICOS Digital X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.501.2.1";
/// SOP Class: DICOS Digital X-Ray Image Storage - For Processing
#[rustfmt::skip]
pub const DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING: &str = "1.2.840.10008.5.1.4.1.1.501.2.2";
/// SOP Class: DICOS Threat Detection Report Storage
#[rustfmt::skip]
pub const DICOS_THREAT_DETECTION_REPORT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.3";
/// SOP Class: DICOS 2D AIT Storage
#[rustfmt::skip]
pub const DICOS2DAIT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.4";
/// SOP Class: DICOS 3D AIT Storage
#[rustfmt::skip]
pub const DICOS3DAIT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.5";
/// SOP Class: DICOS Quadrupole Resonance (QR) Storage
#[rustfmt::skip]
pub const DICOS_QUADRUPOLE_RESONANCE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.6";
/// SOP Class: Ultrasound Image Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE_RETIRED: &str = "1.2.840.10008.5.1.4.1.1.6";
/// SOP Class: Ultrasound Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
/// SOP Class: Enhanced US Volume Storage
#[rustfmt::skip]
pub const ENHANCED_US_VOLUME_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.2";
/// SOP Class: Eddy Current Image Storage
#[rustfmt::skip]
pub const EDDY_CURRENT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.601.1";
/// SOP Class: Eddy Current Multi-frame Image Storage
#[rustfmt::skip]
pub const EDDY_CURRENT_MULTI_FRAME_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.601.2";
/// SOP Class: Raw Data Storage
#[rustfmt::skip]
pub const RAW_DATA_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66";
/// SOP Class: Spatial Registration Storage
#[rustfmt::skip]
pub const SPATIAL_REGISTRATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66.1";
/// SOP Class: Spatial Fiducials Storage
#[rustfmt::skip]
pub const SPATIAL_FIDUCIALS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66.2";
/// SOP Class: Deformable Spatial Registration Storage
#[rustfmt::skip]
pub const DEFORMABLE_SPATIAL_REGISTRATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66.3";
/// SOP Class: Segmentation Storage
#[rustfmt::skip]
pub const SEGMENTATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66.4";
/// SOP Class: Surface Segmentation Storage
#[rustfmt::skip]
pub const SURFACE_SEGMENTATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66.5";
/// SOP Class: Tractography Results Storage
#[rustfmt::skip]
pub const TRACTOGRAPHY_RESULTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66.6";
/// SOP Class: Real World Value Mapping Storage
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.67";
/// SOP Class: Surface Scan Mesh Storage
#[rustfmt::skip]
pub const SURFACE_SCAN_MESH_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.68.1";
/// SOP Class: Surface Scan Point Cloud Storage
#[rustfmt::skip]
pub const SURFACE_SCAN_POINT_CLOUD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.68.2";
/// SOP Class: Secondary Capture Image Storage
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
/// SOP Class: Multi-frame Single Bit Secondary Capture Image Storage
#[rustfmt::skip]
pub const MULTI_FRAME_SINGLE_BIT_SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7.1";
/// SOP Class: Multi-frame Grayscale Byte Secondary Capture Image Storage
#[rustfmt::skip]
pub const MULTI_FRAME_GRAYSCALE_BYTE_SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7.2";
/// SOP Class: Multi-frame Grayscale Word Secondary Capture Image Storage
#[rustfmt::skip]
pub const MULTI_FRAME_GRAYSCALE_WORD_SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7.3";
/// SOP Class: Multi-frame True Color Secondary Capture Image Storage
#[rustfmt::skip]
pub const MULTI_FRAME_TRUE_COLOR_SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7.4";
/// SOP Class: VL Image Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const VL_IMAGE_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.1.1.77.1";
/// SOP Class: VL Endoscopic Image Storage
#[rustfmt::skip]
pub const VL_ENDOSCOPIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.1";
/// SOP Class: Video Endoscopic Image Storage
#[rustfmt::skip]
pub const VIDEO_ENDOSCOPIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.1.1";
/// SOP Class: VL Microscopic Image Storage
#[rustfmt::skip]
pub const VL_MICROSCOPIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.2";
/// SOP Class: Video Microscopic Image Storage
#[rustfmt::skip]
pub const VIDEO_MICROSCOPIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.2.1";
/// SOP Class: VL Slide-Coordinates Microscopic Image Storage
#[rustfmt::skip]
pub const VL_SLIDE_COORDINATES_MICROSCOPIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.3";
/// SOP Class: VL Photographic Image Storage
#[rustfmt::skip]
pub const VL_PHOTOGRAPHIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.4";
/// SOP Class: Video Photographic Image Storage
#[rustfmt::skip]
pub const VIDEO_PHOTOGRAPHIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.4.1";
/// SOP Class: Ophthalmic Photography 8 Bit Image Storage
#[rustfmt::skip]
pub const OPHTHALMIC_PHOTOGRAPHY8_BIT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.1";
/// SOP Class: Ophthalmic Photography 16 Bit Image Storage
#[rustfmt::skip]
pub const OPHTHALMIC_PHOTOGRAPHY16_BIT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.2";
/// SOP Class: Stereometric Relationship Storage
#[rustfmt::skip]
pub const STEREOMETRIC_RELATIONSHIP_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.3";
/// SOP Class: Ophthalmic Tomography Image Storage
#[rustfmt::skip]
pub const OPHTHALMIC_TOMOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.4";
/// SOP Class: Wide Field Ophthalmic Photography Stereographic Projection Image Storage
#[rustfmt::skip]
pub const WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_STEREOGRAPHIC_PROJECTION_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.5";
/// SOP Class: Wide Field Ophthalmic Photography 3D Coordinates Image Storage
#[rustfmt::skip]
pub const WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY3_D_COORDINATES_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.6";
/// SOP Class: Ophthalmic Optical Coherence Tomography En Face Image Storage
#[rustfmt::skip]
pub const OPHTHALMIC_OPTICAL_COHERENCE_TOMOGRAPHY_EN_FACE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.7";
/// SOP Class: Ophthalmic Optical Coherence Tomography B-scan Volume Analysis Storage
#[rustfmt::skip]
pub const OPHTHALMIC_OPTICAL_COHERENCE_TOMOGRAPHY_BSCAN_VOLUME_ANALYSIS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.5.8";
/// SOP Class: VL Whole Slide Microscopy Image Storage
#[rustfmt::skip]
pub const VL_WHOLE_SLIDE_MICROSCOPY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.6";
/// SOP Class: Dermoscopic Photography Image Storage
#[rustfmt::skip]
pub const DERMOSCOPIC_PHOTOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.77.1.7";
/// SOP Class: VL Multi-frame Image Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const VL_MULTI_FRAME_IMAGE_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.1.1.77.2";
/// SOP Class: Lensometry Measurements Storage
#[rustfmt::skip]
pub const LENSOMETRY_MEASUREMENTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.1";
/// SOP Class: Autorefraction Measurements Storage
#[rustfmt::skip]
pub const AUTOREFRACTION_MEASUREMENTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.2";
/// SOP Class: Keratometry Measurements Storage
#[rustfmt::skip]
pub const KERATOMETRY_MEASUREMENTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.3";
/// SOP Class: Subjective Refraction Measurements Storage
#[rustfmt::skip]
pub const SUBJECTIVE_REFRACTION_MEASUREMENTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.4";
/// SOP Class: Visual Acuity Measurements Storage
#[rustfmt::skip]
pub const VISUAL_ACUITY_MEASUREMENTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.5";
/// SOP Class: Spectacle Prescription Report Storage
#[rustfmt::skip]
pub const SPECTACLE_PRESCRIPTION_REPORT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.6";
/// SOP Class: Ophthalmic Axial Measurements Storage
#[rustfmt::skip]
pub const OPHTHALMIC_AXIAL_MEASUREMENTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.7";
/// SOP Class: Intraocular Lens Calculations Storage
#[rustfmt::skip]
pub const INTRAOCULAR_LENS_CALCULATIONS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.78.8";
/// SOP Class: Macular Grid Thickness and Volume Report Storage
#[rustfmt::skip]
pub const MACULAR_GRID_THICKNESS_AND_VOLUME_REPORT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.79.1";
/// SOP Class: Standalone Overlay Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STANDALONE_OVERLAY_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.8";
/// SOP Class: Ophthalmic Visual Field Static Perimetry Measurements Storage
#[rustfmt::skip]
pub const OPHTHALMIC_VISUAL_FIELD_STATIC_PERIMETRY_MEASUREMENTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.80.1";
/// SOP Class: Ophthalmic Thickness Map Storage
#[rustfmt::skip]
pub const OPHTHALMIC_THICKNESS_MAP_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.81.1";
/// SOP Class: Corneal Topography Map Storage
#[rustfmt::skip]
pub const CORNEAL_TOPOGRAPHY_MAP_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.82.1";
/// SOP Class: Text SR Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const TEXT_SR_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.1.1.88.1";
/// SOP Class: Basic Text SR Storage
#[rustfmt::skip]
pub const BASIC_TEXT_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.11";
/// SOP Class: Audio SR Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const AUDIO_SR_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.1.1.88.2";
/// SOP Class: Enhanced SR Storage
#[rustfmt::skip]
pub const ENHANCED_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.22";
/// SOP Class: Detail SR Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETAIL_SR_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.1.1.88.3";
/// SOP Class: Comprehensive SR Storage
#[rustfmt::skip]
pub const COMPREHENSIVE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.33";
/// SOP Class: Comprehensive 3D SR Storage
#[rustfmt::skip]
pub const COMPREHENSIVE3_DSR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.34";
/// SOP Class: Extensible SR Storage
#[rustfmt::skip]
pub const EXTENSIBLE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.35";
/// SOP Class: Comprehensive SR Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const COMPREHENSIVE_SR_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.1.1.88.4";
/// SOP Class: Procedure Log Storage
#[rustfmt::skip]
pub const PROCEDURE_LOG_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.40";
/// SOP Class: Mammography CAD SR Storage
#[rustfmt::skip]
pub const MAMMOGRAPHY_CADSR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.50";
/// SOP Class: Key Object Selection Document Storage
#[rustfmt::skip]
pub const KEY_OBJECT_SELECTION_DOCUMENT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.59";
/// SOP Class: Chest CAD SR Storage
#[rustfmt::skip]
pub const CHEST_CADSR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.65";
/// SOP Class: X-Ray Radiation Dose SR Storage
#[rustfmt::skip]
pub const X_RAY_RADIATION_DOSE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.67";
/// SOP Class: Radiopharmaceutical Radiation Dose SR Storage
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_RADIATION_DOSE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.68";
/// SOP Class: Colon CAD SR Storage
#[rustfmt::skip]
pub const COLON_CADSR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.69";
/// SOP Class: Implantation Plan SR Storage
#[rustfmt::skip]
pub const IMPLANTATION_PLAN_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.70";
/// SOP Class: Acquisition Context SR Storage
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.71";
/// SOP Class: Simplified Adult Echo SR Storage
#[rustfmt::skip]
pub const SIMPLIFIED_ADULT_ECHO_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.72";
/// SOP Class: Patient Radiation Dose SR Storage
#[rustfmt::skip]
pub const PATIENT_RADIATION_DOSE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.73";
/// SOP Class: Planned Imaging Agent Administration SR Storage
#[rustfmt::skip]
pub const PLANNED_IMAGING_AGENT_ADMINISTRATION_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.74";
/// SOP Class: Performed Imaging Agent Administration SR Storage
#[rustfmt::skip]
pub const PERFORMED_IMAGING_AGENT_ADMINISTRATION_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.75";
/// SOP Class: Enhanced X-Ray Radiation Dose SR Storage
#[rustfmt::skip]
pub const ENHANCED_X_RAY_RADIATION_DOSE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.76";
/// SOP Class: Standalone Curve Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STANDALONE_CURVE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9";
/// SOP Class: Waveform Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const WAVEFORM_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.1.1.9.1";
/// SOP Class: 12-lead ECG Waveform Storage
#[rustfmt::skip]
pub const TWELVE_LEAD_ECG_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.1.1";
/// SOP Class: General ECG Waveform Storage
#[rustfmt::skip]
pub const GENERAL_ECG_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.1.2";
/// SOP Class: Ambulatory ECG Waveform Storage
#[rustfmt::skip]
pub const AMBULATORY_ECG_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.1.3";
/// SOP Class: Hemodynamic Waveform Storage
#[rustfmt::skip]
pub const HEMODYNAMIC_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.2.1";
/// SOP Class: Cardiac Electrophysiology Waveform Storage
#[rustfmt::skip]
pub const CARDIAC_ELECTROPHYSIOLOGY_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.3.1";
/// SOP Class: Basic Voice Audio Waveform Storage
#[rustfmt::skip]
pub const BASIC_VOICE_AUDIO_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.4.1";
/// SOP Class: General Audio Waveform Storage
#[rustfmt::skip]
pub const GENERAL_AUDIO_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.4.2";
/// SOP Class: Arterial Pulse Waveform Storage
#[rustfmt::skip]
pub const ARTERIAL_PULSE_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.5.1";
/// SOP Class: Respiratory Waveform Storage
#[rustfmt::skip]
pub const RESPIRATORY_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.6.1";
/// SOP Class: Multi-channel Respiratory Waveform Storage
#[rustfmt::skip]
pub const MULTICHANNEL_RESPIRATORY_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.6.2";
/// SOP Class: Routine Scalp Electroencephalogram Waveform Storage
#[rustfmt::skip]
pub const ROUTINE_SCALP_ELECTROENCEPHALOGRAM_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.7.1";
/// SOP Class: Electromyogram Waveform Storage
#[rustfmt::skip]
pub const ELECTROMYOGRAM_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.7.2";
/// SOP Class: Electrooculogram Waveform Storage
#[rustfmt::skip]
pub const ELECTROOCULOGRAM_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.7.3";
/// SOP Class: Sleep Electroencephalogram Waveform Storage
#[rustfmt::skip]
pub const SLEEP_ELECTROENCEPHALOGRAM_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.7.4";
/// SOP Class: Body Position Waveform Storage
#[rustfmt::skip]
pub const BODY_POSITION_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.8.1";
/// SOP Class: Content Assessment Results Storage
#[rustfmt::skip]
pub const CONTENT_ASSESSMENT_RESULTS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.90.1";
/// SOP Class: Microscopy Bulk Simple Annotations Storage
#[rustfmt::skip]
pub const MICROSCOPY_BULK_SIMPLE_ANNOTATIONS_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.91.1";
/// SOP Class: Patient Root Query/Retrieve Information Model - FIND
#[rustfmt::skip]
pub const PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.1.2.1.1";
/// SOP Class: Patient Root Query/Retrieve Information Model - MOVE
#[rustfmt::skip]
pub const PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.1.2.1.2";
/// SOP Class: Patient Root Query/Retrieve Information Model - GET
#[rustfmt::skip]
pub const PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.1.2.1.3";
/// SOP Class: Study Root Query/Retrieve Information Model - FIND
#[rustfmt::skip]
pub const STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.1.2.2.1";
/// SOP Class: Study Root Query/Retrieve Information Model - MOVE
#[rustfmt::skip]
pub const STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.1.2.2.2";
/// SOP Class: Study Root Query/Retrieve Information Model - GET
#[rustfmt::skip]
pub const STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.1.2.2.3";
/// SOP Class: Patient/Study Only Query/Retrieve Information Model - FIND (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PATIENT_STUDY_ONLY_QUERY_RETRIEVE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.1.2.3.1";
/// SOP Class: Patient/Study Only Query/Retrieve Information Model - MOVE (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PATIENT_STUDY_ONLY_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.1.2.3.2";
/// SOP Class: Patient/Study Only Query/Retrieve Information Model - GET (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PATIENT_STUDY_ONLY_QUERY_RETRIEVE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.1.2.3.3";
/// SOP Class: Composite Instance Root Retrieve - MOVE
#[rustfmt::skip]
pub const COMPOSITE_INSTANCE_ROOT_RETRIEVE_MOVE: &str = "1.2.840.10008.5.1.4.1.2.4.2";
/// SOP Class: Composite Instance Root Retrieve - GET
#[rustfmt::skip]
pub const COMPOSITE_INSTANCE_ROOT_RETRIEVE_GET: &str = "1.2.840.10008.5.1.4.1.2.4.3";
/// SOP Class: Composite Instance Retrieve Without Bulk Data - GET
#[rustfmt::skip]
pub const COMPOSITE_INSTANCE_RETRIEVE_WITHOUT_BULK_DATA_GET: &str = "1.2.840.10008.5.1.4.1.2.5.3";
/// SOP Class: Defined Procedure Protocol Information Model - FIND
#[rustfmt::skip]
pub const DEFINED_PROCEDURE_PROTOCOL_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.20.1";
/// SOP Class: Defined Procedure Protocol Information Model - MOVE
#[rustfmt::skip]
pub const DEFINED_PROCEDURE_PROTOCOL_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.20.2";
/// SOP Class: Defined Procedure Protocol Information Model - GET
#[rustfmt::skip]
pub const DEFINED_PROCEDURE_PROTOCOL_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.20.3";
/// SOP Class: Modality Worklist Information Model - FIND
#[rustfmt::skip]
pub const MODALITY_WORKLIST_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.31";
/// Meta SOP Class: General Purpose Worklist Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const GENERAL_PURPOSE_WORKLIST_MANAGEMENT_META: &str = "1.2.840.10008.5.1.4.32";
/// SOP Class: General Purpose Worklist Information Model - FIND (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const GENERAL_PURPOSE_WORKLIST_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.32.1";
/// SOP Class: General Purpose Scheduled Procedure Step SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP: &str = "1.2.840.10008.5.1.4.32.2";
/// SOP Class: General Purpose Performed Procedure Step SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEP: &str = "1.2.840.10008.5.1.4.32.3";
/// SOP Class: Instance Availability Notification SOP Class
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY_NOTIFICATION: &str = "1.2.840.10008.5.1.4.33";
/// SOP Class: RT Beams Delivery Instruction Storage - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const RT_BEAMS_DELIVERY_INSTRUCTION_STORAGE_TRIAL: &str = "1.2.840.10008.5.1.4.34.1";
/// SOP Class: RT Brachy Application Setup Delivery Instruction Storage
#[rustfmt::skip]
pub const RT_BRACHY_APPLICATION_SETUP_DELIVERY_INSTRUCTION_STORAGE: &str = "1.2.840.10008.5.1.4.34.10";
/// SOP Class: RT Conventional Machine Verification - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const RT_CONVENTIONAL_MACHINE_VERIFICATION_TRIAL: &str = "1.2.840.10008.5.1.4.34.2";
/// SOP Class: RT Ion Machine Verification - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const RT_ION_MACHINE_VERIFICATION_TRIAL: &str = "1.2.840.10008.5.1.4.34.3";
/// Service Class: Unified Worklist and Procedure Step Service Class - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const UNIFIED_WORKLIST_AND_PROCEDURE_STEP_TRIAL: &str = "1.2.840.10008.5.1.4.34.4";
/// SOP Class: Unified Procedure Step - Push SOP Class - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_PUSH_TRIAL: &str = "1.2.840.10008.5.1.4.34.4.1";
/// SOP Class: Unified Procedure Step - Watch SOP Class - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_WATCH_TRIAL: &str = "1.2.840.10008.5.1.4.34.4.2";
/// SOP Class: Unified Procedure Step - Pull SOP Class - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_PULL_TRIAL: &str = "1.2.840.10008.5.1.4.34.4.3";
/// SOP Class: Unified Procedure Step - Event SOP Class - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_EVENT_TRIAL: &str = "1.2.840.10008.5.1.4.34.4.4";
/// Well-known SOP Instance: UPS Global Subscription SOP Instance
#[rustfmt::skip]
pub const UPS_GLOBAL_SUBSCRIPTION_INSTANCE: &str = "1.2.840.10008.5.1.4.34.5";
/// Well-known SOP Instance: UPS Filtered Global Subscription SOP Instance
#[rustfmt::skip]
pub const UPS_FILTERED_GLOBAL_SUBSCRIPTION_INSTANCE: &str = "1.2.840.10008.5.1.4.34.5.1";
/// Service Class: Unified Worklist and Procedure Step Service Class
#[rustfmt::skip]
pub const UNIFIED_WORKLIST_AND_PROCEDURE_STEP: &str = "1.2.840.10008.5.1.4.34.6";
/// SOP Class: Unified Procedure Step - Push SOP Class
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_PUSH: &str = "1.2.840.10008.5.1.4.34.6.1";
/// SOP Class: Unified Procedure Step - Watch SOP Class
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_WATCH: &str = "1.2.840.10008.5.1.4.34.6.2";
/// SOP Class: Unified Procedure Step - Pull SOP Class
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_PULL: &str = "1.2.840.10008.5.1.4.34.6.3";
/// SOP Class: Unified Procedure Step - Event SOP Class
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_EVENT: &str = "1.2.840.10008.5.1.4.34.6.4";
/// SOP Class: Unified Procedure Step - Query SOP Class
#[rustfmt::skip]
pub const UNIFIED_PROCEDURE_STEP_QUERY: &str = "1.2.840.10008.5.1.4.34.6.5";
/// SOP Class: RT Beams Delivery Instruction Storage
#[rustfmt::skip]
pub const RT_BEAMS_DELIVERY_INSTRUCTION_STORAGE: &str = "1.2.840.10008.5.1.4.34.7";
/// SOP Class: RT Conventional Machine Verification
#[rustfmt::skip]
pub const RT_CONVENTIONAL_MACHINE_VERIFICATION: &str = "1.2.840.10008.5.1.4.34.8";
/// SOP Class: RT Ion Machine Verification
#[rustfmt::skip]
pub const RT_ION_MACHINE_VERIFICATION: &str = "1.2.840.10008.5.1.4.34.9";
/// SOP Class: General Relevant Patient Information Query
#[rustfmt::skip]
pub const GENERAL_RELEVANT_PATIENT_INFORMATION_QUERY: &str = "1.2.840.10008.5.1.4.37.1";
/// SOP Class: Breast Imaging Relevant Patient Information Query
#[rustfmt::skip]
pub const BREAST_IMAGING_RELEVANT_PATIENT_INFORMATION_QUERY: &str = "1.2.840.10008.5.1.4.37.2";
/// SOP Class: Cardiac Relevant Patient Information Query
#[rustfmt::skip]
pub const CARDIAC_RELEVANT_PATIENT_INFORMATION_QUERY: &str = "1.2.840.10008.5.1.4.37.3";
/// SOP Class: Hanging Protocol Storage
#[rustfmt::skip]
pub const HANGING_PROTOCOL_STORAGE: &str = "1.2.840.10008.5.1.4.38.1";
/// SOP Class: Hanging Protocol Information Model - FIND
#[rustfmt::skip]
pub const HANGING_PROTOCOL_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.38.2";
/// SOP Class: Hanging Protocol Information Model - MOVE
#[rustfmt::skip]
pub const HANGING_PROTOCOL_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.38.3";
/// SOP Class: Hanging Protocol Information Model - GET
#[rustfmt::skip]
pub const HANGING_PROTOCOL_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.38.4";
/// SOP Class: Color Palette Storage
#[rustfmt::skip]
pub const COLOR_PALETTE_STORAGE: &str = "1.2.840.10008.5.1.4.39.1";
/// SOP Class: Color Palette Query/Retrieve Information Model - FIND
#[rustfmt::skip]
pub const COLOR_PALETTE_QUERY_RETRIEVE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.39.2";
/// SOP Class: Color Palette Query/Retrieve Information Model - MOVE
#[rustfmt::skip]
pub const COLOR_PALETTE_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.39.3";
/// SOP Class: Color Palette Query/Retrieve Information Model - GET
#[rustfmt::skip]
pub const COLOR_PALETTE_QUERY_RETRIEVE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.39.4";
/// SOP Class: Product Characteristics Query SOP Class
#[rustfmt::skip]
pub const PRODUCT_CHARACTERISTICS_QUERY: &str = "1.2.840.10008.5.1.4.41";
/// SOP Class: Substance Approval Query SOP Class
#[rustfmt::skip]
pub const SUBSTANCE_APPROVAL_QUERY: &str = "1.2.840.10008.5.1.4.42";
/// SOP Class: Generic Implant Template Storage
#[rustfmt::skip]
pub const GENERIC_IMPLANT_TEMPLATE_STORAGE: &str = "1.2.840.10008.5.1.4.43.1";
/// SOP Class: Generic Implant Template Information Model - FIND
#[rustfmt::skip]
pub const GENERIC_IMPLANT_TEMPLATE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.43.2";
/// SOP Class: Generic Implant Template Information Model - MOVE
#[rustfmt::skip]
pub const GENERIC_IMPLANT_TEMPLATE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.43.3";
/// SOP Class: Generic Implant Template Information Model - GET
#[rustfmt::skip]
pub const GENERIC_IMPLANT_TEMPLATE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.43.4";
/// SOP Class: Implant Assembly Template Storage
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_STORAGE: &str = "1.2.840.10008.5.1.4.44.1";
/// SOP Class: Implant Assembly Template Information Model - FIND
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.44.2";
/// SOP Class: Implant Assembly Template Information Model - MOVE
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.44.3";
/// SOP Class: Implant Assembly Template Information Model - GET
#[rustfmt::skip]
pub const IMPLANT_ASSEMBLY_TEMPLATE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.44.4";
/// SOP Class: Implant Template Group Storage
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_STORAGE: &str = "1.2.840.10008.5.1.4.45.1";
/// SOP Class: Implant Template Group Information Model - FIND
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.45.2";
/// SOP Class: Implant Template Group Information Model - MOVE
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.45.3";
/// SOP Class: Implant Template Group Information Model - GET
#[rustfmt::skip]
pub const IMPLANT_TEMPLATE_GROUP_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.45.4";
/// Application Hosting Model: Native DICOM Model
#[rustfmt::skip]
pub const NATIVE_DICOM_MODEL: &str = "1.2.840.10008.7.1.1";
/// Application Hosting Model: Abstract Multi-Dimensional Image Model
#[rustfmt::skip]
pub const ABSTRACT_MULTI_DIMENSIONAL_IMAGE_MODEL: &str = "1.2.840.10008.7.1.2";
/// Mapping Resource: DICOM Content Mapping Resource
#[rustfmt::skip]
pub const DICOM_CONTENT_MAPPING_RESOURCE: &str = "1.2.840.10008.8.1.1";

/// All UIDs known to the standard registry,
/// in the order in which they are declared.
#[rustfmt::skip]
pub static ENTRIES: &[UidDictionaryEntryRef<'static>] = &[
    UidDictionaryEntryRef::new(VERIFICATION, "Verification SOP Class", "VerificationSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLICIT_VR_LITTLE_ENDIAN, "Implicit VR Little Endian: Default Transfer Syntax for DICOM", "ImplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(EXPLICIT_VR_LITTLE_ENDIAN, "Explicit VR Little Endian", "ExplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN, "Encapsulated Uncompressed Explicit VR Little Endian", "EncapsulatedUncompressedExplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, "Deflated Explicit VR Little Endian", "DeflatedExplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(EXPLICIT_VR_BIG_ENDIAN, "Explicit VR Big Endian (Retired)", "ExplicitVRBigEndianRetired", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(MPEG2MPML, "MPEG2 Main Profile / Main Level", "MPEG2MainProfileMainLevel", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG2MPMLF, "Fragmentable MPEG2 Main Profile / Main Level", "FragmentableMPEG2MainProfileMainLevel", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG2MPHL, "MPEG2 Main Profile / High Level", "MPEG2MainProfileHighLevel", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG2MPHLF, "Fragmentable MPEG2 Main Profile / High Level", "FragmentableMPEG2MainProfileHighLevel", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP41, "MPEG-4 AVC/H.264 High Profile / Level 4.1", "MPEG4AVCH264HighProfileLevel41", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP41F, "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1", "FragmentableMPEG4AVCH264HighProfileLevel41", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP41BD, "MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1", "MPEG4AVCH264BDCompatibleHighProfileLevel41", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP41BDF, "Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1", "FragmentableMPEG4AVCH264BDCompatibleHighProfileLevel41", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP422D, "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video", "MPEG4AVCH264HighProfileLevel42For2DVideo", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP422DF, "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video", "FragmentableMPEG4AVCH264HighProfileLevel42For2DVideo", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP423D, "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video", "MPEG4AVCH264HighProfileLevel42For3DVideo", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP423DF, "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video", "FragmentableMPEG4AVCH264HighProfileLevel42For3DVideo", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP42STEREO, "MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2", "MPEG4AVCH264StereoHighProfileLevel42", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MPEG4HP42STEREOF, "Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2", "FragmentableMPEG4AVCH264StereoHighProfileLevel42", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(HEVCMP51, "HEVC/H.265 Main Profile / Level 5.1", "HEVCH265MainProfileLevel51", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(HEVCM10P51, "HEVC/H.265 Main 10 Profile / Level 5.1", "HEVCH265Main10ProfileLevel51", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG_BASELINE8_BIT, "JPEG Baseline (Process 1): Default Transfer Syntax for Lossy JPEG 8 Bit Image Compression", "JPEGBaselineProcess1", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG_EXTENDED12_BIT, "JPEG Extended (Process 2", "JPEGExtendedProcess2", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG_EXTENDED35, "JPEG Extended (Process 3", "JPEGExtendedProcess3", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL68, "JPEG Spectral Selection, Non-Hierarchical (Process 6", "JPEGSpectralSelectionNonHierarchicalProcess6", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL79, "JPEG Spectral Selection, Non-Hierarchical (Process 7", "JPEGSpectralSelectionNonHierarchicalProcess7", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1012, "JPEG Full Progression, Non-Hierarchical (Process 10", "JPEGFullProgressionNonHierarchicalProcess10", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1113, "JPEG Full Progression, Non-Hierarchical (Process 11", "JPEGFullProgressionNonHierarchicalProcess11", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_LOSSLESS, "JPEG Lossless, Non-Hierarchical (Process 14)", "JPEGLosslessNonHierarchicalProcess14", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG_LOSSLESS_NON_HIERARCHICAL15, "JPEG Lossless, Non-Hierarchical (Process 15) (Retired)", "JPEGLosslessNonHierarchicalProcess15Retired", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_EXTENDED_HIERARCHICAL1618, "JPEG Extended, Hierarchical (Process 16", "JPEGExtendedHierarchicalProcess16", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_EXTENDED_HIERARCHICAL1719, "JPEG Extended, Hierarchical (Process 17", "JPEGExtendedHierarchicalProcess17", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_SPECTRAL_SELECTION_HIERARCHICAL2022, "JPEG Spectral Selection, Hierarchical (Process 20", "JPEGSpectralSelectionHierarchicalProcess20", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_SPECTRAL_SELECTION_HIERARCHICAL2123, "JPEG Spectral Selection, Hierarchical (Process 21", "JPEGSpectralSelectionHierarchicalProcess21", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_FULL_PROGRESSION_HIERARCHICAL2426, "JPEG Full Progression, Hierarchical (Process 24", "JPEGFullProgressionHierarchicalProcess24", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_FULL_PROGRESSION_HIERARCHICAL2527, "JPEG Full Progression, Hierarchical (Process 25", "JPEGFullProgressionHierarchicalProcess25", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_LOSSLESS_HIERARCHICAL28, "JPEG Lossless, Hierarchical (Process 28) (Retired)", "JPEGLosslessHierarchicalProcess28Retired", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_LOSSLESS_HIERARCHICAL29, "JPEG Lossless, Hierarchical (Process 29) (Retired)", "JPEGLosslessHierarchicalProcess29Retired", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_LOSSLESS_SV1, "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1]): Default Transfer Syntax for Lossless JPEG Image Compression", "JPEGLosslessNonHierarchicalFirstOrderPredictionProcess14SelectionValue1", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEGLS_LOSSLESS, "JPEG-LS Lossless Image Compression", "JPEGLSLosslessImageCompression", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEGLS_NEAR_LOSSLESS, "JPEG-LS Lossy (Near-Lossless) Image Compression", "JPEGLSLossyNearLosslessImageCompression", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG2000_LOSSLESS, "JPEG 2000 Image Compression (Lossless Only)", "JPEG2000ImageCompressionLosslessOnly", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG2000, "JPEG 2000 Image Compression", "JPEG2000ImageCompression", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG2000MC_LOSSLESS, "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)", "JPEG2000Part2MultiComponentImageCompressionLosslessOnly", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG2000MC, "JPEG 2000 Part 2 Multi-component Image Compression", "JPEG2000Part2MultiComponentImageCompression", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPIP_REFERENCED, "JPIP Referenced", "JPIPReferenced", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPIP_REFERENCED_DEFLATE, "JPIP Referenced Deflate", "JPIPReferencedDeflate", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(RLE_LOSSLESS, "RLE Lossless", "RLELossless", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(RFC2557MIME_ENCAPSULATION, "RFC 2557 MIME encapsulation (Retired)", "RFC2557MIMEEncapsulationRetired", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(XML_ENCODING, "XML Encoding (Retired)", "XMLEncodingRetired", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(SMPTEST211020_UNCOMPRESSED_PROGRESSIVE_ACTIVE_VIDEO, "SMPTE ST 2110-20 Uncompressed Progressive Active Video", "SMPTEST211020UncompressedProgressiveActiveVideo", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(SMPTEST211020_UNCOMPRESSED_INTERLACED_ACTIVE_VIDEO, "SMPTE ST 2110-20 Uncompressed Interlaced Active Video", "SMPTEST211020UncompressedInterlacedActiveVideo", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(SMPTEST211030PCM_DIGITAL_AUDIO, "SMPTE ST 2110-30 PCM Digital Audio", "SMPTEST211030PCMDigitalAudio", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(PAPYRUS3_IMPLICIT_VR_LITTLE_ENDIAN, "Papyrus 3 Implicit VR Little Endian (Retired)", "Papyrus3ImplicitVRLittleEndianRetired", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(STORAGE_COMMITMENT_PUSH_MODEL, "Storage Commitment Push Model SOP Class", "StorageCommitmentPushModelSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STORAGE_COMMITMENT_PUSH_MODEL_INSTANCE, "Storage Commitment Push Model SOP Instance", "StorageCommitmentPushModelSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(STORAGE_COMMITMENT_PULL_MODEL, "Storage Commitment Pull Model SOP Class (Retired)", "StorageCommitmentPullModelSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(STORAGE_COMMITMENT_PULL_MODEL_INSTANCE, "Storage Commitment Pull Model SOP Instance (Retired)", "StorageCommitmentPullModelSOPInstanceRetired", UidType::WellKnownSopInstance, true),
    UidDictionaryEntryRef::new(MEDIA_STORAGE_DIRECTORY_STORAGE, "Media Storage Directory Storage", "MediaStorageDirectoryStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PROCEDURAL_EVENT_LOGGING, "Procedural Event Logging SOP Class", "ProceduralEventLoggingSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PROCEDURAL_EVENT_LOGGING_INSTANCE, "Procedural Event Logging SOP Instance", "ProceduralEventLoggingSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(SUBSTANCE_ADMINISTRATION_LOGGING, "Substance Administration Logging SOP Class", "SubstanceAdministrationLoggingSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SUBSTANCE_ADMINISTRATION_LOGGING_INSTANCE, "Substance Administration Logging SOP Instance", "SubstanceAdministrationLoggingSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(HOT_IRON_PALETTE, "Hot Iron Color Palette SOP Instance", "HotIronColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(PET_PALETTE, "PET Color Palette SOP Instance", "PETColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(HOT_METAL_BLUE_PALETTE, "Hot Metal Blue Color Palette SOP Instance", "HotMetalBlueColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(PET20_STEP_PALETTE, "PET 20 Step Color Palette SOP Instance", "PET20StepColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(SPRING_PALETTE, "Spring Color Palette SOP Instance", "SpringColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(SUMMER_PALETTE, "Summer Color Palette SOP Instance", "SummerColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(FALL_PALETTE, "Fall Color Palette SOP Instance", "FallColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(WINTER_PALETTE, "Winter Color Palette SOP Instance", "WinterColorPaletteSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(BASIC_STUDY_CONTENT_NOTIFICATION, "Basic Study Content Notification SOP Class (Retired)", "BasicStudyContentNotificationSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(VIDEO_ENDOSCOPIC_IMAGE_REAL_TIME_COMMUNICATION, "Video Endoscopic Image Real-Time Communication", "VideoEndoscopicImageRealTimeCommunication", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VIDEO_PHOTOGRAPHIC_IMAGE_REAL_TIME_COMMUNICATION, "Video Photographic Image Real-Time Communication", "VideoPhotographicImageRealTimeCommunication", UidType::SopClass, false),
    UidDictionaryEntryRef::new(AUDIO_WAVEFORM_REAL_TIME_COMMUNICATION, "Audio Waveform Real-Time Communication", "AudioWaveformRealTimeCommunication", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RENDITION_SELECTION_DOCUMENT_REAL_TIME_COMMUNICATION, "Rendition Selection Document Real-Time Communication", "RenditionSelectionDocumentRealTimeCommunication", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOM_DEVICE_NAME, "dicomDeviceName", "DicomDeviceName", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_ASSOCIATION_INITIATOR, "dicomAssociationInitiator", "DicomAssociationInitiator", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_ASSOCIATION_ACCEPTOR, "dicomAssociationAcceptor", "DicomAssociationAcceptor", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_HOSTNAME, "dicomHostname", "DicomHostname", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_PORT, "dicomPort", "DicomPort", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_SOP_CLASS, "dicomSOPClass", "DicomSOPClass", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_TRANSFER_ROLE, "dicomTransferRole", "DicomTransferRole", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_TRANSFER_SYNTAX, "dicomTransferSyntax", "DicomTransferSyntax", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_PRIMARY_DEVICE_TYPE, "dicomPrimaryDeviceType", "DicomPrimaryDeviceType", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_RELATED_DEVICE_REFERENCE, "dicomRelatedDeviceReference", "DicomRelatedDeviceReference", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_PREFERRED_CALLED_AE_TITLE, "dicomPreferredCalledAETitle", "DicomPreferredCalledAETitle", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_DESCRIPTION, "dicomDescription", "DicomDescription", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_TLS_CYPHERSUITE, "dicomTLSCyphersuite", "DicomTLSCyphersuite", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_AUTHORIZED_NODE_CERTIFICATE_REFERENCE, "dicomAuthorizedNodeCertificateReference", "DicomAuthorizedNodeCertificateReference", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_THIS_NODE_CERTIFICATE_REFERENCE, "dicomThisNodeCertificateReference", "DicomThisNodeCertificateReference", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_INSTALLED, "dicomInstalled", "DicomInstalled", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_STATION_NAME, "dicomStationName", "DicomStationName", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_DEVICE_SERIAL_NUMBER, "dicomDeviceSerialNumber", "DicomDeviceSerialNumber", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_INSTITUTION_NAME, "dicomInstitutionName", "DicomInstitutionName", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_INSTITUTION_ADDRESS, "dicomInstitutionAddress", "DicomInstitutionAddress", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_INSTITUTION_DEPARTMENT_NAME, "dicomInstitutionDepartmentName", "DicomInstitutionDepartmentName", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_ISSUER_OF_PATIENT_ID, "dicomIssuerOfPatientID", "DicomIssuerOfPatientID", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_MANUFACTURER, "dicomManufacturer", "DicomManufacturer", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_PREFERRED_CALLING_AE_TITLE, "dicomPreferredCallingAETitle", "DicomPreferredCallingAETitle", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_SUPPORTED_CHARACTER_SET, "dicomSupportedCharacterSet", "DicomSupportedCharacterSet", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_MANUFACTURER_MODEL_NAME, "dicomManufacturerModelName", "DicomManufacturerModelName", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_SOFTWARE_VERSION, "dicomSoftwareVersion", "DicomSoftwareVersion", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_VENDOR_DATA, "dicomVendorData", "DicomVendorData", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_AE_TITLE, "dicomAETitle", "DicomAETitle", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_NETWORK_CONNECTION_REFERENCE, "dicomNetworkConnectionReference", "DicomNetworkConnectionReference", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_APPLICATION_CLUSTER, "dicomApplicationCluster", "DicomApplicationCluster", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_CONFIGURATION_ROOT, "dicomConfigurationRoot", "DicomConfigurationRoot", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_DEVICES_ROOT, "dicomDevicesRoot", "DicomDevicesRoot", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_UNIQUE_AE_TITLES_REGISTRY_ROOT, "dicomUniqueAETitlesRegistryRoot", "DicomUniqueAETitlesRegistryRoot", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_DEVICE, "dicomDevice", "DicomDevice", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_NETWORK_AE, "dicomNetworkAE", "DicomNetworkAE", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_NETWORK_CONNECTION, "dicomNetworkConnection", "DicomNetworkConnection", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_UNIQUE_AE_TITLE, "dicomUniqueAETitle", "DicomUniqueAETitle", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(DICOM_TRANSFER_CAPABILITY, "dicomTransferCapability", "DicomTransferCapability", UidType::LdapOid, false),
    UidDictionaryEntryRef::new(UTC, "Universal Coordinated Time", "UniversalCoordinatedTime", UidType::SynchronizationFrameOfReference, false),
    UidDictionaryEntryRef::new(DC, "Dublin Core", "DublinCore", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(NYUMCCG, "New York University Melanoma Clinical Cooperative Group", "NewYorkUniversityMelanomaClinicalCooperativeGroup", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(MAYONRISBSASRG, "Mayo Clinic Non-radiological Images Specific Body Structure Anatomical Surface Region Guide", "MayoClinicNonRadiologicalImagesSpecificBodyStructureAnatomicalSurfaceRegionGuide", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(IBSI, "Image Biomarker Standardisation Initiative", "ImageBiomarkerStandardisationInitiative", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(RO, "Radiomics Ontology", "RadiomicsOntology", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(RADELEMENT, "RadElement", "RadElement", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(I11, "ICD-11", "ICD11", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(UNS, "Unified numbering system (UNS) for metals and alloys", "UnifiedNumberingSystemUNSForMetalsAndAlloys", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(RRID, "Research Resource Identification", "ResearchResourceIdentification", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(DCM, "DICOM Controlled Terminology", "DICOMControlledTerminology", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(MA, "Adult Mouse Anatomy Ontology", "AdultMouseAnatomyOntology", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(UBERON, "Uberon Ontology", "UberonOntology", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(ITIS_TSN, "Integrated Taxonomic Information System (ITIS) Taxonomic Serial Number (TSN)", "IntegratedTaxonomicInformationSystemITISTaxonomicSerialNumberTSN", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(MGI, "Mouse Genome Initiative (MGI)", "MouseGenomeInitiativeMGI", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(PUBCHEM_CID, "PubChem Compound CID", "PubChemCompoundCID", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(DCMUID, "DICOM UID Registry", "DICOMUIDRegistry", UidType::DicomUidsAsCodingScheme, false),
    UidDictionaryEntryRef::new(DICOM_APPLICATION_CONTEXT, "DICOM Application Context Name", "DICOMApplicationContextName", UidType::ApplicationContextName, false),
    UidDictionaryEntryRef::new(DETACHED_PATIENT_MANAGEMENT, "Detached Patient Management SOP Class (Retired)", "DetachedPatientManagementSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(DETACHED_PATIENT_MANAGEMENT_META, "Detached Patient Management Meta SOP Class (Retired)", "DetachedPatientManagementMetaSOPClassRetired", UidType::MetaSopClass, true),
    UidDictionaryEntryRef::new(DETACHED_VISIT_MANAGEMENT, "Detached Visit Management SOP Class (Retired)", "DetachedVisitManagementSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(DETACHED_STUDY_MANAGEMENT, "Detached Study Management SOP Class (Retired)", "DetachedStudyManagementSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(STUDY_COMPONENT_MANAGEMENT, "Study Component Management SOP Class (Retired)", "StudyComponentManagementSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(MODALITY_PERFORMED_PROCEDURE_STEP, "Modality Performed Procedure Step SOP Class", "ModalityPerformedProcedureStepSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MODALITY_PERFORMED_PROCEDURE_STEP_RETRIEVE, "Modality Performed Procedure Step Retrieve SOP Class", "ModalityPerformedProcedureStepRetrieveSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MODALITY_PERFORMED_PROCEDURE_STEP_NOTIFICATION, "Modality Performed Procedure Step Notification SOP Class", "ModalityPerformedProcedureStepNotificationSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DETACHED_RESULTS_MANAGEMENT, "Detached Results Management SOP Class (Retired)", "DetachedResultsManagementSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(DETACHED_RESULTS_MANAGEMENT_META, "Detached Results Management Meta SOP Class (Retired)", "DetachedResultsManagementMetaSOPClassRetired", UidType::MetaSopClass, true),
    UidDictionaryEntryRef::new(DETACHED_STUDY_MANAGEMENT_META, "Detached Study Management Meta SOP Class (Retired)", "DetachedStudyManagementMetaSOPClassRetired", UidType::MetaSopClass, true),
    UidDictionaryEntryRef::new(DETACHED_INTERPRETATION_MANAGEMENT, "Detached Interpretation Management SOP Class (Retired)", "DetachedInterpretationManagementSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(STORAGE, "Storage Service Class", "StorageServiceClass", UidType::ServiceClass, false),
    UidDictionaryEntryRef::new(BASIC_FILM_SESSION, "Basic Film Session SOP Class", "BasicFilmSessionSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PRINT_JOB, "Print Job SOP Class", "PrintJobSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BASIC_ANNOTATION_BOX, "Basic Annotation Box SOP Class", "BasicAnnotationBoxSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PRINTER, "Printer SOP Class", "PrinterSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PRINTER_CONFIGURATION_RETRIEVAL, "Printer Configuration Retrieval SOP Class", "PrinterConfigurationRetrievalSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PRINTER_INSTANCE, "Printer SOP Instance", "PrinterSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(PRINTER_CONFIGURATION_RETRIEVAL_INSTANCE, "Printer Configuration Retrieval SOP Instance", "PrinterConfigurationRetrievalSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(BASIC_COLOR_PRINT_MANAGEMENT_META, "Basic Color Print Management Meta SOP Class", "BasicColorPrintManagementMetaSOPClass", UidType::MetaSopClass, false),
    UidDictionaryEntryRef::new(REFERENCED_COLOR_PRINT_MANAGEMENT_META, "Referenced Color Print Management Meta SOP Class (Retired)", "ReferencedColorPrintManagementMetaSOPClassRetired", UidType::MetaSopClass, true),
    UidDictionaryEntryRef::new(BASIC_FILM_BOX, "Basic Film Box SOP Class", "BasicFilmBoxSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VOILUT_BOX, "VOI LUT Box SOP Class", "VOILUTBoxSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PRESENTATION_LUT, "Presentation LUT SOP Class", "PresentationLUTSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMAGE_OVERLAY_BOX, "Image Overlay Box SOP Class (Retired)", "ImageOverlayBoxSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(BASIC_PRINT_IMAGE_OVERLAY_BOX, "Basic Print Image Overlay Box SOP Class (Retired)", "BasicPrintImageOverlayBoxSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(PRINT_QUEUE_INSTANCE, "Print Queue SOP Instance (Retired)", "PrintQueueSOPInstanceRetired", UidType::WellKnownSopInstance, true),
    UidDictionaryEntryRef::new(PRINT_QUEUE_MANAGEMENT, "Print Queue Management SOP Class (Retired)", "PrintQueueManagementSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(STORED_PRINT_STORAGE, "Stored Print Storage SOP Class (Retired)", "StoredPrintStorageSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(HARDCOPY_GRAYSCALE_IMAGE_STORAGE, "Hardcopy Grayscale Image Storage SOP Class (Retired)", "HardcopyGrayscaleImageStorageSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(HARDCOPY_COLOR_IMAGE_STORAGE, "Hardcopy Color Image Storage SOP Class (Retired)", "HardcopyColorImageStorageSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(PULL_PRINT_REQUEST, "Pull Print Request SOP Class (Retired)", "PullPrintRequestSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(PULL_STORED_PRINT_MANAGEMENT_META, "Pull Stored Print Management Meta SOP Class (Retired)", "PullStoredPrintManagementMetaSOPClassRetired", UidType::MetaSopClass, true),
    UidDictionaryEntryRef::new(MEDIA_CREATION_MANAGEMENT, "Media Creation Management SOP Class UID", "MediaCreationManagementSOPClassUID", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BASIC_GRAYSCALE_IMAGE_BOX, "Basic Grayscale Image Box SOP Class", "BasicGrayscaleImageBoxSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BASIC_COLOR_IMAGE_BOX, "Basic Color Image Box SOP Class", "BasicColorImageBoxSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(REFERENCED_IMAGE_BOX, "Referenced Image Box SOP Class (Retired)", "ReferencedImageBoxSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(DISPLAY_SYSTEM, "Display System SOP Class", "DisplaySystemSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DISPLAY_SYSTEM_INSTANCE, "Display System SOP Instance", "DisplaySystemSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(BASIC_GRAYSCALE_PRINT_MANAGEMENT_META, "Basic Grayscale Print Management Meta SOP Class", "BasicGrayscalePrintManagementMetaSOPClass", UidType::MetaSopClass, false),
    UidDictionaryEntryRef::new(REFERENCED_GRAYSCALE_PRINT_MANAGEMENT_META, "Referenced Grayscale Print Management Meta SOP Class (Retired)", "ReferencedGrayscalePrintManagementMetaSOPClassRetired", UidType::MetaSopClass, true),
    UidDictionaryEntryRef::new(COMPUTED_RADIOGRAPHY_IMAGE_STORAGE, "Computed Radiography Image Storage", "ComputedRadiographyImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION, "Digital X-Ray Image Storage - For Presentation", "DigitalXRayImageStorageForPresentation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING, "Digital X-Ray Image Storage - For Processing", "DigitalXRayImageStorageForProcessing", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DIGITAL_MAMMOGRAPHY_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION, "Digital Mammography X-Ray Image Storage - For Presentation", "DigitalMammographyXRayImageStorageForPresentation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DIGITAL_MAMMOGRAPHY_X_RAY_IMAGE_STORAGE_FOR_PROCESSING, "Digital Mammography X-Ray Image Storage - For Processing", "DigitalMammographyXRayImageStorageForProcessing", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DIGITAL_INTRA_ORAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION, "Digital Intra-Oral X-Ray Image Storage - For Presentation", "DigitalIntraOralXRayImageStorageForPresentation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DIGITAL_INTRA_ORAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING, "Digital Intra-Oral X-Ray Image Storage - For Processing", "DigitalIntraOralXRayImageStorageForProcessing", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STANDALONE_MODALITY_LUT_STORAGE, "Standalone Modality LUT Storage (Retired)", "StandaloneModalityLUTStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(ENCAPSULATED_PDF_STORAGE, "Encapsulated PDF Storage", "EncapsulatedPDFStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENCAPSULATED_CDA_STORAGE, "Encapsulated CDA Storage", "EncapsulatedCDAStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENCAPSULATED_STL_STORAGE, "Encapsulated STL Storage", "EncapsulatedSTLStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENCAPSULATED_OBJ_STORAGE, "Encapsulated OBJ Storage", "EncapsulatedOBJStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENCAPSULATED_MTL_STORAGE, "Encapsulated MTL Storage", "EncapsulatedMTLStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STANDALONE_VOILUT_STORAGE, "Standalone VOI LUT Storage (Retired)", "StandaloneVOILUTStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(GRAYSCALE_SOFTCOPY_PRESENTATION_STATE_STORAGE, "Grayscale Softcopy Presentation State Storage", "GrayscaleSoftcopyPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SEGMENTED_VOLUME_RENDERING_VOLUMETRIC_PRESENTATION_STATE_STORAGE, "Segmented Volume Rendering Volumetric Presentation State Storage", "SegmentedVolumeRenderingVolumetricPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MULTIPLE_VOLUME_RENDERING_VOLUMETRIC_PRESENTATION_STATE_STORAGE, "Multiple Volume Rendering Volumetric Presentation State Storage", "MultipleVolumeRenderingVolumetricPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VARIABLE_MODALITY_LUT_PRESENTATION_STATE_STORAGE, "Variable Modality LUT Softcopy Presentation State Storage", "VariableModalityLUTSoftcopyPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COLOR_SOFTCOPY_PRESENTATION_STATE_STORAGE, "Color Softcopy Presentation State Storage", "ColorSoftcopyPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PSEUDO_COLOR_SOFTCOPY_PRESENTATION_STATE_STORAGE, "Pseudo-Color Softcopy Presentation State Storage", "PseudoColorSoftcopyPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BLENDING_SOFTCOPY_PRESENTATION_STATE_STORAGE, "Blending Softcopy Presentation State Storage", "BlendingSoftcopyPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(XAXRF_GRAYSCALE_SOFTCOPY_PRESENTATION_STATE_STORAGE, "XA/XRF Grayscale Softcopy Presentation State Storage", "XAXRFGrayscaleSoftcopyPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GRAYSCALE_PLANAR_MPR_VOLUMETRIC_PRESENTATION_STATE_STORAGE, "Grayscale Planar MPR Volumetric Presentation State Storage", "GrayscalePlanarMPRVolumetricPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COMPOSITING_PLANAR_MPR_VOLUMETRIC_PRESENTATION_STATE_STORAGE, "Compositing Planar MPR Volumetric Presentation State Storage", "CompositingPlanarMPRVolumetricPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ADVANCED_BLENDING_PRESENTATION_STATE_STORAGE, "Advanced Blending Presentation State Storage", "AdvancedBlendingPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VOLUME_RENDERING_VOLUMETRIC_PRESENTATION_STATE_STORAGE, "Volume Rendering Volumetric Presentation State Storage", "VolumeRenderingVolumetricPresentationStateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(X_RAY_ANGIOGRAPHIC_IMAGE_STORAGE, "X-Ray Angiographic Image Storage", "XRayAngiographicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_XA_IMAGE_STORAGE, "Enhanced XA Image Storage", "EnhancedXAImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(X_RAY_RADIOFLUOROSCOPIC_IMAGE_STORAGE, "X-Ray Radiofluoroscopic Image Storage", "XRayRadiofluoroscopicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_XRF_IMAGE_STORAGE, "Enhanced XRF Image Storage", "EnhancedXRFImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(X_RAY_ANGIOGRAPHIC_BI_PLANE_IMAGE_STORAGE, "X-Ray Angiographic Bi-Plane Image Storage (Retired)", "XRayAngiographicBiPlaneImageStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE, "Positron Emission Tomography Image Storage", "PositronEmissionTomographyImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(LEGACY_CONVERTED_ENHANCED_PET_IMAGE_STORAGE, "Legacy Converted Enhanced PET Image Storage", "LegacyConvertedEnhancedPETImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STANDALONE_PET_CURVE_STORAGE, "Standalone PET Curve Storage (Retired)", "StandalonePETCurveStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(X_RAY3_D_ANGIOGRAPHIC_IMAGE_STORAGE, "X-Ray 3D Angiographic Image Storage", "XRay3DAngiographicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(X_RAY3_D_CRANIOFACIAL_IMAGE_STORAGE, "X-Ray 3D Craniofacial Image Storage", "XRay3DCraniofacialImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BREAST_TOMOSYNTHESIS_IMAGE_STORAGE, "Breast Tomosynthesis Image Storage", "BreastTomosynthesisImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BREAST_PROJECTION_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION, "Breast Projection X-Ray Image Storage - For Presentation", "BreastProjectionXRayImageStorageForPresentation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BREAST_PROJECTION_X_RAY_IMAGE_STORAGE_FOR_PROCESSING, "Breast Projection X-Ray Image Storage - For Processing", "BreastProjectionXRayImageStorageForProcessing", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_PET_IMAGE_STORAGE, "Enhanced PET Image Storage", "EnhancedPETImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BASIC_STRUCTURED_DISPLAY_STORAGE, "Basic Structured Display Storage", "BasicStructuredDisplayStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(INTRAVASCULAR_OPTICAL_COHERENCE_TOMOGRAPHY_IMAGE_STORAGE_FOR_PRESENTATION, "Intravascular Optical Coherence Tomography Image Storage - For Presentation", "IntravascularOpticalCoherenceTomographyImageStorageForPresentation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(INTRAVASCULAR_OPTICAL_COHERENCE_TOMOGRAPHY_IMAGE_STORAGE_FOR_PROCESSING, "Intravascular Optical Coherence Tomography Image Storage - For Processing", "IntravascularOpticalCoherenceTomographyImageStorageForProcessing", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CT_IMAGE_STORAGE, "CT Image Storage", "CTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_CT_IMAGE_STORAGE, "Enhanced CT Image Storage", "EnhancedCTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(LEGACY_CONVERTED_ENHANCED_CT_IMAGE_STORAGE, "Legacy Converted Enhanced CT Image Storage", "LegacyConvertedEnhancedCTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(NUCLEAR_MEDICINE_IMAGE_STORAGE, "Nuclear Medicine Image Storage", "NuclearMedicineImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CT_DEFINED_PROCEDURE_PROTOCOL_STORAGE, "CT Defined Procedure Protocol Storage", "CTDefinedProcedureProtocolStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CT_PERFORMED_PROCEDURE_PROTOCOL_STORAGE, "CT Performed Procedure Protocol Storage", "CTPerformedProcedureProtocolStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PROTOCOL_APPROVAL_STORAGE, "Protocol Approval Storage", "ProtocolApprovalStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PROTOCOL_APPROVAL_INFORMATION_MODEL_FIND, "Protocol Approval Information Model - FIND", "ProtocolApprovalInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PROTOCOL_APPROVAL_INFORMATION_MODEL_MOVE, "Protocol Approval Information Model - MOVE", "ProtocolApprovalInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PROTOCOL_APPROVAL_INFORMATION_MODEL_GET, "Protocol Approval Information Model - GET", "ProtocolApprovalInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(XA_DEFINED_PROCEDURE_PROTOCOL_STORAGE, "XA Defined Procedure Protocol Storage", "XADefinedProcedureProtocolStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(XA_PERFORMED_PROCEDURE_PROTOCOL_STORAGE, "XA Performed Procedure Protocol Storage", "XAPerformedProcedureProtocolStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(INVENTORY_STORAGE, "Inventory Storage", "InventoryStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STORAGE_MANAGEMENT_INSTANCE, "Storage Management SOP Instance", "StorageManagementSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(INVENTORY_FIND, "Inventory - FIND", "InventoryFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(INVENTORY_MOVE, "Inventory - MOVE", "InventoryMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(INVENTORY_GET, "Inventory - GET", "InventoryGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(INVENTORY_CREATION, "Inventory Creation", "InventoryCreation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(REPOSITORY_QUERY, "Repository Query", "RepositoryQuery", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE_RETIRED, "Ultrasound Multi-frame Image Storage (Retired)", "UltrasoundMultiFrameImageStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE, "Ultrasound Multi-frame Image Storage", "UltrasoundMultiFrameImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PARAMETRIC_MAP_STORAGE, "Parametric Map Storage", "ParametricMapStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MR_IMAGE_STORAGE, "MR Image Storage", "MRImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_MR_IMAGE_STORAGE, "Enhanced MR Image Storage", "EnhancedMRImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MR_SPECTROSCOPY_STORAGE, "MR Spectroscopy Storage", "MRSpectroscopyStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_MR_COLOR_IMAGE_STORAGE, "Enhanced MR Color Image Storage", "EnhancedMRColorImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(LEGACY_CONVERTED_ENHANCED_MR_IMAGE_STORAGE, "Legacy Converted Enhanced MR Image Storage", "LegacyConvertedEnhancedMRImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_IMAGE_STORAGE, "RT Image Storage", "RTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_PHYSICIAN_INTENT_STORAGE, "RT Physician Intent Storage", "RTPhysicianIntentStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_SEGMENT_ANNOTATION_STORAGE, "RT Segment Annotation Storage", "RTSegmentAnnotationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_RADIATION_SET_STORAGE, "RT Radiation Set Storage", "RTRadiationSetStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(C_ARM_PHOTON_ELECTRON_RADIATION_STORAGE, "C-Arm Photon-Electron Radiation Storage", "CArmPhotonElectronRadiationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(TOMOTHERAPEUTIC_RADIATION_STORAGE, "Tomotherapeutic Radiation Storage", "TomotherapeuticRadiationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ROBOTIC_ARM_RADIATION_STORAGE, "Robotic-Arm Radiation Storage", "RoboticArmRadiationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_RADIATION_RECORD_SET_STORAGE, "RT Radiation Record Set Storage", "RTRadiationRecordSetStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_RADIATION_SALVAGE_RECORD_STORAGE, "RT Radiation Salvage Record Storage", "RTRadiationSalvageRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(TOMOTHERAPEUTIC_RADIATION_RECORD_STORAGE, "Tomotherapeutic Radiation Record Storage", "TomotherapeuticRadiationRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(C_ARM_PHOTON_ELECTRON_RADIATION_RECORD_STORAGE, "C-Arm Photon-Electron Radiation Record Storage", "CArmPhotonElectronRadiationRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_DOSE_STORAGE, "RT Dose Storage", "RTDoseStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ROBOTIC_RADIATION_RECORD_STORAGE, "Robotic Radiation Record Storage", "RoboticRadiationRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_RADIATION_SET_DELIVERY_INSTRUCTION_STORAGE, "RT Radiation Set Delivery Instruction Storage", "RTRadiationSetDeliveryInstructionStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_TREATMENT_PREPARATION_STORAGE, "RT Treatment Preparation Storage", "RTTreatmentPreparationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_RT_IMAGE_STORAGE, "Enhanced RT Image Storage", "EnhancedRTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_CONTINUOUS_RT_IMAGE_STORAGE, "Enhanced Continuous RT Image Storage", "EnhancedContinuousRTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_PATIENT_POSITION_ACQUISITION_INSTRUCTION_STORAGE, "RT Patient Position Acquisition Instruction Storage", "RTPatientPositionAcquisitionInstructionStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_STRUCTURE_SET_STORAGE, "RT Structure Set Storage", "RTStructureSetStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_BEAMS_TREATMENT_RECORD_STORAGE, "RT Beams Treatment Record Storage", "RTBeamsTreatmentRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_PLAN_STORAGE, "RT Plan Storage", "RTPlanStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_BRACHY_TREATMENT_RECORD_STORAGE, "RT Brachy Treatment Record Storage", "RTBrachyTreatmentRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_TREATMENT_SUMMARY_RECORD_STORAGE, "RT Treatment Summary Record Storage", "RTTreatmentSummaryRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_ION_PLAN_STORAGE, "RT Ion Plan Storage", "RTIonPlanStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_ION_BEAMS_TREATMENT_RECORD_STORAGE, "RT Ion Beams Treatment Record Storage", "RTIonBeamsTreatmentRecordStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(NUCLEAR_MEDICINE_IMAGE_STORAGE_RETIRED, "Nuclear Medicine Image Storage (Retired)", "NuclearMedicineImageStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(DICOSCT_IMAGE_STORAGE, "DICOS CT Image Storage", "DICOSCTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION, "DICOS Digital X-Ray Image Storage - For Presentation", "DICOSDigitalXRayImageStorageForPresentation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING, "DICOS Digital X-Ray Image Storage - For Processing", "DICOSDigitalXRayImageStorageForProcessing", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOS_THREAT_DETECTION_REPORT_STORAGE, "DICOS Threat Detection Report Storage", "DICOSThreatDetectionReportStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOS2DAIT_STORAGE, "DICOS 2D AIT Storage", "DICOS2DAITStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOS3DAIT_STORAGE, "DICOS 3D AIT Storage", "DICOS3DAITStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOS_QUADRUPOLE_RESONANCE_STORAGE, "DICOS Quadrupole Resonance (QR) Storage", "DICOSQuadrupoleResonanceQRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ULTRASOUND_IMAGE_STORAGE_RETIRED, "Ultrasound Image Storage (Retired)", "UltrasoundImageStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(ULTRASOUND_IMAGE_STORAGE, "Ultrasound Image Storage", "UltrasoundImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_US_VOLUME_STORAGE, "Enhanced US Volume Storage", "EnhancedUSVolumeStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(EDDY_CURRENT_IMAGE_STORAGE, "Eddy Current Image Storage", "EddyCurrentImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(EDDY_CURRENT_MULTI_FRAME_IMAGE_STORAGE, "Eddy Current Multi-frame Image Storage", "EddyCurrentMultiFrameImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RAW_DATA_STORAGE, "Raw Data Storage", "RawDataStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SPATIAL_REGISTRATION_STORAGE, "Spatial Registration Storage", "SpatialRegistrationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SPATIAL_FIDUCIALS_STORAGE, "Spatial Fiducials Storage", "SpatialFiducialsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DEFORMABLE_SPATIAL_REGISTRATION_STORAGE, "Deformable Spatial Registration Storage", "DeformableSpatialRegistrationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SEGMENTATION_STORAGE, "Segmentation Storage", "SegmentationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SURFACE_SEGMENTATION_STORAGE, "Surface Segmentation Storage", "SurfaceSegmentationStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(TRACTOGRAPHY_RESULTS_STORAGE, "Tractography Results Storage", "TractographyResultsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(REAL_WORLD_VALUE_MAPPING_STORAGE, "Real World Value Mapping Storage", "RealWorldValueMappingStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SURFACE_SCAN_MESH_STORAGE, "Surface Scan Mesh Storage", "SurfaceScanMeshStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SURFACE_SCAN_POINT_CLOUD_STORAGE, "Surface Scan Point Cloud Storage", "SurfaceScanPointCloudStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SECONDARY_CAPTURE_IMAGE_STORAGE, "Secondary Capture Image Storage", "SecondaryCaptureImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MULTI_FRAME_SINGLE_BIT_SECONDARY_CAPTURE_IMAGE_STORAGE, "Multi-frame Single Bit Secondary Capture Image Storage", "MultiFrameSingleBitSecondaryCaptureImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MULTI_FRAME_GRAYSCALE_BYTE_SECONDARY_CAPTURE_IMAGE_STORAGE, "Multi-frame Grayscale Byte Secondary Capture Image Storage", "MultiFrameGrayscaleByteSecondaryCaptureImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MULTI_FRAME_GRAYSCALE_WORD_SECONDARY_CAPTURE_IMAGE_STORAGE, "Multi-frame Grayscale Word Secondary Capture Image Storage", "MultiFrameGrayscaleWordSecondaryCaptureImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MULTI_FRAME_TRUE_COLOR_SECONDARY_CAPTURE_IMAGE_STORAGE, "Multi-frame True Color Secondary Capture Image Storage", "MultiFrameTrueColorSecondaryCaptureImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VL_IMAGE_STORAGE_TRIAL, "VL Image Storage - Trial (Retired)", "VLImageStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(VL_ENDOSCOPIC_IMAGE_STORAGE, "VL Endoscopic Image Storage", "VLEndoscopicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VIDEO_ENDOSCOPIC_IMAGE_STORAGE, "Video Endoscopic Image Storage", "VideoEndoscopicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VL_MICROSCOPIC_IMAGE_STORAGE, "VL Microscopic Image Storage", "VLMicroscopicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VIDEO_MICROSCOPIC_IMAGE_STORAGE, "Video Microscopic Image Storage", "VideoMicroscopicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VL_SLIDE_COORDINATES_MICROSCOPIC_IMAGE_STORAGE, "VL Slide-Coordinates Microscopic Image Storage", "VLSlideCoordinatesMicroscopicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VL_PHOTOGRAPHIC_IMAGE_STORAGE, "VL Photographic Image Storage", "VLPhotographicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VIDEO_PHOTOGRAPHIC_IMAGE_STORAGE, "Video Photographic Image Storage", "VideoPhotographicImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(OPHTHALMIC_PHOTOGRAPHY8_BIT_IMAGE_STORAGE, "Ophthalmic Photography 8 Bit Image Storage", "OphthalmicPhotography8BitImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(OPHTHALMIC_PHOTOGRAPHY16_BIT_IMAGE_STORAGE, "Ophthalmic Photography 16 Bit Image Storage", "OphthalmicPhotography16BitImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STEREOMETRIC_RELATIONSHIP_STORAGE, "Stereometric Relationship Storage", "StereometricRelationshipStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(OPHTHALMIC_TOMOGRAPHY_IMAGE_STORAGE, "Ophthalmic Tomography Image Storage", "OphthalmicTomographyImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_STEREOGRAPHIC_PROJECTION_IMAGE_STORAGE, "Wide Field Ophthalmic Photography Stereographic Projection Image Storage", "WideFieldOphthalmicPhotographyStereographicProjectionImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY3_D_COORDINATES_IMAGE_STORAGE, "Wide Field Ophthalmic Photography 3D Coordinates Image Storage", "WideFieldOphthalmicPhotography3DCoordinatesImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(OPHTHALMIC_OPTICAL_COHERENCE_TOMOGRAPHY_EN_FACE_IMAGE_STORAGE, "Ophthalmic Optical Coherence Tomography En Face Image Storage", "OphthalmicOpticalCoherenceTomographyEnFaceImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(OPHTHALMIC_OPTICAL_COHERENCE_TOMOGRAPHY_BSCAN_VOLUME_ANALYSIS_STORAGE, "Ophthalmic Optical Coherence Tomography B-scan Volume Analysis Storage", "OphthalmicOpticalCoherenceTomographyBScanVolumeAnalysisStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VL_WHOLE_SLIDE_MICROSCOPY_IMAGE_STORAGE, "VL Whole Slide Microscopy Image Storage", "VLWholeSlideMicroscopyImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DERMOSCOPIC_PHOTOGRAPHY_IMAGE_STORAGE, "Dermoscopic Photography Image Storage", "DermoscopicPhotographyImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VL_MULTI_FRAME_IMAGE_STORAGE_TRIAL, "VL Multi-frame Image Storage - Trial (Retired)", "VLMultiFrameImageStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(LENSOMETRY_MEASUREMENTS_STORAGE, "Lensometry Measurements Storage", "LensometryMeasurementsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(AUTOREFRACTION_MEASUREMENTS_STORAGE, "Autorefraction Measurements Storage", "AutorefractionMeasurementsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(KERATOMETRY_MEASUREMENTS_STORAGE, "Keratometry Measurements Storage", "KeratometryMeasurementsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SUBJECTIVE_REFRACTION_MEASUREMENTS_STORAGE, "Subjective Refraction Measurements Storage", "SubjectiveRefractionMeasurementsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(VISUAL_ACUITY_MEASUREMENTS_STORAGE, "Visual Acuity Measurements Storage", "VisualAcuityMeasurementsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SPECTACLE_PRESCRIPTION_REPORT_STORAGE, "Spectacle Prescription Report Storage", "SpectaclePrescriptionReportStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(OPHTHALMIC_AXIAL_MEASUREMENTS_STORAGE, "Ophthalmic Axial Measurements Storage", "OphthalmicAxialMeasurementsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(INTRAOCULAR_LENS_CALCULATIONS_STORAGE, "Intraocular Lens Calculations Storage", "IntraocularLensCalculationsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MACULAR_GRID_THICKNESS_AND_VOLUME_REPORT_STORAGE, "Macular Grid Thickness and Volume Report Storage", "MacularGridThicknessAndVolumeReportStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STANDALONE_OVERLAY_STORAGE, "Standalone Overlay Storage (Retired)", "StandaloneOverlayStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(OPHTHALMIC_VISUAL_FIELD_STATIC_PERIMETRY_MEASUREMENTS_STORAGE, "Ophthalmic Visual Field Static Perimetry Measurements Storage", "OphthalmicVisualFieldStaticPerimetryMeasurementsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(OPHTHALMIC_THICKNESS_MAP_STORAGE, "Ophthalmic Thickness Map Storage", "OphthalmicThicknessMapStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CORNEAL_TOPOGRAPHY_MAP_STORAGE, "Corneal Topography Map Storage", "CornealTopographyMapStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(TEXT_SR_STORAGE_TRIAL, "Text SR Storage - Trial (Retired)", "TextSRStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(BASIC_TEXT_SR_STORAGE, "Basic Text SR Storage", "BasicTextSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(AUDIO_SR_STORAGE_TRIAL, "Audio SR Storage - Trial (Retired)", "AudioSRStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(ENHANCED_SR_STORAGE, "Enhanced SR Storage", "EnhancedSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DETAIL_SR_STORAGE_TRIAL, "Detail SR Storage - Trial (Retired)", "DetailSRStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(COMPREHENSIVE_SR_STORAGE, "Comprehensive SR Storage", "ComprehensiveSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COMPREHENSIVE3_DSR_STORAGE, "Comprehensive 3D SR Storage", "Comprehensive3DSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(EXTENSIBLE_SR_STORAGE, "Extensible SR Storage", "ExtensibleSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COMPREHENSIVE_SR_STORAGE_TRIAL, "Comprehensive SR Storage - Trial (Retired)", "ComprehensiveSRStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(PROCEDURE_LOG_STORAGE, "Procedure Log Storage", "ProcedureLogStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MAMMOGRAPHY_CADSR_STORAGE, "Mammography CAD SR Storage", "MammographyCADSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(KEY_OBJECT_SELECTION_DOCUMENT_STORAGE, "Key Object Selection Document Storage", "KeyObjectSelectionDocumentStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CHEST_CADSR_STORAGE, "Chest CAD SR Storage", "ChestCADSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(X_RAY_RADIATION_DOSE_SR_STORAGE, "X-Ray Radiation Dose SR Storage", "XRayRadiationDoseSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RADIOPHARMACEUTICAL_RADIATION_DOSE_SR_STORAGE, "Radiopharmaceutical Radiation Dose SR Storage", "RadiopharmaceuticalRadiationDoseSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COLON_CADSR_STORAGE, "Colon CAD SR Storage", "ColonCADSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANTATION_PLAN_SR_STORAGE, "Implantation Plan SR Storage", "ImplantationPlanSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ACQUISITION_CONTEXT_SR_STORAGE, "Acquisition Context SR Storage", "AcquisitionContextSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SIMPLIFIED_ADULT_ECHO_SR_STORAGE, "Simplified Adult Echo SR Storage", "SimplifiedAdultEchoSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PATIENT_RADIATION_DOSE_SR_STORAGE, "Patient Radiation Dose SR Storage", "PatientRadiationDoseSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PLANNED_IMAGING_AGENT_ADMINISTRATION_SR_STORAGE, "Planned Imaging Agent Administration SR Storage", "PlannedImagingAgentAdministrationSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PERFORMED_IMAGING_AGENT_ADMINISTRATION_SR_STORAGE, "Performed Imaging Agent Administration SR Storage", "PerformedImagingAgentAdministrationSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_X_RAY_RADIATION_DOSE_SR_STORAGE, "Enhanced X-Ray Radiation Dose SR Storage", "EnhancedXRayRadiationDoseSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STANDALONE_CURVE_STORAGE, "Standalone Curve Storage (Retired)", "StandaloneCurveStorageRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(WAVEFORM_STORAGE_TRIAL, "Waveform Storage - Trial (Retired)", "WaveformStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(TWELVE_LEAD_ECG_WAVEFORM_STORAGE, "12-lead ECG Waveform Storage", "12LeadECGWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERAL_ECG_WAVEFORM_STORAGE, "General ECG Waveform Storage", "GeneralECGWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(AMBULATORY_ECG_WAVEFORM_STORAGE, "Ambulatory ECG Waveform Storage", "AmbulatoryECGWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(HEMODYNAMIC_WAVEFORM_STORAGE, "Hemodynamic Waveform Storage", "HemodynamicWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CARDIAC_ELECTROPHYSIOLOGY_WAVEFORM_STORAGE, "Cardiac Electrophysiology Waveform Storage", "CardiacElectrophysiologyWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BASIC_VOICE_AUDIO_WAVEFORM_STORAGE, "Basic Voice Audio Waveform Storage", "BasicVoiceAudioWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERAL_AUDIO_WAVEFORM_STORAGE, "General Audio Waveform Storage", "GeneralAudioWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ARTERIAL_PULSE_WAVEFORM_STORAGE, "Arterial Pulse Waveform Storage", "ArterialPulseWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RESPIRATORY_WAVEFORM_STORAGE, "Respiratory Waveform Storage", "RespiratoryWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MULTICHANNEL_RESPIRATORY_WAVEFORM_STORAGE, "Multi-channel Respiratory Waveform Storage", "MultiChannelRespiratoryWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ROUTINE_SCALP_ELECTROENCEPHALOGRAM_WAVEFORM_STORAGE, "Routine Scalp Electroencephalogram Waveform Storage", "RoutineScalpElectroencephalogramWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ELECTROMYOGRAM_WAVEFORM_STORAGE, "Electromyogram Waveform Storage", "ElectromyogramWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ELECTROOCULOGRAM_WAVEFORM_STORAGE, "Electrooculogram Waveform Storage", "ElectrooculogramWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SLEEP_ELECTROENCEPHALOGRAM_WAVEFORM_STORAGE, "Sleep Electroencephalogram Waveform Storage", "SleepElectroencephalogramWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BODY_POSITION_WAVEFORM_STORAGE, "Body Position Waveform Storage", "BodyPositionWaveformStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CONTENT_ASSESSMENT_RESULTS_STORAGE, "Content Assessment Results Storage", "ContentAssessmentResultsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MICROSCOPY_BULK_SIMPLE_ANNOTATIONS_STORAGE, "Microscopy Bulk Simple Annotations Storage", "MicroscopyBulkSimpleAnnotationsStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND, "Patient Root Query/Retrieve Information Model - FIND", "PatientRootQueryRetrieveInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE, "Patient Root Query/Retrieve Information Model - MOVE", "PatientRootQueryRetrieveInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_GET, "Patient Root Query/Retrieve Information Model - GET", "PatientRootQueryRetrieveInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND, "Study Root Query/Retrieve Information Model - FIND", "StudyRootQueryRetrieveInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE, "Study Root Query/Retrieve Information Model - MOVE", "StudyRootQueryRetrieveInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_GET, "Study Root Query/Retrieve Information Model - GET", "StudyRootQueryRetrieveInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PATIENT_STUDY_ONLY_QUERY_RETRIEVE_INFORMATION_MODEL_FIND, "Patient/Study Only Query/Retrieve Information Model - FIND (Retired)", "PatientStudyOnlyQueryRetrieveInformationModelFINDRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(PATIENT_STUDY_ONLY_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE, "Patient/Study Only Query/Retrieve Information Model - MOVE (Retired)", "PatientStudyOnlyQueryRetrieveInformationModelMOVERetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(PATIENT_STUDY_ONLY_QUERY_RETRIEVE_INFORMATION_MODEL_GET, "Patient/Study Only Query/Retrieve Information Model - GET (Retired)", "PatientStudyOnlyQueryRetrieveInformationModelGETRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(COMPOSITE_INSTANCE_ROOT_RETRIEVE_MOVE, "Composite Instance Root Retrieve - MOVE", "CompositeInstanceRootRetrieveMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COMPOSITE_INSTANCE_ROOT_RETRIEVE_GET, "Composite Instance Root Retrieve - GET", "CompositeInstanceRootRetrieveGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COMPOSITE_INSTANCE_RETRIEVE_WITHOUT_BULK_DATA_GET, "Composite Instance Retrieve Without Bulk Data - GET", "CompositeInstanceRetrieveWithoutBulkDataGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DEFINED_PROCEDURE_PROTOCOL_INFORMATION_MODEL_FIND, "Defined Procedure Protocol Information Model - FIND", "DefinedProcedureProtocolInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DEFINED_PROCEDURE_PROTOCOL_INFORMATION_MODEL_MOVE, "Defined Procedure Protocol Information Model - MOVE", "DefinedProcedureProtocolInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DEFINED_PROCEDURE_PROTOCOL_INFORMATION_MODEL_GET, "Defined Procedure Protocol Information Model - GET", "DefinedProcedureProtocolInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MODALITY_WORKLIST_INFORMATION_MODEL_FIND, "Modality Worklist Information Model - FIND", "ModalityWorklistInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERAL_PURPOSE_WORKLIST_MANAGEMENT_META, "General Purpose Worklist Management Meta SOP Class (Retired)", "GeneralPurposeWorklistManagementMetaSOPClassRetired", UidType::MetaSopClass, true),
    UidDictionaryEntryRef::new(GENERAL_PURPOSE_WORKLIST_INFORMATION_MODEL_FIND, "General Purpose Worklist Information Model - FIND (Retired)", "GeneralPurposeWorklistInformationModelFINDRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP, "General Purpose Scheduled Procedure Step SOP Class (Retired)", "GeneralPurposeScheduledProcedureStepSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEP, "General Purpose Performed Procedure Step SOP Class (Retired)", "GeneralPurposePerformedProcedureStepSOPClassRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(INSTANCE_AVAILABILITY_NOTIFICATION, "Instance Availability Notification SOP Class", "InstanceAvailabilityNotificationSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_BEAMS_DELIVERY_INSTRUCTION_STORAGE_TRIAL, "RT Beams Delivery Instruction Storage - Trial (Retired)", "RTBeamsDeliveryInstructionStorageTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(RT_BRACHY_APPLICATION_SETUP_DELIVERY_INSTRUCTION_STORAGE, "RT Brachy Application Setup Delivery Instruction Storage", "RTBrachyApplicationSetupDeliveryInstructionStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_CONVENTIONAL_MACHINE_VERIFICATION_TRIAL, "RT Conventional Machine Verification - Trial (Retired)", "RTConventionalMachineVerificationTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(RT_ION_MACHINE_VERIFICATION_TRIAL, "RT Ion Machine Verification - Trial (Retired)", "RTIonMachineVerificationTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(UNIFIED_WORKLIST_AND_PROCEDURE_STEP_TRIAL, "Unified Worklist and Procedure Step Service Class - Trial (Retired)", "UnifiedWorklistAndProcedureStepServiceClassTrialRetired", UidType::ServiceClass, true),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_PUSH_TRIAL, "Unified Procedure Step - Push SOP Class - Trial (Retired)", "UnifiedProcedureStepPushSOPClassTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_WATCH_TRIAL, "Unified Procedure Step - Watch SOP Class - Trial (Retired)", "UnifiedProcedureStepWatchSOPClassTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_PULL_TRIAL, "Unified Procedure Step - Pull SOP Class - Trial (Retired)", "UnifiedProcedureStepPullSOPClassTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_EVENT_TRIAL, "Unified Procedure Step - Event SOP Class - Trial (Retired)", "UnifiedProcedureStepEventSOPClassTrialRetired", UidType::SopClass, true),
    UidDictionaryEntryRef::new(UPS_GLOBAL_SUBSCRIPTION_INSTANCE, "UPS Global Subscription SOP Instance", "UPSGlobalSubscriptionSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(UPS_FILTERED_GLOBAL_SUBSCRIPTION_INSTANCE, "UPS Filtered Global Subscription SOP Instance", "UPSFilteredGlobalSubscriptionSOPInstance", UidType::WellKnownSopInstance, false),
    UidDictionaryEntryRef::new(UNIFIED_WORKLIST_AND_PROCEDURE_STEP, "Unified Worklist and Procedure Step Service Class", "UnifiedWorklistAndProcedureStepServiceClass", UidType::ServiceClass, false),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_PUSH, "Unified Procedure Step - Push SOP Class", "UnifiedProcedureStepPushSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_WATCH, "Unified Procedure Step - Watch SOP Class", "UnifiedProcedureStepWatchSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_PULL, "Unified Procedure Step - Pull SOP Class", "UnifiedProcedureStepPullSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_EVENT, "Unified Procedure Step - Event SOP Class", "UnifiedProcedureStepEventSOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(UNIFIED_PROCEDURE_STEP_QUERY, "Unified Procedure Step - Query SOP Class", "UnifiedProcedureStepQuerySOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_BEAMS_DELIVERY_INSTRUCTION_STORAGE, "RT Beams Delivery Instruction Storage", "RTBeamsDeliveryInstructionStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_CONVENTIONAL_MACHINE_VERIFICATION, "RT Conventional Machine Verification", "RTConventionalMachineVerification", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_ION_MACHINE_VERIFICATION, "RT Ion Machine Verification", "RTIonMachineVerification", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERAL_RELEVANT_PATIENT_INFORMATION_QUERY, "General Relevant Patient Information Query", "GeneralRelevantPatientInformationQuery", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BREAST_IMAGING_RELEVANT_PATIENT_INFORMATION_QUERY, "Breast Imaging Relevant Patient Information Query", "BreastImagingRelevantPatientInformationQuery", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CARDIAC_RELEVANT_PATIENT_INFORMATION_QUERY, "Cardiac Relevant Patient Information Query", "CardiacRelevantPatientInformationQuery", UidType::SopClass, false),
    UidDictionaryEntryRef::new(HANGING_PROTOCOL_STORAGE, "Hanging Protocol Storage", "HangingProtocolStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(HANGING_PROTOCOL_INFORMATION_MODEL_FIND, "Hanging Protocol Information Model - FIND", "HangingProtocolInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(HANGING_PROTOCOL_INFORMATION_MODEL_MOVE, "Hanging Protocol Information Model - MOVE", "HangingProtocolInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(HANGING_PROTOCOL_INFORMATION_MODEL_GET, "Hanging Protocol Information Model - GET", "HangingProtocolInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COLOR_PALETTE_STORAGE, "Color Palette Storage", "ColorPaletteStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COLOR_PALETTE_QUERY_RETRIEVE_INFORMATION_MODEL_FIND, "Color Palette Query/Retrieve Information Model - FIND", "ColorPaletteQueryRetrieveInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COLOR_PALETTE_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE, "Color Palette Query/Retrieve Information Model - MOVE", "ColorPaletteQueryRetrieveInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COLOR_PALETTE_QUERY_RETRIEVE_INFORMATION_MODEL_GET, "Color Palette Query/Retrieve Information Model - GET", "ColorPaletteQueryRetrieveInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(PRODUCT_CHARACTERISTICS_QUERY, "Product Characteristics Query SOP Class", "ProductCharacteristicsQuerySOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SUBSTANCE_APPROVAL_QUERY, "Substance Approval Query SOP Class", "SubstanceApprovalQuerySOPClass", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERIC_IMPLANT_TEMPLATE_STORAGE, "Generic Implant Template Storage", "GenericImplantTemplateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERIC_IMPLANT_TEMPLATE_INFORMATION_MODEL_FIND, "Generic Implant Template Information Model - FIND", "GenericImplantTemplateInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERIC_IMPLANT_TEMPLATE_INFORMATION_MODEL_MOVE, "Generic Implant Template Information Model - MOVE", "GenericImplantTemplateInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(GENERIC_IMPLANT_TEMPLATE_INFORMATION_MODEL_GET, "Generic Implant Template Information Model - GET", "GenericImplantTemplateInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_ASSEMBLY_TEMPLATE_STORAGE, "Implant Assembly Template Storage", "ImplantAssemblyTemplateStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_ASSEMBLY_TEMPLATE_INFORMATION_MODEL_FIND, "Implant Assembly Template Information Model - FIND", "ImplantAssemblyTemplateInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_ASSEMBLY_TEMPLATE_INFORMATION_MODEL_MOVE, "Implant Assembly Template Information Model - MOVE", "ImplantAssemblyTemplateInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_ASSEMBLY_TEMPLATE_INFORMATION_MODEL_GET, "Implant Assembly Template Information Model - GET", "ImplantAssemblyTemplateInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_TEMPLATE_GROUP_STORAGE, "Implant Template Group Storage", "ImplantTemplateGroupStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_TEMPLATE_GROUP_INFORMATION_MODEL_FIND, "Implant Template Group Information Model - FIND", "ImplantTemplateGroupInformationModelFIND", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_TEMPLATE_GROUP_INFORMATION_MODEL_MOVE, "Implant Template Group Information Model - MOVE", "ImplantTemplateGroupInformationModelMOVE", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLANT_TEMPLATE_GROUP_INFORMATION_MODEL_GET, "Implant Template Group Information Model - GET", "ImplantTemplateGroupInformationModelGET", UidType::SopClass, false),
    UidDictionaryEntryRef::new(NATIVE_DICOM_MODEL, "Native DICOM Model", "NativeDICOMModel", UidType::ApplicationHostingModel, false),
    UidDictionaryEntryRef::new(ABSTRACT_MULTI_DIMENSIONAL_IMAGE_MODEL, "Abstract Multi-Dimensional Image Model", "AbstractMultiDimensionalImageModel", UidType::ApplicationHostingModel, false),
    UidDictionaryEntryRef::new(DICOM_CONTENT_MAPPING_RESOURCE, "DICOM Content Mapping Resource", "DICOMContentMappingResource", UidType::MappingResource, false),
];
