//! Data element tag declarations and the standard attribute table.
//!
//! The attributes here cover the file meta group, the structural item tags
//! and the attributes most commonly found in image storage objects.
// Automatically generated. Edit at your own risk.

use dcm_core::dictionary::DictionaryEntryRef;
use dcm_core::header::{Tag, VR};

/// CommandGroupLength (0000,0000) UL
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// AffectedSOPClassUID (0000,0002) UI
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// CommandField (0000,0100) US
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// MessageID (0000,0110) US
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// Status (0000,0900) US
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// SourcePresentationAddress (0002,0026) UR
#[rustfmt::skip]
pub const SOURCE_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0026);
/// SendingPresentationAddress (0002,0027) UR
#[rustfmt::skip]
pub const SENDING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0027);
/// ReceivingPresentationAddress (0002,0028) UR
#[rustfmt::skip]
pub const RECEIVING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0028);
/// RTVMetaInformationVersion (0002,0031) OB
#[rustfmt::skip]
pub const RTV_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0031);
/// RTVCommunicationSOPClassUID (0002,0032) UI
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0032);
/// RTVCommunicationSOPInstanceUID (0002,0033) UI
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0033);
/// RTVSourceIdentifier (0002,0035) OB
#[rustfmt::skip]
pub const RTV_SOURCE_IDENTIFIER: Tag = Tag(0x0002, 0x0035);
/// RTVFlowIdentifier (0002,0036) OB
#[rustfmt::skip]
pub const RTV_FLOW_IDENTIFIER: Tag = Tag(0x0002, 0x0036);
/// RTVFlowRTPSamplingRate (0002,0037) UL
#[rustfmt::skip]
pub const RTV_FLOW_RTP_SAMPLING_RATE: Tag = Tag(0x0002, 0x0037);
/// RTVFlowActualFrameDuration (0002,0038) FD
#[rustfmt::skip]
pub const RTV_FLOW_ACTUAL_FRAME_DURATION: Tag = Tag(0x0002, 0x0038);
/// PrivateInformationCreatorUID (0002,0100) UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// LanguageCodeSequence (0008,0006) SQ
#[rustfmt::skip]
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// InstanceCoercionDateTime (0008,0015) DT
#[rustfmt::skip]
pub const INSTANCE_COERCION_DATE_TIME: Tag = Tag(0x0008, 0x0015);
/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// RelatedGeneralSOPClassUID (0008,001A) UI
#[rustfmt::skip]
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// OriginalSpecializedSOPClassUID (0008,001B) UI
#[rustfmt::skip]
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// IssuerOfAccessionNumberSequence (0008,0051) SQ
#[rustfmt::skip]
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// QueryRetrieveLevel (0008,0052) CS
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// QueryRetrieveView (0008,0053) CS
#[rustfmt::skip]
pub const QUERY_RETRIEVE_VIEW: Tag = Tag(0x0008, 0x0053);
/// RetrieveAETitle (0008,0054) AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// StationAETitle (0008,0055) AE
#[rustfmt::skip]
pub const STATION_AE_TITLE: Tag = Tag(0x0008, 0x0055);
/// InstanceAvailability (0008,0056) CS
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// FailedSOPInstanceUIDList (0008,0058) UI
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOPClassesInStudy (0008,0062) UI
#[rustfmt::skip]
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// ConversionType (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// PresentationIntentType (0008,0068) CS
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// InstitutionCodeSequence (0008,0082) SQ
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodingSchemeVersion (0008,0103) SH
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// CodeMeaning (0008,0104) LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// LongCodeValue (0008,0119) UC
#[rustfmt::skip]
pub const LONG_CODE_VALUE: Tag = Tag(0x0008, 0x0119);
/// URNCodeValue (0008,0120) UR
#[rustfmt::skip]
pub const URN_CODE_VALUE: Tag = Tag(0x0008, 0x0120);
/// TimezoneOffsetFromUTC (0008,0201) SH
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// StationName (0008,1010) SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PerformingPhysicianName (0008,1050) PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// NameOfPhysiciansReadingStudy (0008,1060) PN
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// OperatorsName (0008,1070) PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// ReferencedFrameNumber (0008,1160) IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// RetrieveURL (0008,1190) UR
#[rustfmt::skip]
pub const RETRIEVE_URL: Tag = Tag(0x0008, 0x1190);
/// DerivationDescription (0008,2111) ST
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// DerivationCodeSequence (0008,9215) SQ
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientNames (0010,1001) PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// OtherPatientIDsSequence (0010,1002) SQ
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// EthnicGroup (0010,2160) SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// AdditionalPatientHistory (0010,21B0) LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PatientComments (0010,4000) LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020) CS
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// RepetitionTime (0018,0080) DS
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime (0018,0081) DS
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// MagneticFieldStrength (0018,0087) DS
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// XRayTubeCurrent (0018,1151) IS
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// AcquisitionMatrix (0018,1310) US
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// PatientPosition (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// ReferencePixelX0 (0018,6020) SL
#[rustfmt::skip]
pub const REFERENCE_PIXEL_X0: Tag = Tag(0x0018, 0x6020);
/// ReferencePixelY0 (0018,6022) SL
#[rustfmt::skip]
pub const REFERENCE_PIXEL_Y0: Tag = Tag(0x0018, 0x6022);
/// DiffusionBValue (0018,9087) FD
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// DiffusionGradientOrientation (0018,9089) FD
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// PositionReferenceIndicator (0020,1040) LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// SourceImageIDs (0020,3100) CS (repeating element)
#[rustfmt::skip]
pub const SOURCE_IMAGE_IDS: Tag = Tag(0x0020, 0x3100);
/// ImageComments (0020,4000) LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// InStackPositionNumber (0020,9057) UL
#[rustfmt::skip]
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// DimensionIndexPointer (0020,9165) AT
#[rustfmt::skip]
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// FunctionalGroupPointer (0020,9167) AT
#[rustfmt::skip]
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// RedPaletteColorLookupTableData (0028,1201) OW
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// LossyImageCompression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LUTDescriptor (0028,3002) US
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTData (0028,3006) US
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUTSequence (0028,3010) SQ
#[rustfmt::skip]
pub const VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// PixelDataProviderURL (0028,7FE0) UR
#[rustfmt::skip]
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);
/// RequestedProcedureDescription (0032,1060) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// PerformedProcedureStepStartDate (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepID (0040,0253) SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// PerformedProtocolCodeSequence (0040,0260) SQ
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// RequestAttributesSequence (0040,0275) SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// RealWorldValueMappingSequence (0040,9096) SQ
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// RealWorldValueLUTData (0040,9212) FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_LUT_DATA: Tag = Tag(0x0040, 0x9212);
/// RelationshipType (0040,A010) CS
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// ValueType (0040,A040) CS
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// ConceptNameCodeSequence (0040,A043) SQ
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// TextValue (0040,A160) UT
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// ContentSequence (0040,A730) SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// RetrieveURI (0040,E010) UR
#[rustfmt::skip]
pub const RETRIEVE_URI: Tag = Tag(0x0040, 0xE010);
/// RadiopharmaceuticalInformationSequence (0054,0016) SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// LongPrimitivePointIndexList (0066,0040) OL
#[rustfmt::skip]
pub const LONG_PRIMITIVE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0040);
/// GraphicAnnotationSequence (0070,0001) SQ
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// SelectorOVValue (0072,0081) OV
#[rustfmt::skip]
pub const SELECTOR_OV_VALUE: Tag = Tag(0x0072, 0x0081);
/// SelectorSVValue (0072,0082) SV
#[rustfmt::skip]
pub const SELECTOR_SV_VALUE: Tag = Tag(0x0072, 0x0082);
/// SelectorUVValue (0072,0083) UV
#[rustfmt::skip]
pub const SELECTOR_UV_VALUE: Tag = Tag(0x0072, 0x0083);
/// IconImageSequence (0088,0200) SQ
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// AnomalyLocatorIndicatorSequence (4010,1079) SQ
#[rustfmt::skip]
pub const ANOMALY_LOCATOR_INDICATOR_SEQUENCE: Tag = Tag(0x4010, 0x1079);
/// AnomalyLocatorIndicator (4010,107A) FL
#[rustfmt::skip]
pub const ANOMALY_LOCATOR_INDICATOR: Tag = Tag(0x4010, 0x107A);
/// CurveDimensions (5000,0005) US (repeating group)
#[rustfmt::skip]
pub const CURVE_DIMENSIONS: Tag = Tag(0x5000, 0x0005);
/// CurveData (5000,3000) OW (repeating group)
#[rustfmt::skip]
pub const CURVE_DATA: Tag = Tag(0x5000, 0x3000);
/// SharedFunctionalGroupsSequence (5200,9229) SQ
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// WaveformSequence (5400,0100) SQ
#[rustfmt::skip]
pub const WAVEFORM_SEQUENCE: Tag = Tag(0x5400, 0x0100);
/// WaveformBitsAllocated (5400,1004) US
#[rustfmt::skip]
pub const WAVEFORM_BITS_ALLOCATED: Tag = Tag(0x5400, 0x1004);
/// WaveformSampleInterpretation (5400,1006) CS
#[rustfmt::skip]
pub const WAVEFORM_SAMPLE_INTERPRETATION: Tag = Tag(0x5400, 0x1006);
/// WaveformData (5400,1010) OW
#[rustfmt::skip]
pub const WAVEFORM_DATA: Tag = Tag(0x5400, 0x1010);
/// FirstOrderPhaseCorrectionAngle (5600,0010) OF
#[rustfmt::skip]
pub const FIRST_ORDER_PHASE_CORRECTION_ANGLE: Tag = Tag(0x5600, 0x0010);
/// SpectroscopyData (5600,0020) OF
#[rustfmt::skip]
pub const SPECTROSCOPY_DATA: Tag = Tag(0x5600, 0x0020);
/// OverlayRows (6000,0010) US (repeating group)
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (6000,0011) US (repeating group)
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType (6000,0040) CS (repeating group)
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin (6000,0050) SS (repeating group)
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated (6000,0100) US (repeating group)
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (6000,0102) US (repeating group)
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData (6000,3000) OW (repeating group)
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// ExtendedOffsetTable (7FE0,0001) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// FloatPixelData (7FE0,0008) OF
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item (FFFE,E000) NA
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) NA
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) NA
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

type E = DictionaryEntryRef<'static>;

/// All attributes of the standard data dictionary.
#[rustfmt::skip]
pub static ENTRIES: &[E] = &[
    E { tag: COMMAND_GROUP_LENGTH, alias: "CommandGroupLength", vr: VR::UL },
    E { tag: AFFECTED_SOP_CLASS_UID, alias: "AffectedSOPClassUID", vr: VR::UI },
    E { tag: COMMAND_FIELD, alias: "CommandField", vr: VR::US },
    E { tag: MESSAGE_ID, alias: "MessageID", vr: VR::US },
    E { tag: STATUS, alias: "Status", vr: VR::US },
    E { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: VR::UL },
    E { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: VR::OB },
    E { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: VR::UI },
    E { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: VR::UI },
    E { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: VR::UI },
    E { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: VR::UI },
    E { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: VR::SH },
    E { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: VR::AE },
    E { tag: SENDING_APPLICATION_ENTITY_TITLE, alias: "SendingApplicationEntityTitle", vr: VR::AE },
    E { tag: RECEIVING_APPLICATION_ENTITY_TITLE, alias: "ReceivingApplicationEntityTitle", vr: VR::AE },
    E { tag: SOURCE_PRESENTATION_ADDRESS, alias: "SourcePresentationAddress", vr: VR::UR },
    E { tag: SENDING_PRESENTATION_ADDRESS, alias: "SendingPresentationAddress", vr: VR::UR },
    E { tag: RECEIVING_PRESENTATION_ADDRESS, alias: "ReceivingPresentationAddress", vr: VR::UR },
    E { tag: RTV_META_INFORMATION_VERSION, alias: "RTVMetaInformationVersion", vr: VR::OB },
    E { tag: RTV_COMMUNICATION_SOP_CLASS_UID, alias: "RTVCommunicationSOPClassUID", vr: VR::UI },
    E { tag: RTV_COMMUNICATION_SOP_INSTANCE_UID, alias: "RTVCommunicationSOPInstanceUID", vr: VR::UI },
    E { tag: RTV_SOURCE_IDENTIFIER, alias: "RTVSourceIdentifier", vr: VR::OB },
    E { tag: RTV_FLOW_IDENTIFIER, alias: "RTVFlowIdentifier", vr: VR::OB },
    E { tag: RTV_FLOW_RTP_SAMPLING_RATE, alias: "RTVFlowRTPSamplingRate", vr: VR::UL },
    E { tag: RTV_FLOW_ACTUAL_FRAME_DURATION, alias: "RTVFlowActualFrameDuration", vr: VR::FD },
    E { tag: PRIVATE_INFORMATION_CREATOR_UID, alias: "PrivateInformationCreatorUID", vr: VR::UI },
    E { tag: PRIVATE_INFORMATION, alias: "PrivateInformation", vr: VR::OB },
    E { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: VR::CS },
    E { tag: LANGUAGE_CODE_SEQUENCE, alias: "LanguageCodeSequence", vr: VR::SQ },
    E { tag: IMAGE_TYPE, alias: "ImageType", vr: VR::CS },
    E { tag: INSTANCE_CREATION_DATE, alias: "InstanceCreationDate", vr: VR::DA },
    E { tag: INSTANCE_CREATION_TIME, alias: "InstanceCreationTime", vr: VR::TM },
    E { tag: INSTANCE_CREATOR_UID, alias: "InstanceCreatorUID", vr: VR::UI },
    E { tag: INSTANCE_COERCION_DATE_TIME, alias: "InstanceCoercionDateTime", vr: VR::DT },
    E { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: VR::UI },
    E { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: VR::UI },
    E { tag: RELATED_GENERAL_SOP_CLASS_UID, alias: "RelatedGeneralSOPClassUID", vr: VR::UI },
    E { tag: ORIGINAL_SPECIALIZED_SOP_CLASS_UID, alias: "OriginalSpecializedSOPClassUID", vr: VR::UI },
    E { tag: STUDY_DATE, alias: "StudyDate", vr: VR::DA },
    E { tag: SERIES_DATE, alias: "SeriesDate", vr: VR::DA },
    E { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: VR::DA },
    E { tag: CONTENT_DATE, alias: "ContentDate", vr: VR::DA },
    E { tag: ACQUISITION_DATE_TIME, alias: "AcquisitionDateTime", vr: VR::DT },
    E { tag: STUDY_TIME, alias: "StudyTime", vr: VR::TM },
    E { tag: SERIES_TIME, alias: "SeriesTime", vr: VR::TM },
    E { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: VR::TM },
    E { tag: CONTENT_TIME, alias: "ContentTime", vr: VR::TM },
    E { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: VR::SH },
    E { tag: ISSUER_OF_ACCESSION_NUMBER_SEQUENCE, alias: "IssuerOfAccessionNumberSequence", vr: VR::SQ },
    E { tag: QUERY_RETRIEVE_LEVEL, alias: "QueryRetrieveLevel", vr: VR::CS },
    E { tag: QUERY_RETRIEVE_VIEW, alias: "QueryRetrieveView", vr: VR::CS },
    E { tag: RETRIEVE_AE_TITLE, alias: "RetrieveAETitle", vr: VR::AE },
    E { tag: STATION_AE_TITLE, alias: "StationAETitle", vr: VR::AE },
    E { tag: INSTANCE_AVAILABILITY, alias: "InstanceAvailability", vr: VR::CS },
    E { tag: FAILED_SOP_INSTANCE_UID_LIST, alias: "FailedSOPInstanceUIDList", vr: VR::UI },
    E { tag: MODALITY, alias: "Modality", vr: VR::CS },
    E { tag: MODALITIES_IN_STUDY, alias: "ModalitiesInStudy", vr: VR::CS },
    E { tag: SOP_CLASSES_IN_STUDY, alias: "SOPClassesInStudy", vr: VR::UI },
    E { tag: CONVERSION_TYPE, alias: "ConversionType", vr: VR::CS },
    E { tag: PRESENTATION_INTENT_TYPE, alias: "PresentationIntentType", vr: VR::CS },
    E { tag: MANUFACTURER, alias: "Manufacturer", vr: VR::LO },
    E { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: VR::LO },
    E { tag: INSTITUTION_ADDRESS, alias: "InstitutionAddress", vr: VR::ST },
    E { tag: INSTITUTION_CODE_SEQUENCE, alias: "InstitutionCodeSequence", vr: VR::SQ },
    E { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: VR::PN },
    E { tag: CODE_VALUE, alias: "CodeValue", vr: VR::SH },
    E { tag: CODING_SCHEME_DESIGNATOR, alias: "CodingSchemeDesignator", vr: VR::SH },
    E { tag: CODING_SCHEME_VERSION, alias: "CodingSchemeVersion", vr: VR::SH },
    E { tag: CODE_MEANING, alias: "CodeMeaning", vr: VR::LO },
    E { tag: LONG_CODE_VALUE, alias: "LongCodeValue", vr: VR::UC },
    E { tag: URN_CODE_VALUE, alias: "URNCodeValue", vr: VR::UR },
    E { tag: TIMEZONE_OFFSET_FROM_UTC, alias: "TimezoneOffsetFromUTC", vr: VR::SH },
    E { tag: STATION_NAME, alias: "StationName", vr: VR::SH },
    E { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: VR::LO },
    E { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: VR::LO },
    E { tag: INSTITUTIONAL_DEPARTMENT_NAME, alias: "InstitutionalDepartmentName", vr: VR::LO },
    E { tag: PERFORMING_PHYSICIAN_NAME, alias: "PerformingPhysicianName", vr: VR::PN },
    E { tag: NAME_OF_PHYSICIANS_READING_STUDY, alias: "NameOfPhysiciansReadingStudy", vr: VR::PN },
    E { tag: OPERATORS_NAME, alias: "OperatorsName", vr: VR::PN },
    E { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: VR::LO },
    E { tag: REFERENCED_STUDY_SEQUENCE, alias: "ReferencedStudySequence", vr: VR::SQ },
    E { tag: REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE, alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ },
    E { tag: REFERENCED_SERIES_SEQUENCE, alias: "ReferencedSeriesSequence", vr: VR::SQ },
    E { tag: REFERENCED_IMAGE_SEQUENCE, alias: "ReferencedImageSequence", vr: VR::SQ },
    E { tag: REFERENCED_SOP_CLASS_UID, alias: "ReferencedSOPClassUID", vr: VR::UI },
    E { tag: REFERENCED_SOP_INSTANCE_UID, alias: "ReferencedSOPInstanceUID", vr: VR::UI },
    E { tag: REFERENCED_FRAME_NUMBER, alias: "ReferencedFrameNumber", vr: VR::IS },
    E { tag: RETRIEVE_URL, alias: "RetrieveURL", vr: VR::UR },
    E { tag: DERIVATION_DESCRIPTION, alias: "DerivationDescription", vr: VR::ST },
    E { tag: SOURCE_IMAGE_SEQUENCE, alias: "SourceImageSequence", vr: VR::SQ },
    E { tag: DERIVATION_CODE_SEQUENCE, alias: "DerivationCodeSequence", vr: VR::SQ },
    E { tag: PATIENT_NAME, alias: "PatientName", vr: VR::PN },
    E { tag: PATIENT_ID, alias: "PatientID", vr: VR::LO },
    E { tag: ISSUER_OF_PATIENT_ID, alias: "IssuerOfPatientID", vr: VR::LO },
    E { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: VR::DA },
    E { tag: PATIENT_BIRTH_TIME, alias: "PatientBirthTime", vr: VR::TM },
    E { tag: PATIENT_SEX, alias: "PatientSex", vr: VR::CS },
    E { tag: OTHER_PATIENT_NAMES, alias: "OtherPatientNames", vr: VR::PN },
    E { tag: OTHER_PATIENT_IDS_SEQUENCE, alias: "OtherPatientIDsSequence", vr: VR::SQ },
    E { tag: PATIENT_AGE, alias: "PatientAge", vr: VR::AS },
    E { tag: PATIENT_SIZE, alias: "PatientSize", vr: VR::DS },
    E { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: VR::DS },
    E { tag: ETHNIC_GROUP, alias: "EthnicGroup", vr: VR::SH },
    E { tag: ADDITIONAL_PATIENT_HISTORY, alias: "AdditionalPatientHistory", vr: VR::LT },
    E { tag: PATIENT_COMMENTS, alias: "PatientComments", vr: VR::LT },
    E { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: VR::CS },
    E { tag: SCANNING_SEQUENCE, alias: "ScanningSequence", vr: VR::CS },
    E { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: VR::DS },
    E { tag: KVP, alias: "KVP", vr: VR::DS },
    E { tag: REPETITION_TIME, alias: "RepetitionTime", vr: VR::DS },
    E { tag: ECHO_TIME, alias: "EchoTime", vr: VR::DS },
    E { tag: MAGNETIC_FIELD_STRENGTH, alias: "MagneticFieldStrength", vr: VR::DS },
    E { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: VR::DS },
    E { tag: DEVICE_SERIAL_NUMBER, alias: "DeviceSerialNumber", vr: VR::LO },
    E { tag: SOFTWARE_VERSIONS, alias: "SoftwareVersions", vr: VR::LO },
    E { tag: PROTOCOL_NAME, alias: "ProtocolName", vr: VR::LO },
    E { tag: X_RAY_TUBE_CURRENT, alias: "XRayTubeCurrent", vr: VR::IS },
    E { tag: EXPOSURE, alias: "Exposure", vr: VR::IS },
    E { tag: ACQUISITION_MATRIX, alias: "AcquisitionMatrix", vr: VR::US },
    E { tag: PATIENT_POSITION, alias: "PatientPosition", vr: VR::CS },
    E { tag: REFERENCE_PIXEL_X0, alias: "ReferencePixelX0", vr: VR::SL },
    E { tag: REFERENCE_PIXEL_Y0, alias: "ReferencePixelY0", vr: VR::SL },
    E { tag: DIFFUSION_B_VALUE, alias: "DiffusionBValue", vr: VR::FD },
    E { tag: DIFFUSION_GRADIENT_ORIENTATION, alias: "DiffusionGradientOrientation", vr: VR::FD },
    E { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: VR::UI },
    E { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: VR::UI },
    E { tag: STUDY_ID, alias: "StudyID", vr: VR::SH },
    E { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: VR::IS },
    E { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: VR::IS },
    E { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: VR::IS },
    E { tag: PATIENT_ORIENTATION, alias: "PatientOrientation", vr: VR::CS },
    E { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: VR::DS },
    E { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: VR::DS },
    E { tag: FRAME_OF_REFERENCE_UID, alias: "FrameOfReferenceUID", vr: VR::UI },
    E { tag: POSITION_REFERENCE_INDICATOR, alias: "PositionReferenceIndicator", vr: VR::LO },
    E { tag: SLICE_LOCATION, alias: "SliceLocation", vr: VR::DS },
    E { tag: SOURCE_IMAGE_IDS, alias: "SourceImageIDs", vr: VR::CS },
    E { tag: IMAGE_COMMENTS, alias: "ImageComments", vr: VR::LT },
    E { tag: IN_STACK_POSITION_NUMBER, alias: "InStackPositionNumber", vr: VR::UL },
    E { tag: DIMENSION_INDEX_POINTER, alias: "DimensionIndexPointer", vr: VR::AT },
    E { tag: FUNCTIONAL_GROUP_POINTER, alias: "FunctionalGroupPointer", vr: VR::AT },
    E { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: VR::US },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: VR::CS },
    E { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: VR::US },
    E { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: VR::IS },
    E { tag: FRAME_INCREMENT_POINTER, alias: "FrameIncrementPointer", vr: VR::AT },
    E { tag: ROWS, alias: "Rows", vr: VR::US },
    E { tag: COLUMNS, alias: "Columns", vr: VR::US },
    E { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: VR::DS },
    E { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: VR::US },
    E { tag: BITS_STORED, alias: "BitsStored", vr: VR::US },
    E { tag: HIGH_BIT, alias: "HighBit", vr: VR::US },
    E { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: VR::US },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "SmallestImagePixelValue", vr: VR::US },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "LargestImagePixelValue", vr: VR::US },
    E { tag: WINDOW_CENTER, alias: "WindowCenter", vr: VR::DS },
    E { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: VR::DS },
    E { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: VR::DS },
    E { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: VR::DS },
    E { tag: RESCALE_TYPE, alias: "RescaleType", vr: VR::LO },
    E { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "RedPaletteColorLookupTableData", vr: VR::OW },
    E { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "GreenPaletteColorLookupTableData", vr: VR::OW },
    E { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "BluePaletteColorLookupTableData", vr: VR::OW },
    E { tag: LOSSY_IMAGE_COMPRESSION, alias: "LossyImageCompression", vr: VR::CS },
    E { tag: LUT_DESCRIPTOR, alias: "LUTDescriptor", vr: VR::US },
    E { tag: LUT_DATA, alias: "LUTData", vr: VR::US },
    E { tag: VOI_LUT_SEQUENCE, alias: "VOILUTSequence", vr: VR::SQ },
    E { tag: PIXEL_DATA_PROVIDER_URL, alias: "PixelDataProviderURL", vr: VR::UR },
    E { tag: REQUESTED_PROCEDURE_DESCRIPTION, alias: "RequestedProcedureDescription", vr: VR::LO },
    E { tag: PERFORMED_PROCEDURE_STEP_START_DATE, alias: "PerformedProcedureStepStartDate", vr: VR::DA },
    E { tag: PERFORMED_PROCEDURE_STEP_START_TIME, alias: "PerformedProcedureStepStartTime", vr: VR::TM },
    E { tag: PERFORMED_PROCEDURE_STEP_ID, alias: "PerformedProcedureStepID", vr: VR::SH },
    E { tag: PERFORMED_PROCEDURE_STEP_DESCRIPTION, alias: "PerformedProcedureStepDescription", vr: VR::LO },
    E { tag: PERFORMED_PROTOCOL_CODE_SEQUENCE, alias: "PerformedProtocolCodeSequence", vr: VR::SQ },
    E { tag: REQUEST_ATTRIBUTES_SEQUENCE, alias: "RequestAttributesSequence", vr: VR::SQ },
    E { tag: REAL_WORLD_VALUE_MAPPING_SEQUENCE, alias: "RealWorldValueMappingSequence", vr: VR::SQ },
    E { tag: REAL_WORLD_VALUE_LUT_DATA, alias: "RealWorldValueLUTData", vr: VR::FD },
    E { tag: RELATIONSHIP_TYPE, alias: "RelationshipType", vr: VR::CS },
    E { tag: VALUE_TYPE, alias: "ValueType", vr: VR::CS },
    E { tag: CONCEPT_NAME_CODE_SEQUENCE, alias: "ConceptNameCodeSequence", vr: VR::SQ },
    E { tag: TEXT_VALUE, alias: "TextValue", vr: VR::UT },
    E { tag: CONTENT_SEQUENCE, alias: "ContentSequence", vr: VR::SQ },
    E { tag: RETRIEVE_URI, alias: "RetrieveURI", vr: VR::UR },
    E { tag: RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE, alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ },
    E { tag: LONG_PRIMITIVE_POINT_INDEX_LIST, alias: "LongPrimitivePointIndexList", vr: VR::OL },
    E { tag: GRAPHIC_ANNOTATION_SEQUENCE, alias: "GraphicAnnotationSequence", vr: VR::SQ },
    E { tag: SELECTOR_OV_VALUE, alias: "SelectorOVValue", vr: VR::OV },
    E { tag: SELECTOR_SV_VALUE, alias: "SelectorSVValue", vr: VR::SV },
    E { tag: SELECTOR_UV_VALUE, alias: "SelectorUVValue", vr: VR::UV },
    E { tag: ICON_IMAGE_SEQUENCE, alias: "IconImageSequence", vr: VR::SQ },
    E { tag: ANOMALY_LOCATOR_INDICATOR_SEQUENCE, alias: "AnomalyLocatorIndicatorSequence", vr: VR::SQ },
    E { tag: ANOMALY_LOCATOR_INDICATOR, alias: "AnomalyLocatorIndicator", vr: VR::FL },
    E { tag: CURVE_DIMENSIONS, alias: "CurveDimensions", vr: VR::US },
    E { tag: CURVE_DATA, alias: "CurveData", vr: VR::OW },
    E { tag: SHARED_FUNCTIONAL_GROUPS_SEQUENCE, alias: "SharedFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: WAVEFORM_SEQUENCE, alias: "WaveformSequence", vr: VR::SQ },
    E { tag: WAVEFORM_BITS_ALLOCATED, alias: "WaveformBitsAllocated", vr: VR::US },
    E { tag: WAVEFORM_SAMPLE_INTERPRETATION, alias: "WaveformSampleInterpretation", vr: VR::CS },
    E { tag: WAVEFORM_DATA, alias: "WaveformData", vr: VR::OW },
    E { tag: FIRST_ORDER_PHASE_CORRECTION_ANGLE, alias: "FirstOrderPhaseCorrectionAngle", vr: VR::OF },
    E { tag: SPECTROSCOPY_DATA, alias: "SpectroscopyData", vr: VR::OF },
    E { tag: OVERLAY_ROWS, alias: "OverlayRows", vr: VR::US },
    E { tag: OVERLAY_COLUMNS, alias: "OverlayColumns", vr: VR::US },
    E { tag: OVERLAY_TYPE, alias: "OverlayType", vr: VR::CS },
    E { tag: OVERLAY_ORIGIN, alias: "OverlayOrigin", vr: VR::SS },
    E { tag: OVERLAY_BITS_ALLOCATED, alias: "OverlayBitsAllocated", vr: VR::US },
    E { tag: OVERLAY_BIT_POSITION, alias: "OverlayBitPosition", vr: VR::US },
    E { tag: OVERLAY_DATA, alias: "OverlayData", vr: VR::OW },
    E { tag: EXTENDED_OFFSET_TABLE, alias: "ExtendedOffsetTable", vr: VR::OV },
    E { tag: EXTENDED_OFFSET_TABLE_LENGTHS, alias: "ExtendedOffsetTableLengths", vr: VR::OV },
    E { tag: FLOAT_PIXEL_DATA, alias: "FloatPixelData", vr: VR::OF },
    E { tag: DOUBLE_FLOAT_PIXEL_DATA, alias: "DoubleFloatPixelData", vr: VR::OD },
    E { tag: PIXEL_DATA, alias: "PixelData", vr: VR::OW },
    E { tag: DIGITAL_SIGNATURES_SEQUENCE, alias: "DigitalSignaturesSequence", vr: VR::SQ },
    E { tag: DATA_SET_TRAILING_PADDING, alias: "DataSetTrailingPadding", vr: VR::OB },
    E { tag: ITEM, alias: "Item", vr: VR::NA },
    E { tag: ITEM_DELIMITATION_ITEM, alias: "ItemDelimitationItem", vr: VR::NA },
    E { tag: SEQUENCE_DELIMITATION_ITEM, alias: "SequenceDelimitationItem", vr: VR::NA },
];

/// Attributes repeating over groups (ggxx,eeee),
/// recorded with the `xx` portion zeroed.
pub static REPEATING_GROUPS: &[Tag] = &[
    CURVE_DIMENSIONS,
    CURVE_DATA,
    OVERLAY_ROWS,
    OVERLAY_COLUMNS,
    OVERLAY_TYPE,
    OVERLAY_ORIGIN,
    OVERLAY_BITS_ALLOCATED,
    OVERLAY_BIT_POSITION,
    OVERLAY_DATA,
];

/// Attributes repeating over elements (gggg,eexx),
/// recorded with the `xx` portion zeroed.
pub static REPEATING_ELEMENTS: &[Tag] = &[SOURCE_IMAGE_IDS];
