//! Type lookups for tags that do not exist yet.

use crate::private::owner_matches;
use crate::tag::Tag;
use crate::vr::Vr;

/// Source of declared types for new elements.
pub trait TypeDictionary {
    fn lookup_type(&self, tag: Tag) -> Option<Vr>;

    /// Type of element `offset` in the block owned by `owner` in `group`.
    fn lookup_private_type(&self, group: u16, owner: &str, offset: u8) -> Option<Vr>;

    /// Maximum characters per value. Defaults to the standard limit.
    fn max_length(&self, vr: Vr) -> Option<usize> {
        vr.max_length()
    }
}

/// Built-in dictionary of commonly edited attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDictionary;

struct Entry {
    tag: u32,
    vr: Vr,
    keyword: &'static str,
}

const fn entry(tag: u32, vr: Vr, keyword: &'static str) -> Entry {
    Entry { tag, vr, keyword }
}

// Sorted by tag; lookups binary-search.
static PUBLIC: &[Entry] = &[
    entry(0x0008_0005, Vr::CS, "SpecificCharacterSet"),
    entry(0x0008_0008, Vr::CS, "ImageType"),
    entry(0x0008_0012, Vr::DA, "InstanceCreationDate"),
    entry(0x0008_0013, Vr::TM, "InstanceCreationTime"),
    entry(0x0008_0016, Vr::UI, "SOPClassUID"),
    entry(0x0008_0018, Vr::UI, "SOPInstanceUID"),
    entry(0x0008_0020, Vr::DA, "StudyDate"),
    entry(0x0008_0021, Vr::DA, "SeriesDate"),
    entry(0x0008_0022, Vr::DA, "AcquisitionDate"),
    entry(0x0008_0023, Vr::DA, "ContentDate"),
    entry(0x0008_002A, Vr::DT, "AcquisitionDateTime"),
    entry(0x0008_0030, Vr::TM, "StudyTime"),
    entry(0x0008_0031, Vr::TM, "SeriesTime"),
    entry(0x0008_0032, Vr::TM, "AcquisitionTime"),
    entry(0x0008_0033, Vr::TM, "ContentTime"),
    entry(0x0008_0050, Vr::SH, "AccessionNumber"),
    entry(0x0008_0060, Vr::CS, "Modality"),
    entry(0x0008_0070, Vr::LO, "Manufacturer"),
    entry(0x0008_0080, Vr::LO, "InstitutionName"),
    entry(0x0008_0081, Vr::ST, "InstitutionAddress"),
    entry(0x0008_0090, Vr::PN, "ReferringPhysicianName"),
    entry(0x0008_0100, Vr::SH, "CodeValue"),
    entry(0x0008_0102, Vr::SH, "CodingSchemeDesignator"),
    entry(0x0008_0104, Vr::LO, "CodeMeaning"),
    entry(0x0008_1010, Vr::SH, "StationName"),
    entry(0x0008_1030, Vr::LO, "StudyDescription"),
    entry(0x0008_103E, Vr::LO, "SeriesDescription"),
    entry(0x0008_1040, Vr::LO, "InstitutionalDepartmentName"),
    entry(0x0008_1050, Vr::PN, "PerformingPhysicianName"),
    entry(0x0008_1070, Vr::PN, "OperatorsName"),
    entry(0x0008_1110, Vr::SQ, "ReferencedStudySequence"),
    entry(0x0008_1115, Vr::SQ, "ReferencedSeriesSequence"),
    entry(0x0008_1140, Vr::SQ, "ReferencedImageSequence"),
    entry(0x0008_114A, Vr::SQ, "ReferencedInstanceSequence"),
    entry(0x0008_1150, Vr::UI, "ReferencedSOPClassUID"),
    entry(0x0008_1155, Vr::UI, "ReferencedSOPInstanceUID"),
    entry(0x0008_2112, Vr::SQ, "SourceImageSequence"),
    entry(0x0008_9124, Vr::SQ, "DerivationImageSequence"),
    entry(0x0010_0010, Vr::PN, "PatientName"),
    entry(0x0010_0020, Vr::LO, "PatientID"),
    entry(0x0010_0030, Vr::DA, "PatientBirthDate"),
    entry(0x0010_0040, Vr::CS, "PatientSex"),
    entry(0x0010_1010, Vr::AS, "PatientAge"),
    entry(0x0010_1020, Vr::DS, "PatientSize"),
    entry(0x0010_1030, Vr::DS, "PatientWeight"),
    entry(0x0010_21B0, Vr::LT, "AdditionalPatientHistory"),
    entry(0x0010_4000, Vr::LT, "PatientComments"),
    entry(0x0012_0062, Vr::CS, "PatientIdentityRemoved"),
    entry(0x0012_0063, Vr::LO, "DeidentificationMethod"),
    entry(0x0012_0064, Vr::SQ, "DeidentificationMethodCodeSequence"),
    entry(0x0018_0015, Vr::CS, "BodyPartExamined"),
    entry(0x0018_0050, Vr::DS, "SliceThickness"),
    entry(0x0018_1000, Vr::LO, "DeviceSerialNumber"),
    entry(0x0018_1020, Vr::LO, "SoftwareVersions"),
    entry(0x0020_000D, Vr::UI, "StudyInstanceUID"),
    entry(0x0020_000E, Vr::UI, "SeriesInstanceUID"),
    entry(0x0020_0010, Vr::SH, "StudyID"),
    entry(0x0020_0011, Vr::IS, "SeriesNumber"),
    entry(0x0020_0013, Vr::IS, "InstanceNumber"),
    entry(0x0020_0052, Vr::UI, "FrameOfReferenceUID"),
    entry(0x0020_4000, Vr::LT, "ImageComments"),
    entry(0x0028_0010, Vr::US, "Rows"),
    entry(0x0028_0011, Vr::US, "Columns"),
    entry(0x0032_1060, Vr::LO, "RequestedProcedureDescription"),
    entry(0x0040_0008, Vr::SQ, "ScheduledProtocolCodeSequence"),
    entry(0x0040_0244, Vr::DA, "PerformedProcedureStepStartDate"),
    entry(0x0040_0275, Vr::SQ, "RequestAttributesSequence"),
    entry(0x0040_A040, Vr::CS, "ValueType"),
    entry(0x0040_A124, Vr::UI, "UID"),
    entry(0x0040_A170, Vr::SQ, "PurposeOfReferenceCodeSequence"),
    entry(0x5200_9229, Vr::SQ, "SharedFunctionalGroupsSequence"),
    entry(0x5200_9230, Vr::SQ, "PerFrameFunctionalGroupsSequence"),
];

struct PrivateEntry {
    group: u16,
    owner: &'static str,
    offset: u8,
    vr: Vr,
}

static PRIVATE: &[PrivateEntry] = &[
    PrivateEntry { group: 0x0013, owner: "CTP", offset: 0x10, vr: Vr::LO },
    PrivateEntry { group: 0x0013, owner: "CTP", offset: 0x11, vr: Vr::LO },
    PrivateEntry { group: 0x0013, owner: "CTP", offset: 0x12, vr: Vr::LO },
    PrivateEntry { group: 0x0013, owner: "CTP", offset: 0x13, vr: Vr::LO },
];

fn find(tag: Tag) -> Option<&'static Entry> {
    let key = tag.as_u32();
    PUBLIC.binary_search_by_key(&key, |e| e.tag).ok().map(|i| &PUBLIC[i])
}

/// Keyword of a public attribute, e.g. `PatientName` for `(0010,0010)`.
pub fn keyword(tag: Tag) -> Option<&'static str> {
    find(tag).map(|e| e.keyword)
}

impl TypeDictionary for StandardDictionary {
    fn lookup_type(&self, tag: Tag) -> Option<Vr> {
        if tag.is_private_creator() {
            return Some(Vr::LO);
        }
        find(tag).map(|e| e.vr)
    }

    fn lookup_private_type(&self, group: u16, owner: &str, offset: u8) -> Option<Vr> {
        PRIVATE
            .iter()
            .find(|e| e.group == group && e.offset == offset && owner_matches(owner, e.owner))
            .map(|e| e.vr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(PUBLIC.windows(2).all(|w| w[0].tag < w[1].tag));
    }

    #[test]
    fn public_lookups() {
        let dict = StandardDictionary;
        assert_eq!(dict.lookup_type(Tag::new(0x0010, 0x0010)), Some(Vr::PN));
        assert_eq!(dict.lookup_type(Tag::new(0x0020, 0x000D)), Some(Vr::UI));
        assert_eq!(dict.lookup_type(Tag::new(0x0012, 0x0064)), Some(Vr::SQ));
        assert_eq!(dict.lookup_type(Tag::new(0x0008, 0x0060)), Some(Vr::CS));
        assert_eq!(dict.lookup_type(Tag::new(0x0009, 0x1001)), None);
        assert_eq!(keyword(Tag::new(0x0008, 0x002A)), Some("AcquisitionDateTime"));
    }

    #[test]
    fn private_lookups() {
        let dict = StandardDictionary;
        assert_eq!(dict.lookup_private_type(0x0013, "CTP", 0x10), Some(Vr::LO));
        assert_eq!(dict.lookup_private_type(0x0013, "CTP ", 0x13), Some(Vr::LO));
        assert_eq!(dict.lookup_private_type(0x0013, "CTP", 0x14), None);
        assert_eq!(dict.lookup_private_type(0x0013, "OTHER", 0x10), None);
        assert_eq!(dict.lookup_type(Tag::new(0x0013, 0x0010)), Some(Vr::LO));
    }

    #[test]
    fn max_length_defaults_to_vr_limit() {
        let dict = StandardDictionary;
        assert_eq!(dict.max_length(Vr::SH), Some(16));
        assert_eq!(dict.max_length(Vr::UT), None);
    }
}
