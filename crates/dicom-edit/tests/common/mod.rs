#![allow(dead_code)]

use dicom_edit_core::{DatasetId, Document, Element, Tag, Value, Vr};

pub const PATIENT_NAME: Tag = Tag::new(0x0010, 0x0010);
pub const STUDY_UID: Tag = Tag::new(0x0020, 0x000D);
pub const IMAGE_TYPE: Tag = Tag::new(0x0008, 0x0008);
pub const REF_SERIES_SEQ: Tag = Tag::new(0x0008, 0x1115);
pub const REF_INSTANCE_SEQ: Tag = Tag::new(0x0008, 0x114A);
pub const REF_CLASS_UID: Tag = Tag::new(0x0008, 0x1150);
pub const REF_IMAGE_SEQ: Tag = Tag::new(0x0008, 0x1140);
pub const PER_FRAME_SEQ: Tag = Tag::new(0x5200, 0x9230);
pub const DERIVATION_SEQ: Tag = Tag::new(0x0008, 0x9124);
pub const SOURCE_IMAGE_SEQ: Tag = Tag::new(0x0008, 0x2112);
pub const PURPOSE_SEQ: Tag = Tag::new(0x0040, 0xA170);
pub const CODE_VALUE: Tag = Tag::new(0x0008, 0x0100);
pub const OVERLAY_SEQ: Tag = Tag::new(0x6000, 0x0010);

pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";

/// Create `tag` as a sequence of `count` empty items.
pub fn sequence(doc: &mut Document, ds: DatasetId, tag: Tag, count: usize) -> Vec<DatasetId> {
    doc.insert_sequence(ds, tag);
    (0..count).map(|_| doc.push_item(ds, tag).unwrap()).collect()
}

/// A dataset with public, multi-valued, private and deeply nested content.
///
/// - `(0008,1115)[0](0008,114A)[0..100](0008,1150)`: 100 referenced instances
/// - `(5200,9230)[0](0008,9124)[0](0008,2112)[0..5](0040,A170)[0..200](0008,0100)`:
///   1000 code values
/// - `(0013,"CTP",10..13)`: a private block at the root
/// - `(0029,"INTELERAD MEDICAL SYSTEMS",20)` at the root
/// - `(6000,0010)[0..2]` items each with their own `"NEW CREATOR"` block
/// - `(0008,1140)[0](0029,1020)` with no anchor in the item, relying on the
///   root's `(0029,0010)` anchor
pub fn sample_document() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    doc.insert(root, PATIENT_NAME, Vr::PN, "Doe^John");
    doc.insert(root, STUDY_UID, Vr::UI, "1.2.840.12345.1");
    doc.insert(root, IMAGE_TYPE, Vr::CS, Value::multi(["ORIGINAL", "PRIMARY", "AXIAL"]));
    doc.insert(root, Tag::new(0x0008, 0x0020), Vr::DA, "20241030");
    doc.insert(root, Tag::new(0x0008, 0x002A), Vr::DT, "20241030143055.123456");

    doc.insert(root, Tag::new(0x0029, 0x0010), Vr::LO, "INTELERAD MEDICAL SYSTEMS");
    doc.insert(root, Tag::new(0x0029, 0x1020), Vr::LO, "PRIVATE_VALUE_20");

    doc.insert(root, Tag::new(0x0013, 0x0010), Vr::LO, "CTP");
    doc.insert(root, Tag::new(0x0013, 0x1010), Vr::LO, "TCIA-Fake-Project");
    doc.insert(root, Tag::new(0x0013, 0x1011), Vr::LO, "TCIA-Fake-Site");
    doc.insert(root, Tag::new(0x0013, 0x1013), Vr::LO, "12345678");

    let series = sequence(&mut doc, root, REF_SERIES_SEQ, 1);
    for instance in sequence(&mut doc, series[0], REF_INSTANCE_SEQ, 100) {
        doc.insert(instance, REF_CLASS_UID, Vr::UI, CT_IMAGE_STORAGE);
    }

    let frames = sequence(&mut doc, root, PER_FRAME_SEQ, 1);
    let derivations = sequence(&mut doc, frames[0], DERIVATION_SEQ, 1);
    for source in sequence(&mut doc, derivations[0], SOURCE_IMAGE_SEQ, 5) {
        for purpose in sequence(&mut doc, source, PURPOSE_SEQ, 200) {
            doc.insert(purpose, CODE_VALUE, Vr::SH, "121322");
        }
    }

    for overlay in sequence(&mut doc, root, OVERLAY_SEQ, 2) {
        doc.insert(overlay, Tag::new(0x0029, 0x0010), Vr::LO, "NEW CREATOR");
        doc.insert(overlay, Tag::new(0x0029, 0x1021), Vr::LO, "PRIVATE_VALUE_21");
    }

    let images = sequence(&mut doc, root, REF_IMAGE_SEQ, 1);
    doc.insert(images[0], Tag::new(0x0029, 0x1020), Vr::LO, "NESTED_VALUE_20");

    doc
}

/// Text of every slot `path` matches; `None` for empty slots.
pub fn texts(doc: &Document, path: &str) -> Vec<Option<String>> {
    dicom_edit::resolve(doc, path)
        .unwrap()
        .iter()
        .map(|h| h.element(doc).and_then(|e| e.value.to_text()))
        .collect()
}

/// The single element at `path`, if present.
pub fn element<'a>(doc: &'a Document, path: &str) -> Option<&'a Element> {
    let handles = dicom_edit::resolve(doc, path).unwrap();
    assert!(handles.len() <= 1, "{path} matched {} slots", handles.len());
    handles.first().and_then(|h| h.element(doc))
}
