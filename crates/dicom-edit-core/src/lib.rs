//! In-memory DICOM-style dataset model.
//!
//! A [`Document`] is an arena of datasets: the root and every sequence item.
//! Elements are keyed by [`Tag`], carry a [`Vr`] and hold a [`Value`]; sequence
//! values list the ids of their item datasets, and each item knows its parent.
//!
//! # Example
//!
//! ```
//! use dicom_edit_core::{Document, Tag, Value, Vr};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let seq = Tag::new(0x0008, 0x1115);
//! doc.insert_sequence(root, seq);
//! let item = doc.push_item(root, seq).unwrap();
//! doc.insert(item, Tag::new(0x0008, 0x1150), Vr::UI, "1.2.3");
//!
//! assert_eq!(doc.parent(item), Some(root));
//! assert_eq!(
//!     doc.get(item, Tag::new(0x0008, 0x1150)).unwrap().value,
//!     Value::text("1.2.3")
//! );
//! ```

mod error;
pub use error::CoreError;

mod tag;
pub use tag::{Tag, PRIVATE_CREATOR_SLOTS};

mod vr;
pub use vr::{Vr, VrFamily};

mod value;
pub use value::{Value, VALUE_DELIMITER};

mod document;
pub use document::{Dataset, DatasetId, Document, Element};

mod private;
pub use private::{owner_matches, PrivateBlock};

mod dictionary;
pub use dictionary::{keyword, StandardDictionary, TypeDictionary};

pub mod json;
