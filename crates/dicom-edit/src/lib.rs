//! Batch edit operations over DICOM-style datasets.
//!
//! An [`Operation`] names a [`Verb`], a target tag path and up to two
//! arguments. [`Editor::apply_edits`] runs a list of them against a
//! [`Document`] in order. Configuration mistakes (malformed paths,
//! impossible conversions, paths that cannot be built) stop the batch with an
//! [`EditError`]; elements that simply do not match are skipped and reported
//! as [`Outcome::Skipped`].
//!
//! # Example
//!
//! ```
//! use dicom_edit::{apply, Operation};
//! use dicom_edit_core::{Document, Tag, Value};
//!
//! let mut doc = Document::new();
//! apply(&mut doc, &[Operation::set_tag("<(0012,0064)[2](0010,0020)>", "PATIENT003")]).unwrap();
//!
//! let items = doc.items(doc.root(), Tag::new(0x0012, 0x0064)).unwrap();
//! assert_eq!(items.len(), 3);
//! assert_eq!(
//!     doc.get(items[2], Tag::new(0x0010, 0x0020)).unwrap().value,
//!     Value::text("PATIENT003")
//! );
//! ```

use dicom_edit_core::Document;
use dicom_edit_path::{ElementHandle, TagPathParser};

mod error;
pub use error::{ContentIssue, EditError, Outcome};

mod operation;
pub use operation::{Operation, Verb};

mod record;
pub use record::{strip_metaquotes, translate_edits, EditRecord};

mod options;
pub use options::EditOptions;

mod coerce;
pub use coerce::{coerce, fit_length, Coerced, CoercionRoute};

mod date;
pub use date::{parse_day_offset, shift_date_text};

mod editor;
pub use editor::{BatchSummary, Editor, TypeSource};

pub mod cli;

/// Apply `ops` with the built-in dictionary and default options.
pub fn apply(doc: &mut Document, ops: &[Operation]) -> Result<BatchSummary, EditError> {
    Editor::new().apply_edits(doc, ops)
}

/// Find the element slots `path` addresses, without modifying `doc`.
pub fn resolve(doc: &Document, path: &str) -> Result<Vec<ElementHandle>, EditError> {
    let parsed = TagPathParser::parse(path)
        .map_err(|source| EditError::MalformedPath { path: path.to_string(), source })?;
    Ok(dicom_edit_path::resolve(doc, &parsed))
}
