//! Logic behind the `dicom-edit` and `dicom-path` binaries.
//!
//! - `dicom-edit`: read an [`EditRequest`] and print the edited document
//! - `dicom-path`: print the elements a path matches in a document

use dicom_edit_core::json::{dataset_to_json, document_from_json, document_to_json};
use dicom_edit_core::{CoreError, Document, Element, Value};
use dicom_edit_path::ElementHandle;
use serde::Deserialize;
use serde_json::{json, Value as Json};
use thiserror::Error;

use crate::editor::Editor;
use crate::error::EditError;
use crate::options::EditOptions;
use crate::record::{translate_edits, EditRecord};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Document(#[from] CoreError),
    #[error("{0}")]
    Edit(#[from] EditError),
}

/// Input of `dicom-edit`.
#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub document: Json,
    #[serde(default)]
    pub edits: Vec<EditRecord>,
    #[serde(default)]
    pub options: EditOptions,
}

// ── dicom-edit ───────────────────────────────────────────────────────────

/// Apply the edits of a JSON request to its document.
///
/// Returns the edited document as pretty-printed JSON.
pub fn run_edit_request(request_json: &str) -> Result<String, CliError> {
    let request: EditRequest = serde_json::from_str(request_json)?;
    let mut doc = document_from_json(&request.document)?;
    let ops = translate_edits(&request.edits)?;
    Editor::new().with_options(request.options).apply_edits(&mut doc, &ops)?;
    Ok(serde_json::to_string_pretty(&document_to_json(&doc))?)
}

// ── dicom-path ───────────────────────────────────────────────────────────

/// Resolve `path` in a JSON document.
///
/// Returns a JSON array with one entry per matched slot:
/// `{"tag", "dataset", "vr", "Value"}`, where a missing element has neither
/// `vr` nor `Value`.
pub fn lookup_path(doc_json: &str, path: &str) -> Result<String, CliError> {
    let json: Json = serde_json::from_str(doc_json)?;
    let doc = document_from_json(&json)?;
    let handles = crate::resolve(&doc, path)?;
    let matches: Vec<Json> = handles.iter().map(|h| describe(&doc, h)).collect();
    Ok(serde_json::to_string_pretty(&Json::Array(matches))?)
}

fn describe(doc: &Document, handle: &ElementHandle) -> Json {
    let mut out = json!({
        "tag": handle.tag.to_string(),
        "dataset": handle.dataset.index(),
    });
    if let Some(Element { vr, value }) = handle.element(doc) {
        out["vr"] = json!(vr.as_str());
        out["Value"] = match value {
            Value::Items(items) => Json::Array(items.iter().map(|&item| dataset_to_json(doc, item)).collect()),
            other => json!(other.entries()),
        };
    }
    out
}
