//! Raw edit records as delivered by spreadsheet-driven sources.
//!
//! Argument values arrive wrapped as `<value>`, sometimes with a leading
//! apostrophe (`'<value>`) that spreadsheets add to keep text from being
//! reinterpreted. The wrapping is stripped before the record becomes an
//! [`Operation`]. Tag paths usually arrive without their outer `<...>`;
//! those are put back so the path parses.

use dicom_edit_core::Vr;
use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::operation::{Operation, Verb};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord {
    pub op: String,
    pub tag: String,
    #[serde(default, alias = "val1")]
    pub arg1: String,
    #[serde(default, alias = "val2")]
    pub arg2: String,
    /// Only `exact` (or absent) is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_mode: Option<String>,
    /// Type for elements the edit creates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vr: Option<Vr>,
}

/// Remove one `<...>` layer, and a leading `'` in front of it.
///
/// Values that are not fully wrapped are returned unchanged.
pub fn strip_metaquotes(s: &str) -> &str {
    let unquoted = match s.strip_prefix('\'') {
        Some(rest) if rest.starts_with('<') => rest,
        _ => s,
    };
    unquoted
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(s)
}

/// Wrap a bare path such as `(0010,0010)` as `<(0010,0010)>`. Already
/// wrapped paths are returned trimmed.
pub(crate) fn wrap_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('<') {
        trimmed.to_string()
    } else {
        format!("<{trimmed}>")
    }
}

impl TryFrom<&EditRecord> for Operation {
    type Error = EditError;

    fn try_from(record: &EditRecord) -> Result<Self, Self::Error> {
        let verb: Verb = record.op.trim().parse()?;
        let op = Operation::new(
            verb,
            wrap_path(&record.tag),
            strip_metaquotes(&record.arg1),
            strip_metaquotes(&record.arg2),
        );
        Ok(match record.vr {
            Some(vr) => op.with_vr(vr),
            None => op,
        })
    }
}

/// Translate a batch of records. Every verb is checked before anything is
/// returned, so a typo anywhere rejects the whole batch.
pub fn translate_edits(records: &[EditRecord]) -> Result<Vec<Operation>, EditError> {
    records.iter().map(Operation::try_from).collect()
}
