//! Error taxonomy for edit batches.
//!
//! [`EditError`] is fatal: it stops the batch and is always returned through
//! `Result`. [`ContentIssue`] describes a per-element mismatch that leaves the
//! element untouched; it is reported in [`Outcome::Skipped`] and never as an
//! error.

use dicom_edit_core::{CoreError, Vr};
use dicom_edit_path::{ParseError, VivifyError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    #[error("malformed path {path:?}: {source}")]
    MalformedPath {
        path: String,
        #[source]
        source: ParseError,
    },
    #[error("unknown operation {0:?}")]
    UnknownVerb(String),
    #[error("cannot convert {from} to {to}")]
    IncompatibleCoercion { from: Vr, to: Vr },
    #[error("cannot build {path:?}: {source}")]
    Structural {
        path: String,
        #[source]
        source: VivifyError,
    },
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Why an operation left an element alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// Nothing at the path.
    UnresolvedTarget,
    /// The value did not contain or equal what the operation looks for.
    NoMatch,
    /// An argument or the stored text could not be parsed.
    UnparseableValue(String),
    /// The element's type does not support the operation.
    UnsupportedType(Vr),
}

/// Per-element result of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(ContentIssue),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
