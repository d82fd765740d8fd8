//! Editor configuration.

use dicom_edit_core::Vr;
use serde::{Deserialize, Serialize};

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditOptions {
    /// Type given to a new public element the dictionary does not know.
    pub public_fallback_vr: Vr,
    /// Type given to a new private element the dictionary does not know.
    pub private_fallback_vr: Vr,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self { public_fallback_vr: Vr::LO, private_fallback_vr: Vr::LO }
    }
}
