//! Attribute tags.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::CoreError;

/// Element numbers that may hold a private creator (block anchor).
pub const PRIVATE_CREATOR_SLOTS: RangeInclusive<u16> = 0x0010..=0x00FF;

/// A `(group, element)` attribute identifier.
///
/// Ordering follows the on-disk dataset order: by group, then by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub group: u16,
    pub element: u16,
}

impl Tag {
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    /// Private tags live in odd-numbered groups.
    pub fn is_private(&self) -> bool {
        self.group % 2 == 1
    }

    /// Whether this tag is a private creator slot `(gggg,0010)`..`(gggg,00FF)`.
    pub fn is_private_creator(&self) -> bool {
        self.is_private() && PRIVATE_CREATOR_SLOTS.contains(&self.element)
    }

    /// The 32-bit `0xGGGGEEEE` form.
    pub fn as_u32(&self) -> u32 {
        (u32::from(self.group) << 16) | u32::from(self.element)
    }

    /// The DICOM JSON key form, `GGGGEEEE` in upper-case hex.
    pub fn to_key(&self) -> String {
        format!("{:04X}{:04X}", self.group, self.element)
    }

    /// Parse the DICOM JSON key form. Case-insensitive.
    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidTag(key.to_string()));
        }
        let group =
            u16::from_str_radix(&key[..4], 16).map_err(|_| CoreError::InvalidTag(key.to_string()))?;
        let element =
            u16::from_str_radix(&key[4..], 16).map_err(|_| CoreError::InvalidTag(key.to_string()))?;
        Ok(Self { group, element })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.group, self.element)
    }
}
