//! Value representations (declared element types).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// DICOM value representation.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vr {
    AE,
    AS,
    AT,
    CS,
    DA,
    DS,
    DT,
    FD,
    FL,
    IS,
    LO,
    LT,
    OB,
    OD,
    OF,
    OL,
    OV,
    OW,
    PN,
    SH,
    SL,
    SQ,
    SS,
    ST,
    SV,
    TM,
    UC,
    UI,
    UL,
    UN,
    UR,
    US,
    UT,
    UV,
}

/// Coarse grouping used by coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VrFamily {
    String,
    Numeric,
    DateTime,
    Binary,
    Sequence,
}

impl Vr {
    pub const ALL: [Vr; 34] = [
        Vr::AE, Vr::AS, Vr::AT, Vr::CS, Vr::DA, Vr::DS, Vr::DT, Vr::FD, Vr::FL, Vr::IS, Vr::LO,
        Vr::LT, Vr::OB, Vr::OD, Vr::OF, Vr::OL, Vr::OV, Vr::OW, Vr::PN, Vr::SH, Vr::SL, Vr::SQ,
        Vr::SS, Vr::ST, Vr::SV, Vr::TM, Vr::UC, Vr::UI, Vr::UL, Vr::UN, Vr::UR, Vr::US, Vr::UT,
        Vr::UV,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vr::AE => "AE",
            Vr::AS => "AS",
            Vr::AT => "AT",
            Vr::CS => "CS",
            Vr::DA => "DA",
            Vr::DS => "DS",
            Vr::DT => "DT",
            Vr::FD => "FD",
            Vr::FL => "FL",
            Vr::IS => "IS",
            Vr::LO => "LO",
            Vr::LT => "LT",
            Vr::OB => "OB",
            Vr::OD => "OD",
            Vr::OF => "OF",
            Vr::OL => "OL",
            Vr::OV => "OV",
            Vr::OW => "OW",
            Vr::PN => "PN",
            Vr::SH => "SH",
            Vr::SL => "SL",
            Vr::SQ => "SQ",
            Vr::SS => "SS",
            Vr::ST => "ST",
            Vr::SV => "SV",
            Vr::TM => "TM",
            Vr::UC => "UC",
            Vr::UI => "UI",
            Vr::UL => "UL",
            Vr::UN => "UN",
            Vr::UR => "UR",
            Vr::US => "US",
            Vr::UT => "UT",
            Vr::UV => "UV",
        }
    }

    pub fn family(&self) -> VrFamily {
        match self {
            Vr::AE | Vr::AS | Vr::CS | Vr::LO | Vr::LT | Vr::PN | Vr::SH | Vr::ST | Vr::UC
            | Vr::UI | Vr::UR | Vr::UT => VrFamily::String,
            Vr::DS | Vr::IS | Vr::FD | Vr::FL | Vr::SL | Vr::SS | Vr::SV | Vr::UL | Vr::US
            | Vr::UV => VrFamily::Numeric,
            Vr::DA | Vr::DT | Vr::TM => VrFamily::DateTime,
            Vr::SQ => VrFamily::Sequence,
            Vr::AT | Vr::OB | Vr::OD | Vr::OF | Vr::OL | Vr::OV | Vr::OW | Vr::UN => {
                VrFamily::Binary
            }
        }
    }

    /// Maximum length of a single value, in characters.
    ///
    /// `None` for unbounded text (`UC`, `UR`, `UT`) and for non-text VRs.
    pub fn max_length(&self) -> Option<usize> {
        match self {
            Vr::AE => Some(16),
            Vr::AS => Some(4),
            Vr::CS => Some(16),
            Vr::DA => Some(8),
            Vr::DS => Some(16),
            Vr::DT => Some(26),
            Vr::IS => Some(12),
            Vr::LO => Some(64),
            Vr::LT => Some(10240),
            Vr::PN => Some(64),
            Vr::SH => Some(16),
            Vr::ST => Some(1024),
            Vr::TM => Some(14),
            Vr::UI => Some(64),
            _ => None,
        }
    }

    /// Whether `\` separates multiple values for this VR.
    pub fn allows_multiple_values(&self) -> bool {
        !matches!(self, Vr::LT | Vr::ST | Vr::UT | Vr::UR | Vr::SQ)
            && self.family() != VrFamily::Binary
    }

    /// `DA` or `DT`: values that begin with an 8-digit calendar date.
    pub fn is_date(&self) -> bool {
        matches!(self, Vr::DA | Vr::DT)
    }

    pub fn is_sequence(&self) -> bool {
        *self == Vr::SQ
    }
}

impl FromStr for Vr {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Vr::ALL
            .iter()
            .copied()
            .find(|vr| vr.as_str() == upper)
            .ok_or_else(|| CoreError::UnknownVr(s.to_string()))
    }
}

impl fmt::Display for Vr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
