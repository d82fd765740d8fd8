//! Edit operations.

use std::fmt;
use std::str::FromStr;

use dicom_edit_core::Vr;

use crate::error::EditError;

/// The closed set of edit verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    SetTag,
    EmptyTag,
    DeleteTag,
    StringReplace,
    Substitute,
    ShiftDate,
    CopyFromTag,
}

impl Verb {
    pub const ALL: [Verb; 7] = [
        Verb::SetTag,
        Verb::EmptyTag,
        Verb::DeleteTag,
        Verb::StringReplace,
        Verb::Substitute,
        Verb::ShiftDate,
        Verb::CopyFromTag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::SetTag => "set_tag",
            Verb::EmptyTag => "empty_tag",
            Verb::DeleteTag => "delete_tag",
            Verb::StringReplace => "string_replace",
            Verb::Substitute => "substitute",
            Verb::ShiftDate => "shift_date",
            Verb::CopyFromTag => "copy_from_tag",
        }
    }

    /// Whether a missing target is created rather than skipped.
    pub fn creates_missing(&self) -> bool {
        matches!(self, Verb::SetTag | Verb::EmptyTag | Verb::CopyFromTag)
    }
}

impl FromStr for Verb {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .iter()
            .copied()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| EditError::UnknownVerb(s.to_string()))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instruction: a verb, its target path and up to two arguments.
///
/// The meaning of the arguments depends on the verb:
///
/// | verb | `arg1` | `arg2` |
/// |---|---|---|
/// | `set_tag` | new value | |
/// | `string_replace` | needle | replacement |
/// | `substitute` | exact value to match | replacement |
/// | `shift_date` | day offset | |
/// | `copy_from_tag` | source path | |
///
/// `vr` types elements that the operation creates, ahead of the dictionary.
/// Elements that already exist keep their type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub verb: Verb,
    pub path: String,
    pub arg1: String,
    pub arg2: String,
    pub vr: Option<Vr>,
}

impl Operation {
    pub fn new(verb: Verb, path: impl Into<String>, arg1: impl Into<String>, arg2: impl Into<String>) -> Self {
        Self { verb, path: path.into(), arg1: arg1.into(), arg2: arg2.into(), vr: None }
    }

    pub fn with_vr(mut self, vr: Vr) -> Self {
        self.vr = Some(vr);
        self
    }

    pub fn set_tag(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Verb::SetTag, path, value, "")
    }

    pub fn empty_tag(path: impl Into<String>) -> Self {
        Self::new(Verb::EmptyTag, path, "", "")
    }

    pub fn delete_tag(path: impl Into<String>) -> Self {
        Self::new(Verb::DeleteTag, path, "", "")
    }

    pub fn string_replace(path: impl Into<String>, needle: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::new(Verb::StringReplace, path, needle, replacement)
    }

    pub fn substitute(path: impl Into<String>, target: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::new(Verb::Substitute, path, target, replacement)
    }

    pub fn shift_date(path: impl Into<String>, days: impl Into<String>) -> Self {
        Self::new(Verb::ShiftDate, path, days, "")
    }

    pub fn copy_from_tag(path: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(Verb::CopyFromTag, path, source, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_names_round_trip() {
        for verb in Verb::ALL {
            assert_eq!(verb.as_str().parse::<Verb>().unwrap(), verb);
            assert_eq!(verb.to_string(), verb.as_str());
        }
    }

    #[test]
    fn unknown_verb_is_an_error() {
        assert_eq!("set_tags".parse::<Verb>(), Err(EditError::UnknownVerb("set_tags".into())));
        assert_eq!("SET_TAG".parse::<Verb>(), Err(EditError::UnknownVerb("SET_TAG".into())));
    }

    #[test]
    fn create_policy() {
        let creating: Vec<_> = Verb::ALL.into_iter().filter(Verb::creates_missing).collect();
        assert_eq!(creating, vec![Verb::SetTag, Verb::EmptyTag, Verb::CopyFromTag]);
    }
}
