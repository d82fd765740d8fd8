//! Element values.

use crate::document::DatasetId;
use crate::vr::Vr;

/// Separator between multiple values of one element.
pub const VALUE_DELIMITER: char = '\\';

/// The value held by an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single textual value (possibly empty).
    Text(String),
    /// Value multiplicity > 1.
    Multi(Vec<String>),
    /// Sequence items, in order.
    Items(Vec<DatasetId>),
}

impl Value {
    pub fn empty() -> Self {
        Value::Text(String::new())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Multi(values.into_iter().map(Into::into).collect())
    }

    /// Interpret raw text as a value of `vr`, splitting on `\` where the VR
    /// permits multiple values.
    pub fn from_text(vr: Vr, text: &str) -> Self {
        if vr.allows_multiple_values() && text.contains(VALUE_DELIMITER) {
            Value::Multi(text.split(VALUE_DELIMITER).map(str::to_string).collect())
        } else {
            Value::Text(text.to_string())
        }
    }

    /// Single text value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[DatasetId]> {
        match self {
            Value::Items(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_items(&self) -> bool {
        matches!(self, Value::Items(_))
    }

    /// Scalar entries: one for `Text`, each for `Multi`, none for `Items`.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Value::Text(s) => vec![s.as_str()],
            Value::Multi(values) => values.iter().map(String::as_str).collect(),
            Value::Items(_) => Vec::new(),
        }
    }

    /// Textual form with multiple values joined by `\`. `None` for items.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s.clone()),
            Value::Multi(values) => Some(values.join(&VALUE_DELIMITER.to_string())),
            Value::Items(_) => None,
        }
    }

    /// Rebuild the value with every scalar entry mapped through `f`,
    /// keeping the single/multi shape. `None` for items.
    pub fn map_entries<F>(&self, mut f: F) -> Option<Value>
    where
        F: FnMut(&str) -> String,
    {
        match self {
            Value::Text(s) => Some(Value::Text(f(s))),
            Value::Multi(values) => Some(Value::Multi(values.iter().map(|v| f(v)).collect())),
            Value::Items(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
