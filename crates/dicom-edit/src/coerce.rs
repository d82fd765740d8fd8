//! Value conversion between declared types.

use dicom_edit_core::{TypeDictionary, Value, Vr, VrFamily, VALUE_DELIMITER};
use tracing::{info, warn};

use crate::error::EditError;

/// How a value was converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionRoute {
    Identity,
    StringFamily,
    NumericFamily,
    DateTimeFamily,
    /// Unrelated types: the text is carried over as-is and truncated. The
    /// result is not checked against the destination type's format.
    StringifyFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coerced {
    pub value: Value,
    pub route: CoercionRoute,
}

/// Convert `value` declared as `from` into a value valid for `to`.
///
/// A sequence can only be converted into a sequence.
pub fn coerce<D>(value: &Value, from: Vr, to: Vr, dict: &D) -> Result<Coerced, EditError>
where
    D: TypeDictionary + ?Sized,
{
    if from == to {
        return Ok(Coerced { value: value.clone(), route: CoercionRoute::Identity });
    }
    if from.is_sequence() || to.is_sequence() {
        return Err(EditError::IncompatibleCoercion { from, to });
    }

    let route = match (from.family(), to.family()) {
        (VrFamily::String, VrFamily::String) => CoercionRoute::StringFamily,
        (VrFamily::Numeric, VrFamily::Numeric) => CoercionRoute::NumericFamily,
        (VrFamily::DateTime, VrFamily::DateTime) => CoercionRoute::DateTimeFamily,
        _ => {
            warn!(%from, %to, "no conversion between types; carrying text over unchanged");
            CoercionRoute::StringifyFallback
        }
    };

    let reshaped = match value {
        Value::Multi(entries) if !to.allows_multiple_values() => {
            Value::Text(entries.join(&VALUE_DELIMITER.to_string()))
        }
        other => other.clone(),
    };
    Ok(Coerced { value: fit_length(reshaped, to, dict), route })
}

/// Truncate each entry of `value` to the maximum length of `vr`.
pub fn fit_length<D>(value: Value, vr: Vr, dict: &D) -> Value
where
    D: TypeDictionary + ?Sized,
{
    let Some(max) = dict.max_length(vr) else {
        return value;
    };
    if value.entries().iter().all(|entry| entry.chars().count() <= max) {
        return value;
    }
    info!(%vr, max, "truncating value to maximum length");
    value
        .map_entries(|entry| entry.chars().take(max).collect())
        .unwrap_or(value)
}
