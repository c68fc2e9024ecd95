//! Serde helpers for floating point attributes.
//!
//! JSON has no representation for NaN and the infinities, and `serde_json` silently writes them as
//! `null`. That would turn a present attribute into an absent one, so these are rejected instead.
use serde::{Serializer, ser::Error};

/// Serializes an optional finite number, failing for NaN and the infinities.
///
/// Use this with `#[serde(serialize_with = "number::serialize")]` on `Option<f64>` attributes.
#[allow(clippy::ref_option)]
pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) if !value.is_finite() => {
            Err(S::Error::custom(format!("{value} is not a finite number")))
        }
        Some(value) => serializer.serialize_some(value),
        None => serializer.serialize_none(),
    }
}
