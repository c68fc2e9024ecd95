use serde::{Deserialize, Serialize};

use crate::{builder::Builder, number};

/// A numeric quantity with its unit, for example a storage quota or a grace period.
///
/// The unit is a string such as `B`, `KiB` or `minutes`.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Value {
    pub unit: Option<String>,
    #[serde(serialize_with = "number::serialize")]
    pub value: Option<f64>,
}
