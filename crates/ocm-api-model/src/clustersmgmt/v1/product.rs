use serde::{Deserialize, Serialize};

use crate::{builder::Builder, kind};

/// Representation of a product that can be selected as a cluster type, such as `osd` or `rosa`.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "Product")]
pub struct Product {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<Product, _>",
        deserialize_with = "kind::deserialize::<Product, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Human friendly identifier of the product, for example `rosa`.
    pub name: Option<String>,
}
