use serde::{Deserialize, Serialize};

use crate::{builder::Builder, kind};

/// The account management subscription a cluster is accounted against.
///
/// Clusters only carry links to their subscription, which is managed by the accounts management
/// service.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "Subscription")]
pub struct Subscription {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<Subscription, _>",
        deserialize_with = "kind::deserialize::<Subscription, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,
}
