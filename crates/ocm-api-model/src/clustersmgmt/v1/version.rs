use serde::{Deserialize, Serialize};

use crate::{Timestamp, builder::Builder, kind};

/// A version of OpenShift that clusters can be installed with or upgraded to.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "Version")]
pub struct Version {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<Version, _>",
        deserialize_with = "kind::deserialize::<Version, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Versions this version can be upgraded to.
    pub available_upgrades: Option<Vec<String>>,

    /// Channel group of the version, for example `stable` or `candidate`.
    pub channel_group: Option<String>,

    /// Whether this is the version used when none is requested.
    #[serde(rename = "default")]
    pub default_version: Option<bool>,

    pub enabled: Option<bool>,

    /// Date and time after which the version is no longer supported.
    pub end_of_life_timestamp: Option<Timestamp>,

    /// Whether the version can be used for clusters with a hosted control plane.
    pub hosted_control_plane_enabled: Option<bool>,

    /// Version string without prefix, for example `4.16.4`.
    pub raw_id: Option<String>,

    /// Pull specification of the release image.
    pub release_image: Option<String>,

    /// Whether the version can be used for ROSA clusters.
    pub rosa_enabled: Option<bool>,
}
