use serde::{Deserialize, Serialize};

use crate::{builder::Builder, kind};

/// A cloud provider clusters can be installed on, such as `aws` or `gcp`.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "CloudProvider")]
pub struct CloudProvider {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<CloudProvider, _>",
        deserialize_with = "kind::deserialize::<CloudProvider, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Name of the cloud provider for display purposes, for example `Amazon Web Services`.
    pub display_name: Option<String>,

    /// Human friendly identifier of the cloud provider, for example `aws`.
    pub name: Option<String>,

    /// The regions of the provider, only present when explicitly requested.
    pub regions: Option<Vec<CloudRegion>>,
}

/// A region of a cloud provider.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "CloudRegion")]
pub struct CloudRegion {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<CloudRegion, _>",
        deserialize_with = "kind::deserialize::<CloudRegion, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Whether the region is only available for clusters using the customer's cloud account.
    pub ccs_only: Option<bool>,

    /// Link to the cloud provider the region belongs to.
    pub cloud_provider: Option<CloudProvider>,

    /// Name of the region for display purposes, for example `N. Virginia`.
    pub display_name: Option<String>,

    pub enabled: Option<bool>,

    /// Whether the region is an AWS GovCloud region.
    pub govcloud: Option<bool>,

    /// The location of the key management service used for the region.
    pub kms_location_id: Option<String>,

    /// Human friendly identifier of the region, for example `us-east-1`.
    pub name: Option<String>,

    /// Whether hosted control planes can be created in the region.
    pub supports_hypershift: Option<bool>,

    /// Whether the region has enough availability zones for multi-AZ clusters.
    pub supports_multi_az: Option<bool>,
}
