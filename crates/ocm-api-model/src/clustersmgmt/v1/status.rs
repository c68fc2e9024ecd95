use serde::{Deserialize, Serialize};

use super::ClusterState;
use crate::{builder::Builder, enums::open_enum, kind};

/// Detailed status of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "ClusterStatus")]
pub struct ClusterStatus {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<ClusterStatus, _>",
        deserialize_with = "kind::deserialize::<ClusterStatus, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Whether the cluster can be modified or only be read.
    pub configuration_mode: Option<ClusterConfigurationMode>,

    /// Detailed description of the state of the cluster.
    pub description: Option<String>,

    /// Whether the DNS records of the cluster are ready.
    pub dns_ready: Option<bool>,

    /// Number of reasons why the cluster is in limited support.
    pub limited_support_reason_count: Option<i32>,

    /// Whether the OpenID Connect provider of the cluster is ready.
    pub oidc_ready: Option<bool>,

    /// Error code of the failed provisioning, for example `OCM3001`.
    pub provision_error_code: Option<String>,

    /// Human readable message of the failed provisioning.
    pub provision_error_message: Option<String>,

    pub state: Option<ClusterState>,
}

open_enum! {
    /// Whether a cluster can be modified.
    pub enum ClusterConfigurationMode {
        Full => "full",
        ReadOnly => "read_only",
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::json;

    #[test]
    fn failed_provisioning() {
        let status: ClusterStatus = json::unmarshal(indoc! {r#"
            {
              "kind": "ClusterStatus",
              "id": "123",
              "state": "error",
              "provision_error_code": "OCM3055",
              "provision_error_message": "Cluster installation failed",
              "configuration_mode": "read_only",
              "limited_support_reason_count": 0,
              "dns_ready": true
            }
        "#})
        .unwrap();

        assert_eq!(status.state, Some(ClusterState::Error));
        assert_eq!(
            status.configuration_mode,
            Some(ClusterConfigurationMode::ReadOnly)
        );
        assert_eq!(status.limited_support_reason_count, Some(0));
        assert_eq!(status.oidc_ready, None);
        assert_eq!(status.description, None);
    }
}
