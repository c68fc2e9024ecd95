use serde::{Deserialize, Serialize};

use crate::{builder::Builder, kind};

/// The operator identities a version of ARO-HCP requires, and the roles they need.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "ManagedIdentitiesRequirements")]
pub struct ManagedIdentitiesRequirements {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<ManagedIdentitiesRequirements, _>",
        deserialize_with = "kind::deserialize::<ManagedIdentitiesRequirements, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    pub control_plane_operators_identities: Option<Vec<ControlPlaneOperatorIdentityRequirement>>,

    pub data_plane_operators_identities: Option<Vec<DataPlaneOperatorIdentityRequirement>>,
}

/// The identity required by an operator running in the hosted control plane.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ControlPlaneOperatorIdentityRequirement {
    /// Last OpenShift version the requirement applies to.
    pub max_openshift_version: Option<String>,

    /// First OpenShift version the requirement applies to.
    pub min_openshift_version: Option<String>,

    pub operator_name: Option<String>,

    /// Either `always` or `on_enablement`.
    pub required: Option<String>,

    pub role_definitions: Option<Vec<RoleDefinitionOperatorIdentityRequirement>>,
}

/// The identity required by an operator running on the nodes of the cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DataPlaneOperatorIdentityRequirement {
    pub max_openshift_version: Option<String>,
    pub min_openshift_version: Option<String>,
    pub operator_name: Option<String>,
    pub required: Option<String>,
    pub role_definitions: Option<Vec<RoleDefinitionOperatorIdentityRequirement>>,

    /// Service accounts the identity is federated with.
    pub service_accounts: Option<Vec<K8sServiceAccountOperatorIdentityRequirement>>,
}

/// An Azure role an operator identity has to be assigned.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RoleDefinitionOperatorIdentityRequirement {
    pub name: Option<String>,
    pub resource_id: Option<String>,
}

/// A Kubernetes service account an operator identity is federated with.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct K8sServiceAccountOperatorIdentityRequirement {
    pub name: Option<String>,
    pub namespace: Option<String>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::{Buildable, List, json};

    #[test]
    fn requirements_list() {
        let requirements: List<ManagedIdentitiesRequirements> = json::unmarshal(indoc! {r#"
            {
              "kind": "ManagedIdentitiesRequirementsList",
              "page": 1,
              "items": [
                {
                  "kind": "ManagedIdentitiesRequirements",
                  "id": "4.18",
                  "data_plane_operators_identities": [
                    {
                      "operator_name": "disk-csi-driver",
                      "min_openshift_version": "4.18",
                      "required": "always",
                      "role_definitions": [{"name": "Storage Operator", "resource_id": "/providers/Microsoft.Authorization/roleDefinitions/1"}],
                      "service_accounts": [{"name": "azure-disk-csi-driver-node-sa", "namespace": "openshift-cluster-csi-drivers"}]
                    }
                  ]
                }
              ]
            }
        "#})
        .unwrap();

        assert_eq!(requirements.kind(), "ManagedIdentitiesRequirementsList");
        let first = requirements.get(0).unwrap();
        assert_eq!(first.control_plane_operators_identities, None);

        let data_plane = first.data_plane_operators_identities.as_deref().unwrap_or_default();
        assert_eq!(data_plane.len(), 1);
        assert_eq!(data_plane[0].max_openshift_version, None);
        assert_eq!(
            data_plane[0]
                .service_accounts
                .as_deref()
                .and_then(|accounts| accounts.first())
                .and_then(|account| account.namespace.as_deref()),
            Some("openshift-cluster-csi-drivers")
        );

        let rebuilt = requirements.to_builder().build().unwrap();
        assert_eq!(rebuilt, requirements);
    }
}
