use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builder::Builder;

/// Microsoft Azure settings of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Azure {
    /// Name of the resource group holding the infrastructure managed on behalf of the cluster.
    pub managed_resource_group_name: Option<String>,

    /// Resource ID of the network security group attached to the subnet of the nodes.
    pub network_security_group_resource_id: Option<String>,

    pub nodes_outbound_connectivity: Option<AzureNodesOutboundConnectivity>,

    /// How the cluster operators authenticate against Azure.
    pub operators_authentication: Option<AzureOperatorsAuthentication>,

    /// Name of the resource group of the cluster resource.
    pub resource_group_name: Option<String>,

    /// Name of the Azure resource representing the cluster.
    pub resource_name: Option<String>,

    /// Resource ID of the subnet the nodes are placed in.
    pub subnet_resource_id: Option<String>,

    pub subscription_id: Option<String>,

    pub tenant_id: Option<String>,
}

/// How the nodes of a cluster reach the internet.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AzureNodesOutboundConnectivity {
    /// The outbound type, for example `load_balancer`.
    pub outbound_type: Option<String>,
}

/// Authentication of the cluster operators against Azure.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AzureOperatorsAuthentication {
    pub managed_identities: Option<AzureOperatorsAuthenticationManagedIdentities>,
}

/// The managed identities used by the operators of a cluster, keyed by operator name.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AzureOperatorsAuthenticationManagedIdentities {
    /// Identities of the operators running in the hosted control plane.
    pub control_plane_operators_managed_identities:
        Option<BTreeMap<String, AzureControlPlaneManagedIdentity>>,

    /// Identities of the operators running on the nodes of the cluster.
    pub data_plane_operators_managed_identities:
        Option<BTreeMap<String, AzureDataPlaneManagedIdentity>>,

    /// URL of the endpoint serving the credentials of the data plane identities.
    pub managed_identities_data_plane_identity_url: Option<String>,

    /// The identity of the service managing the cluster.
    pub service_managed_identity: Option<AzureServiceManagedIdentity>,
}

/// A user assigned managed identity used by a control plane operator.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AzureControlPlaneManagedIdentity {
    pub client_id: Option<String>,
    pub principal_id: Option<String>,
    pub resource_id: Option<String>,
}

/// A user assigned managed identity used by a data plane operator.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AzureDataPlaneManagedIdentity {
    pub resource_id: Option<String>,
}

/// The user assigned managed identity of the service managing a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AzureServiceManagedIdentity {
    pub client_id: Option<String>,
    pub principal_id: Option<String>,
    pub resource_id: Option<String>,
}

/// Azure specific settings of a node pool.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AzureNodePool {
    /// Whether the data on the hosts is encrypted.
    pub encryption_at_host: Option<bool>,

    /// Whether the operating system disk is ephemeral.
    pub ephemeral_os_disk_enabled: Option<bool>,

    pub os_disk_size_gibibytes: Option<i32>,

    /// Resource ID of the disk encryption set used for the operating system disk.
    pub os_disk_sse_encryption_set_resource_id: Option<String>,

    /// Storage account type of the operating system disk, for example `Premium_LRS`.
    pub os_disk_storage_account_type: Option<String>,

    /// Name of the Azure resource representing the node pool.
    pub resource_name: Option<String>,

    /// Size of the virtual machines, for example `Standard_D8s_v3`.
    pub vm_size: Option<String>,
}
