use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    Aws, CloudProvider, CloudRegion, ClusterAutoscaler, ClusterStatus, NodePool, Product,
    Subscription, Value, Version,
};
use crate::{Timestamp, builder::Builder, enums::open_enum, kind, list::List};

/// Definition of an OpenShift cluster.
///
/// The `cloud_provider`, `region`, `product` and `subscription` attributes reference other
/// resources. When a cluster is retrieved they are links, carrying only the kind, `id` and
/// `href`:
///
/// ```json
/// {
///   "cloud_provider": {
///     "kind": "CloudProviderLink",
///     "id": "aws",
///     "href": "/api/clusters_mgmt/v1/cloud_providers/aws"
///   }
/// }
/// ```
///
/// When a cluster is created they only need the identifier of the referenced resource.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "Cluster")]
pub struct Cluster {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<Cluster, _>",
        deserialize_with = "kind::deserialize::<Cluster, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Information about the API of the cluster.
    pub api: Option<ClusterApi>,

    /// Amazon Web Services settings of the cluster.
    pub aws: Option<Aws>,

    /// Settings of clusters installed into the customer's own cloud account.
    pub ccs: Option<Ccs>,

    /// DNS settings of the cluster.
    pub dns: Option<Dns>,

    /// Whether the cluster uses FIPS validated cryptography.
    pub fips: Option<bool>,

    /// PEM encoded X.509 certificates trusted in addition to the system trust bundle.
    pub additional_trust_bundle: Option<String>,

    pub autoscaler: Option<ClusterAutoscaler>,

    pub billing_model: Option<BillingModel>,

    /// Link to the cloud provider the cluster is installed on.
    pub cloud_provider: Option<CloudProvider>,

    /// Information about the console of the cluster.
    pub console: Option<ClusterConsole>,

    /// Date and time when the cluster was initially created.
    pub creation_timestamp: Option<Timestamp>,

    pub delete_protection: Option<DeleteProtection>,

    /// Whether the monitoring of user workloads is disabled.
    pub disable_user_workload_monitoring: Option<bool>,

    /// Prefix of the DNS domain of the cluster.
    pub domain_prefix: Option<String>,

    /// Whether the etcd database is encrypted.
    pub etcd_encryption: Option<bool>,

    /// Date and time when the cluster will be automatically deleted.
    pub expiration_timestamp: Option<Timestamp>,

    /// Identifier of the cluster generated by the installer.
    pub external_id: Option<String>,

    pub health_state: Option<ClusterHealthState>,

    /// Infrastructure identifier of the cluster, used to name cloud resources.
    pub infra_id: Option<String>,

    /// Load balancer quota to be assigned to the cluster.
    pub load_balancer_quota: Option<i32>,

    /// Whether the cluster is managed by Red Hat.
    pub managed: Option<bool>,

    /// Whether the cluster is spread over multiple availability zones.
    pub multi_az: Option<bool>,

    /// Whether the cluster supports compute nodes of multiple architectures.
    pub multi_arch_enabled: Option<bool>,

    /// Name of the cluster, unique within the organization.
    pub name: Option<String>,

    pub network: Option<Network>,

    /// Grace period for draining nodes during upgrades.
    pub node_drain_grace_period: Option<Value>,

    /// Node pools of clusters with a hosted control plane.
    pub node_pools: Option<List<NodePool>>,

    pub nodes: Option<ClusterNodes>,

    /// Version of OpenShift installed, for example `4.16.4`.
    pub openshift_version: Option<String>,

    /// Link to the product type of the cluster.
    pub product: Option<Product>,

    /// User defined properties for tagging and querying.
    pub properties: Option<BTreeMap<String, String>>,

    pub proxy: Option<Proxy>,

    /// Link to the cloud region the cluster is installed in.
    pub region: Option<CloudRegion>,

    /// Overall state of the cluster.
    pub state: Option<ClusterState>,

    pub status: Option<ClusterStatus>,

    /// Storage quota to be assigned to the cluster.
    pub storage_quota: Option<Value>,

    /// Link to the subscription of the cluster.
    pub subscription: Option<Subscription>,

    /// Link to the version of OpenShift installed.
    pub version: Option<Version>,
}

/// Information about the API of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ClusterApi {
    /// URL of the API server.
    pub url: Option<String>,

    /// Whether the API is reachable from the internet.
    pub listening: Option<ListeningMethod>,
}

/// Information about the web console of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ClusterConsole {
    pub url: Option<String>,
}

/// Counts and placement of the nodes of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ClusterNodes {
    pub availability_zones: Option<Vec<String>>,
    pub compute: Option<i32>,
    pub compute_labels: Option<BTreeMap<String, String>>,
    pub infra: Option<i32>,
    pub master: Option<i32>,
}

/// DNS settings of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Dns {
    /// Base DNS domain of the cluster, for example `example.com`.
    pub base_domain: Option<String>,
}

/// Customer cloud subscription settings: the cluster is installed into the customer's account.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ccs {
    pub enabled: Option<bool>,

    /// Whether the checks of the service control policies of the account are skipped.
    pub disable_scp_checks: Option<bool>,
}

/// Network settings of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Network {
    /// Subnet prefix length assigned to each node.
    pub host_prefix: Option<i32>,

    /// IP address block of the machines.
    pub machine_cidr: Option<String>,

    /// IP address block of the pods.
    pub pod_cidr: Option<String>,

    /// IP address block of the services.
    pub service_cidr: Option<String>,

    /// The network plugin, for example `OVNKubernetes`.
    #[serde(rename = "type")]
    pub network_type: Option<String>,
}

/// Cluster wide HTTP proxy settings.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Proxy {
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,

    /// Comma separated list of hosts which bypass the proxy.
    pub no_proxy: Option<String>,
}

/// Protection of a cluster against accidental deletion.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DeleteProtection {
    pub enabled: Option<bool>,
}

open_enum! {
    /// Overall state of a cluster.
    pub enum ClusterState {
        Error => "error",
        Hibernating => "hibernating",
        Installing => "installing",
        Pending => "pending",
        PoweringDown => "powering_down",
        Ready => "ready",
        Resuming => "resuming",
        Uninstalling => "uninstalling",
        Unknown => "unknown",
        Validating => "validating",
        Waiting => "waiting",
    }
}

open_enum! {
    /// Health of a cluster, as reported by its monitoring.
    pub enum ClusterHealthState {
        Healthy => "healthy",
        Unhealthy => "unhealthy",
        Unknown => "unknown",
    }
}

open_enum! {
    /// How a cluster is billed.
    pub enum BillingModel {
        Marketplace => "marketplace",
        MarketplaceAws => "marketplace-aws",
        MarketplaceAzure => "marketplace-azure",
        MarketplaceGcp => "marketplace-gcp",
        MarketplaceRhm => "marketplace-rhm",
        Standard => "standard",
    }
}

open_enum! {
    /// Whether a cluster endpoint is reachable from the internet or only from within its network.
    pub enum ListeningMethod {
        External => "external",
        Internal => "internal",
    }
}
