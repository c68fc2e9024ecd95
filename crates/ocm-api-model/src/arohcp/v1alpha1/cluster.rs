use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Azure, AzureNodePool};
use crate::{
    Timestamp,
    builder::Builder,
    clustersmgmt::v1::{
        Aws, BillingModel, Ccs, CloudProvider, CloudRegion, ClusterApi, ClusterAutoscaler,
        ClusterConsole, ClusterHealthState, ClusterNodes, ClusterState, ClusterStatus,
        DeleteProtection, Dns, Network, NodePoolAutoscaling, NodePoolStatus, Product, Proxy,
        Subscription, Taint, Value, Version,
    },
    kind,
    list::List,
};

/// Definition of an Azure Red Hat OpenShift cluster with a hosted control plane.
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

    pub api: Option<ClusterApi>,

    pub aws: Option<Aws>,

    pub ccs: Option<Ccs>,

    pub dns: Option<Dns>,

    /// Whether the cluster uses FIPS validated cryptography.
    pub fips: Option<bool>,

    /// PEM encoded X.509 certificates trusted in addition to the system trust bundle.
    pub additional_trust_bundle: Option<String>,

    pub autoscaler: Option<ClusterAutoscaler>,

    /// Microsoft Azure settings of the cluster.
    pub azure: Option<Azure>,

    pub billing_model: Option<BillingModel>,

    /// Link to the cloud provider, always `azure`.
    pub cloud_provider: Option<CloudProvider>,

    pub console: Option<ClusterConsole>,

    pub creation_timestamp: Option<Timestamp>,

    pub delete_protection: Option<DeleteProtection>,

    /// Prefix of the DNS domain of the cluster.
    pub domain_prefix: Option<String>,

    pub etcd_encryption: Option<bool>,

    pub expiration_timestamp: Option<Timestamp>,

    pub external_id: Option<String>,

    pub health_state: Option<ClusterHealthState>,

    pub infra_id: Option<String>,

    pub load_balancer_quota: Option<i32>,

    pub managed: Option<bool>,

    pub multi_az: Option<bool>,

    /// Name of the cluster, unique within the Azure resource group.
    pub name: Option<String>,

    pub network: Option<Network>,

    pub node_drain_grace_period: Option<Value>,

    pub node_pools: Option<List<NodePool>>,

    pub nodes: Option<ClusterNodes>,

    pub openshift_version: Option<String>,

    /// Link to the product type, `aro` for these clusters.
    pub product: Option<Product>,

    pub properties: Option<BTreeMap<String, String>>,

    pub proxy: Option<Proxy>,

    /// Link to the Azure region of the cluster.
    pub region: Option<CloudRegion>,

    pub state: Option<ClusterState>,

    pub status: Option<ClusterStatus>,

    pub storage_quota: Option<Value>,

    /// Link to the subscription of the cluster.
    pub subscription: Option<Subscription>,

    /// Link to the version of OpenShift installed.
    pub version: Option<Version>,
}

/// A group of worker nodes of an ARO-HCP cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "NodePool")]
pub struct NodePool {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<NodePool, _>",
        deserialize_with = "kind::deserialize::<NodePool, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    pub auto_repair: Option<bool>,

    pub autoscaling: Option<NodePoolAutoscaling>,

    pub availability_zone: Option<String>,

    /// Azure specific settings of the pool.
    pub azure_node_pool: Option<AzureNodePool>,

    pub labels: Option<BTreeMap<String, String>>,

    pub replicas: Option<i32>,

    pub status: Option<NodePoolStatus>,

    pub subnet: Option<String>,

    pub taints: Option<Vec<Taint>>,

    pub version: Option<Version>,
}
