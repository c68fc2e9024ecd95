use serde::{Deserialize, Serialize};

use crate::{builder::Builder, kind};

/// Settings of the cluster autoscaler, which adds and removes nodes depending on the workload.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "ClusterAutoscaler")]
pub struct ClusterAutoscaler {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<ClusterAutoscaler, _>",
        deserialize_with = "kind::deserialize::<ClusterAutoscaler, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Whether node groups with the same instance type and labels are balanced.
    pub balance_similar_node_groups: Option<bool>,

    /// Labels ignored when comparing node groups.
    pub balancing_ignored_labels: Option<Vec<String>>,

    /// Whether daemon set pods are ignored when computing the utilization of a node.
    pub ignore_daemonsets_utilization: Option<bool>,

    pub log_verbosity: Option<i32>,

    /// Maximum time to wait for a node to be provisioned, for example `15m`.
    pub max_node_provision_time: Option<String>,

    /// Seconds pods are given to terminate gracefully before scaling down.
    pub max_pod_grace_period: Option<i32>,

    /// Pods with a priority below this threshold don't cause scale ups.
    pub pod_priority_threshold: Option<i32>,

    pub resource_limits: Option<AutoscalerResourceLimits>,

    pub scale_down: Option<AutoscalerScaleDownConfig>,

    /// Whether nodes with pods using local storage are never removed.
    pub skip_nodes_with_local_storage: Option<bool>,
}

/// Limits of the total resources of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AutoscalerResourceLimits {
    /// Number of cores.
    pub cores: Option<ResourceRange>,

    pub gpus: Option<Vec<AutoscalerResourceLimitsGpuLimit>>,

    pub max_nodes_total: Option<i32>,

    /// Memory in GiB.
    pub memory: Option<ResourceRange>,
}

/// Limit of the number of GPUs of one type.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AutoscalerResourceLimitsGpuLimit {
    pub range: Option<ResourceRange>,

    /// The GPU type, for example `nvidia.com/gpu`.
    #[serde(rename = "type")]
    pub gpu_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ResourceRange {
    pub max: Option<i32>,
    pub min: Option<i32>,
}

/// When and how the autoscaler removes nodes.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AutoscalerScaleDownConfig {
    pub delay_after_add: Option<String>,
    pub delay_after_delete: Option<String>,
    pub delay_after_failure: Option<String>,
    pub enabled: Option<bool>,

    /// How long a node has to be unneeded before it is removed.
    pub unneeded_time: Option<String>,

    /// Utilization below which a node is considered for removal, for example `0.5`.
    pub utilization_threshold: Option<String>,
}
