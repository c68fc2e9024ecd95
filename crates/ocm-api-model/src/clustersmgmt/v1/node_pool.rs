use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CloudRegion, Product, Version};
use crate::{builder::Builder, kind};

/// A group of worker nodes of a cluster with a hosted control plane, sharing instance type and
/// settings.
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

    /// Whether unhealthy nodes are replaced automatically.
    pub auto_repair: Option<bool>,

    /// Autoscaling of the pool. Mutually exclusive with `replicas`.
    pub autoscaling: Option<NodePoolAutoscaling>,

    pub availability_zone: Option<String>,

    /// AWS specific settings of the pool.
    pub aws_node_pool: Option<AwsNodePool>,

    /// Labels applied to the nodes of the pool.
    pub labels: Option<BTreeMap<String, String>>,

    /// Fixed number of nodes. Mutually exclusive with `autoscaling`.
    pub replicas: Option<i32>,

    pub status: Option<NodePoolStatus>,

    /// Subnet the nodes are placed in.
    pub subnet: Option<String>,

    pub taints: Option<Vec<Taint>>,

    /// Names of the tuning configurations applied to the nodes.
    pub tuning_configs: Option<Vec<String>>,

    /// Link to the version of OpenShift running on the nodes.
    pub version: Option<Version>,
}

/// Bounds the autoscaler keeps the number of nodes of a pool within.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "NodePoolAutoscaling")]
pub struct NodePoolAutoscaling {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<NodePoolAutoscaling, _>",
        deserialize_with = "kind::deserialize::<NodePoolAutoscaling, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,
    pub max_replica: Option<i32>,
    pub min_replica: Option<i32>,
}

/// Current state of a node pool.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "NodePoolStatus")]
pub struct NodePoolStatus {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<NodePoolStatus, _>",
        deserialize_with = "kind::deserialize::<NodePoolStatus, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Number of nodes which are currently running.
    pub current_replicas: Option<i32>,

    /// Details about the state, for example why the pool is not ready.
    pub message: Option<String>,
}

/// AWS specific settings of a node pool.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "AwsNodePool")]
pub struct AwsNodePool {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<AwsNodePool, _>",
        deserialize_with = "kind::deserialize::<AwsNodePool, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Security groups attached to the nodes in addition to the default ones.
    pub additional_security_group_ids: Option<Vec<String>>,

    /// Machine images replacing the default image of a product in a region.
    pub ami_overrides: Option<Vec<AmiOverride>>,

    /// Name of the instance profile attached to the nodes.
    pub instance_profile: Option<String>,

    /// EC2 instance type of the nodes, for example `m5.xlarge`.
    pub instance_type: Option<String>,

    pub root_volume: Option<AwsVolume>,

    /// Tags applied to the AWS resources of the pool.
    pub tags: Option<BTreeMap<String, String>>,
}

/// A machine image used instead of the default one for a product in a region.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(kind = "AmiOverride")]
pub struct AmiOverride {
    #[serde(
        rename = "kind",
        default,
        serialize_with = "kind::serialize::<AmiOverride, _>",
        deserialize_with = "kind::deserialize::<AmiOverride, _>"
    )]
    pub link: bool,
    pub id: Option<String>,
    pub href: Option<String>,

    /// Identifier of the image, for example `ami-0123456789abcdef0`.
    pub ami: Option<String>,

    /// Link to the product the image is used for.
    pub product: Option<Product>,

    /// Link to the region the image is used in.
    pub region: Option<CloudRegion>,
}

/// Disk attached to a node.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AwsVolume {
    pub iops: Option<i32>,

    /// Size in GiB.
    pub size: Option<i32>,
}

/// A Kubernetes taint applied to the nodes of a pool.
#[serde_with::skip_serializing_none]
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Taint {
    /// One of `NoSchedule`, `PreferNoSchedule` or `NoExecute`.
    pub effect: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use indoc::indoc;
    use serde_json::json;

    use super::*;
    use crate::json;

    #[test]
    fn ami_override() {
        let ami_override = AmiOverride::builder()
            .ami("ami-123")
            .region(CloudRegion::builder().link(true).id("us-east-1"))
            .build()
            .unwrap();

        let encoded = json::to_string(&ami_override).unwrap();
        assert_eq!(
            encoded,
            r#"{"kind":"AmiOverride","ami":"ami-123","region":{"kind":"CloudRegionLink","id":"us-east-1"}}"#
        );

        let decoded: AmiOverride = json::unmarshal(&encoded).unwrap();
        assert_eq!(decoded.ami.as_deref(), Some("ami-123"));
        assert_eq!(decoded.href, None);
        assert_eq!(decoded.product, None);
        assert_eq!(decoded, ami_override);
    }

    #[test]
    fn node_pool() {
        let pool: NodePool = json::unmarshal(indoc! {r#"
            {
              "kind": "NodePool",
              "id": "workers",
              "href": "/api/clusters_mgmt/v1/clusters/123/node_pools/workers",
              "auto_repair": true,
              "aws_node_pool": {
                "kind": "AwsNodePool",
                "instance_type": "m5.xlarge",
                "root_volume": {"size": 300},
                "tags": {"owner": "me"},
                "ami_overrides": [{"kind": "AmiOverride", "ami": "ami-123"}]
              },
              "labels": {"role": "worker"},
              "replicas": 3,
              "status": {"kind": "NodePoolStatus", "current_replicas": 1, "message": "scaling up"},
              "subnet": "subnet-1",
              "taints": [{"effect": "NoSchedule", "key": "dedicated", "value": "gpu"}],
              "version": {"kind": "VersionLink", "id": "openshift-v4.16.4"}
            }
        "#})
        .unwrap();

        let aws = pool.aws_node_pool.as_ref().unwrap();
        assert_eq!(aws.instance_type.as_deref(), Some("m5.xlarge"));
        assert_eq!(aws.root_volume.as_ref().and_then(|volume| volume.iops), None);
        assert_eq!(
            pool.labels,
            Some(BTreeMap::from([("role".to_owned(), "worker".to_owned())]))
        );
        assert_eq!(
            pool.status.as_ref().and_then(|status| status.current_replicas),
            Some(1)
        );
        assert!(pool.version.as_ref().is_some_and(|version| version.link));
        assert_eq!(pool.autoscaling, None);

        let rebuilt = pool.to_builder().replicas(5).build().unwrap();
        assert_eq!(rebuilt.replicas, Some(5));
        assert_eq!(rebuilt.taints, pool.taints);
    }

    #[test]
    fn taints_keep_their_order() {
        let pool = NodePool::builder()
            .taints(vec![
                Taint::builder().key("b").effect("NoExecute"),
                Taint::builder().key("a").effect("NoSchedule"),
            ])
            .build()
            .unwrap();

        assert_eq!(
            json::write(&pool).unwrap(),
            json!({
                "kind": "NodePool",
                "taints": [
                    {"effect": "NoExecute", "key": "b"},
                    {"effect": "NoSchedule", "key": "a"}
                ]
            })
        );
    }
}
