use ocm_api_model::{
    List, ListBuilder, Resource,
    clustersmgmt::v1::{
        AmiOverride, Aws, AwsNodePool, CloudRegion, Cluster, ClusterState, ClusterStatus,
        NodePool, NodePoolAutoscaling, Product, Version,
    },
    json::{self, MarshalOptions},
    kind_of,
};
use rstest::rstest;

fn cluster() -> Cluster {
    Cluster::builder()
        .id("123")
        .href("/api/clusters_mgmt/v1/clusters/123")
        .name("my-cluster")
        .managed(true)
        .multi_az(false)
        .load_balancer_quota(0)
        .creation_timestamp("2024-01-02T03:04:05Z".parse::<ocm_api_model::Timestamp>().unwrap())
        .state(ClusterState::Installing)
        .aws(Aws::builder().account_id("123456789012").private_link(true))
        .region(CloudRegion::builder().link(true).id("us-east-1"))
        .status(ClusterStatus::builder().state("installing").dns_ready(false))
        .node_pools(
            ListBuilder::<NodePool>::new()
                .href("/api/clusters_mgmt/v1/clusters/123/node_pools")
                .push(
                    NodePool::builder()
                        .id("workers")
                        .autoscaling(NodePoolAutoscaling::builder().min_replica(1).max_replica(3))
                        .aws_node_pool(
                            AwsNodePool::builder()
                                .instance_type("m5.xlarge")
                                .ami_overrides(vec![
                                    AmiOverride::builder()
                                        .ami("ami-123")
                                        .product(Product::builder().link(true).id("rosa"))
                                        .region(CloudRegion::builder().link(true).id("us-east-1")),
                                ]),
                        )
                        .version(Version::builder().link(true).id("openshift-v4.16.4")),
                ),
        )
        .build()
        .unwrap()
}

#[rstest]
#[case::compact(MarshalOptions::default())]
#[case::pretty(MarshalOptions { pretty: true })]
fn marshal_then_unmarshal(#[case] options: MarshalOptions) {
    let cluster = cluster();

    let mut buffer = Vec::new();
    json::marshal_with(&cluster, &mut buffer, options).unwrap();
    let decoded: Cluster = json::unmarshal(&buffer).unwrap();

    assert_eq!(decoded, cluster);
    assert_eq!(decoded.multi_az, Some(false));
    assert_eq!(decoded.load_balancer_quota, Some(0));
    assert_eq!(decoded.fips, None);
}

#[test]
fn copy_then_build_is_identity() {
    let cluster = cluster();
    let copied = Cluster::builder().copy(&cluster).build().unwrap();

    assert_eq!(copied, cluster);
}

#[test]
fn kinds() {
    let cluster = cluster();

    assert_eq!(kind_of(Some(&cluster)), "Cluster");
    assert_eq!(kind_of::<Cluster>(None), "ClusterNil");
    assert_eq!(kind_of(cluster.region.as_ref()), "CloudRegionLink");
    assert_eq!(kind_of(cluster.version.as_ref()), "VersionNil");
    assert_eq!(
        List::kind_of(cluster.node_pools.as_ref()),
        NodePool::LIST_KIND
    );
}

#[test]
fn list_operations() {
    let cluster = cluster();
    let pools = cluster.node_pools.as_ref().unwrap();

    assert_eq!(pools.href(), Some("/api/clusters_mgmt/v1/clusters/123/node_pools"));
    assert!(!pools.is_link());
    assert_eq!(pools.iter().count(), 1);
    assert_eq!(pools.get(1), None);

    let mut ids = Vec::new();
    pools.range(|index, pool| {
        ids.push((index, pool.id.clone()));
        true
    });
    assert_eq!(ids, [(0, Some("workers".to_owned()))]);

    let owned: Vec<NodePool> = pools.clone().into_iter().collect();
    assert_eq!(owned, pools.slice());
}
