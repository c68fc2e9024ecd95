//! Kind discriminators of top-level resources.
//!
//! Every top-level resource is written to JSON with a leading `"kind"` attribute, telling a full
//! object (`Cluster`) apart from a link to it (`ClusterLink`). When a resource is absent
//! altogether its nil kind (`ClusterNil`) is used, see [`kind_of`].
use serde::{Deserialize, Deserializer, Serializer};
use tracing::warn;

/// A top-level API resource: an object with an identity (`id` and `href`) which can be
/// represented either in full or as a link.
///
/// This is implemented by `#[derive(Builder)]` for types annotated with `#[builder(kind = "...")]`.
pub trait Resource {
    /// The kind of full objects, e.g. `Cluster`.
    const KIND: &'static str;

    /// The kind of links to objects, e.g. `ClusterLink`.
    const LINK_KIND: &'static str;

    /// The kind of absent objects, e.g. `ClusterNil`.
    const NIL_KIND: &'static str;

    /// The kind of lists of objects, e.g. `ClusterList`.
    const LIST_KIND: &'static str;

    /// The kind of links to lists of objects, e.g. `ClusterListLink`.
    const LIST_LINK_KIND: &'static str;

    /// The kind of absent lists of objects, e.g. `ClusterListNil`.
    const LIST_NIL_KIND: &'static str;

    /// Returns `true` if this is a link, which only carries `id` and `href`.
    fn is_link(&self) -> bool;

    fn id(&self) -> Option<&str>;

    fn href(&self) -> Option<&str>;

    /// Returns the kind of this object, depending on whether it is a link or not.
    fn kind(&self) -> &'static str {
        if self.is_link() {
            Self::LINK_KIND
        } else {
            Self::KIND
        }
    }
}

/// Returns the kind of an optional object, which is the nil kind if there is no object.
///
/// ```
/// use ocm_api_model::{clustersmgmt::v1::Cluster, kind_of};
///
/// assert_eq!(kind_of::<Cluster>(None), "ClusterNil");
/// assert_eq!(kind_of(Some(&Cluster::default())), "Cluster");
/// ```
pub fn kind_of<T: Resource>(object: Option<&T>) -> &'static str {
    object.map_or(T::NIL_KIND, Resource::kind)
}

/// Serializes the link flag of `T` as its `"kind"` attribute.
///
/// Use this with `#[serde(rename = "kind", serialize_with = "kind::serialize::<T, _>")]`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<T, S>(link: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Resource,
    S: Serializer,
{
    serializer.serialize_str(if *link { T::LINK_KIND } else { T::KIND })
}

/// Deserializes the link flag of `T` from its `"kind"` attribute.
///
/// Unexpected kinds are tolerated and treated as a full object.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<bool, D::Error>
where
    T: Resource,
    D: Deserializer<'de>,
{
    let kind = Option::<String>::deserialize(deserializer)?;
    Ok(match kind.as_deref() {
        Some(kind) if kind == T::LINK_KIND => true,
        Some(kind) if kind == T::KIND => false,
        None => false,
        Some(kind) => {
            warn!(
                kind,
                expected = T::KIND,
                "unexpected kind, treating object as a full object"
            );
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::clustersmgmt::v1::{Cluster, NodePool, Version};

    #[test]
    fn kind_constants() {
        assert_eq!(Cluster::KIND, "Cluster");
        assert_eq!(Cluster::LINK_KIND, "ClusterLink");
        assert_eq!(Cluster::NIL_KIND, "ClusterNil");
        assert_eq!(Cluster::LIST_KIND, "ClusterList");
        assert_eq!(Cluster::LIST_LINK_KIND, "ClusterListLink");
        assert_eq!(Cluster::LIST_NIL_KIND, "ClusterListNil");
        assert_eq!(NodePool::KIND, "NodePool");
    }

    #[test]
    fn kind_follows_link_flag() {
        let link = Version::builder()
            .link(true)
            .id("openshift-v4.16.0")
            .build()
            .unwrap();
        assert_eq!(link.kind(), "VersionLink");
        assert_eq!(kind_of(Some(&link)), "VersionLink");
        assert_eq!(Version::default().kind(), "Version");
        assert_eq!(kind_of::<Version>(None), "VersionNil");
    }

    #[rstest]
    #[case(r#"{"kind":"ClusterLink","id":"123"}"#, true)]
    #[case(r#"{"kind":"Cluster","id":"123"}"#, false)]
    #[case(r#"{"id":"123"}"#, false)]
    #[case(r#"{"kind":null,"id":"123"}"#, false)]
    #[case(r#"{"kind":"SomethingElse","id":"123"}"#, false)]
    fn link_flag_from_kind(#[case] input: &str, #[case] link: bool) {
        let cluster: Cluster = serde_json::from_str(input).unwrap();
        assert_eq!(cluster.link, link);
        assert_eq!(cluster.id.as_deref(), Some("123"));
    }

    #[test]
    fn kind_is_written_first() {
        let cluster = Cluster::builder()
            .link(true)
            .id("123")
            .href("/api/clusters_mgmt/v1/clusters/123")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&cluster).unwrap(),
            r#"{"kind":"ClusterLink","id":"123","href":"/api/clusters_mgmt/v1/clusters/123"}"#
        );
    }
}
