//! Lists of resources, as returned by collection endpoints and embedded in other resources.
//!
//! A [`List`] is written as an object carrying the list kind, the optional `href` of the collection
//! and the items:
//!
//! ```json
//! {"kind": "NodePoolList", "href": "/api/clusters_mgmt/v1/clusters/123/node_pools", "items": []}
//! ```
//!
//! A bare JSON array of items is accepted as well when reading.
use std::{fmt, marker::PhantomData};

use educe::Educe;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{IgnoredAny, MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
};

use crate::{
    builder::{self, BuildContext, BuildError, Buildable},
    kind::Resource,
};

/// An ordered list of `T`, which may also be a link to a collection.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default(bound()))]
pub struct List<T> {
    link: bool,
    href: Option<String>,
    items: Vec<T>,
}

impl<T> List<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Creates a link to the collection at `href`, without any items.
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            link: true,
            href: Some(href.into()),
            items: Vec::new(),
        }
    }

    pub fn is_link(&self) -> bool {
        self.link
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn set_link(&mut self, link: bool) {
        self.link = link;
    }

    pub fn set_href(&mut self, href: Option<String>) {
        self.href = href;
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, or `None` if `index` is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Calls `f` for every item in order, until it returns `false`.
    pub fn each(&self, mut f: impl FnMut(&T) -> bool) {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    /// Like [`List::each`], but also passes the index of every item.
    pub fn range(&self, mut f: impl FnMut(usize, &T) -> bool) {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }
}

impl<T: Clone> List<T> {
    /// Returns a copy of the items, which can be modified without affecting the list.
    pub fn slice(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Resource> List<T> {
    /// Returns the kind of this list, depending on whether it is a link or not.
    pub fn kind(&self) -> &'static str {
        if self.link {
            T::LIST_LINK_KIND
        } else {
            T::LIST_KIND
        }
    }

    /// Returns the kind of an optional list, which is the nil kind if there is no list.
    pub fn kind_of(list: Option<&Self>) -> &'static str {
        list.map_or(T::LIST_NIL_KIND, Self::kind)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Resource + Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.href.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("kind", self.kind())?;
        if let Some(href) = &self.href {
            map.serialize_entry("href", href)?;
        }
        map.serialize_entry("items", &self.items)?;
        map.end()
    }
}

impl<'de, T: Resource + Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ListVisitor(PhantomData))
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Resource + Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} object or an array of items", T::LIST_KIND)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(List::new(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut list = List::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "kind" => {
                    let kind = map.next_value::<Option<String>>()?;
                    list.link = kind.as_deref() == Some(T::LIST_LINK_KIND);
                }
                "href" => list.href = map.next_value()?,
                "items" => list.items = map.next_value::<Option<Vec<T>>>()?.unwrap_or_default(),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(list)
    }
}

/// Builder for [`List`]s, holding the builders of the items.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), Default(bound()), PartialEq(bound()))]
pub struct ListBuilder<T: Buildable> {
    link: bool,
    href: Option<String>,
    items: Vec<T::Builder>,
}

impl<T: Buildable> ListBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(mut self, link: bool) -> Self {
        self.link = link;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Replaces the items of the list.
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T::Builder>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one item to the list.
    pub fn push(mut self, item: impl Into<T::Builder>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Returns `true` if neither items nor `href` have been set.
    pub fn is_empty(&self) -> bool {
        self.href.is_none() && self.items.is_empty()
    }

    /// Resets the builder so that it mirrors `list`.
    pub fn copy(mut self, list: &List<T>) -> Self {
        self.clone_from(&list.to_builder());
        self
    }
}

impl<T: Buildable + Resource> ListBuilder<T> {
    /// Builds every item, failing with the first error reported by an item builder.
    pub fn build(&self) -> Result<List<T>, BuildError> {
        builder::build::<List<T>>(self, T::LIST_KIND)
    }
}

impl<T: Buildable> From<Vec<T::Builder>> for ListBuilder<T> {
    fn from(items: Vec<T::Builder>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

impl<T: Buildable> From<&List<T>> for ListBuilder<T> {
    fn from(list: &List<T>) -> Self {
        list.to_builder()
    }
}

impl<T: Buildable> Buildable for List<T> {
    type Builder = ListBuilder<T>;

    fn from_builder(
        builder: &Self::Builder,
        context: &BuildContext<'_>,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            link: builder.link,
            href: builder.href.clone(),
            items: Vec::<T>::from_builder(&builder.items, context)?,
        })
    }

    fn to_builder(&self) -> Self::Builder {
        ListBuilder {
            link: self.link,
            href: self.href.clone(),
            items: self.items.iter().map(T::to_builder).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::clustersmgmt::v1::{Cluster, NodePool, Value, Version};

    fn node_pools(ids: &[&str]) -> List<NodePool> {
        ids.iter()
            .map(|id| NodePool::builder().id(*id).build().unwrap())
            .collect()
    }

    #[test]
    fn accessors() {
        let list = node_pools(&["a", "b"]);

        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.get(1).and_then(|pool| pool.id.as_deref()), Some("b"));
        assert_eq!(list.get(2), None);
        assert_eq!(list.items().len(), 2);
        assert!(List::<NodePool>::default().is_empty());
        assert_eq!(List::<NodePool>::default().get(0), None);
    }

    #[test]
    fn slice_is_independent() {
        let list = node_pools(&["a"]);
        let mut copy = list.slice();
        copy[0].id = Some("changed".to_owned());
        copy.push(NodePool::default());

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).and_then(|pool| pool.id.as_deref()), Some("a"));
    }

    #[test]
    fn each_stops_early() {
        let list = node_pools(&["a", "b", "c"]);

        let mut seen = Vec::new();
        list.each(|pool| {
            seen.push(pool.id.clone());
            pool.id.as_deref() != Some("b")
        });
        assert_eq!(seen, [Some("a".to_owned()), Some("b".to_owned())]);

        let mut indexes = Vec::new();
        list.range(|index, _| {
            indexes.push(index);
            true
        });
        assert_eq!(indexes, [0, 1, 2]);
    }

    #[test]
    fn kinds() {
        let list = node_pools(&[]);
        assert_eq!(list.kind(), "NodePoolList");
        assert_eq!(List::kind_of(Some(&list)), "NodePoolList");
        assert_eq!(List::<NodePool>::kind_of(None), "NodePoolListNil");

        let link = List::<NodePool>::link("/api/clusters_mgmt/v1/clusters/123/node_pools");
        assert!(link.is_link());
        assert_eq!(link.kind(), "NodePoolListLink");
    }

    #[test]
    fn serialize() {
        let mut list = node_pools(&["a"]);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({"kind": "NodePoolList", "items": [{"kind": "NodePool", "id": "a"}]})
        );

        list.set_link(true);
        list.set_href(Some("/node_pools".to_owned()));
        list.set_items(Vec::new());
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({"kind": "NodePoolListLink", "href": "/node_pools", "items": []})
        );
    }

    #[rstest]
    #[case::object(indoc! {r#"
        {
          "kind": "VersionList",
          "page": 1,
          "size": 2,
          "total": 2,
          "items": [
            {"kind": "Version", "id": "openshift-v4.16.0"},
            {"kind": "Version", "id": "openshift-v4.16.1"}
          ]
        }
    "#}, false)]
    #[case::bare_array(indoc! {r#"
        [
          {"kind": "Version", "id": "openshift-v4.16.0"},
          {"id": "openshift-v4.16.1"}
        ]
    "#}, false)]
    #[case::link(indoc! {r#"
        {
          "kind": "VersionListLink",
          "href": "/versions",
          "items": [
            {"kind": "Version", "id": "openshift-v4.16.0"},
            {"kind": "Version", "id": "openshift-v4.16.1"}
          ]
        }
    "#}, true)]
    fn deserialize(#[case] input: &str, #[case] link: bool) {
        let list: List<Version> = serde_json::from_str(input).unwrap();

        assert_eq!(list.is_link(), link);
        let ids = list
            .iter()
            .map(|version| version.id.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(ids, [Some("openshift-v4.16.0"), Some("openshift-v4.16.1")]);
    }

    #[test]
    fn build() {
        let builder = ListBuilder::<Version>::new()
            .href("/versions")
            .push(Version::builder().id("a"))
            .push(Version::builder().id("b"));
        assert!(!builder.is_empty());
        assert!(ListBuilder::<Version>::new().link(true).is_empty());

        let list = builder.build().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.href(), Some("/versions"));
        assert_eq!(ListBuilder::new().copy(&list), builder);
        assert_eq!(ListBuilder::from(&list).build().unwrap(), list);
    }

    #[test]
    fn build_fails_on_first_item() {
        let grace_period = || Value::builder().unit("minutes").value(f64::NAN);
        let err = ListBuilder::<Cluster>::new()
            .items([
                Cluster::builder().id("a"),
                Cluster::builder().node_drain_grace_period(grace_period()),
                Cluster::builder().node_drain_grace_period(grace_period()),
            ])
            .build()
            .unwrap_err();
        assert_eq!(err.path(), "ClusterList.1.node_drain_grace_period.value");
    }

    #[test]
    fn bare_link_items_build() {
        let list = ListBuilder::<Version>::new()
            .items([Version::builder().link(true)])
            .build()
            .unwrap();
        assert!(list.get(0).is_some_and(|version| version.link));
    }
}
