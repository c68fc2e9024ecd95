//! Reading and writing API values in their JSON wire format.
//!
//! Only attributes which are present are written. Unknown attributes are ignored when reading, so
//! that newer servers can be talked to by older clients.
use std::io::{Read, Write};

use serde::{Serialize, de::DeserializeOwned};
use snafu::{ResultExt, Snafu};
use tracing::trace;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents every error which can be encountered while reading or writing JSON.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to serialize JSON"))]
    SerializeJson { source: serde_json::Error },

    #[snafu(display("failed to deserialize JSON"))]
    DeserializeJson { source: serde_json::Error },
}

impl Error {
    /// The line of the input at which reading failed, starting at 1.
    ///
    /// Returns `None` if the error is not tied to a position, for example when reading from a
    /// [`serde_json::Value`].
    pub fn line(&self) -> Option<usize> {
        let (Self::SerializeJson { source } | Self::DeserializeJson { source }) = self;
        (source.line() > 0).then_some(source.line())
    }

    /// The column of the input at which reading failed, starting at 1.
    pub fn column(&self) -> Option<usize> {
        let (Self::SerializeJson { source } | Self::DeserializeJson { source }) = self;
        (source.line() > 0).then_some(source.column())
    }
}

/// Provides configurable options when writing JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarshalOptions {
    /// Indents the output, putting every attribute on its own line.
    pub pretty: bool,
}

/// Writes `value` as compact JSON to `writer`.
pub fn marshal<T, W>(value: &T, writer: W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    marshal_with(value, writer, MarshalOptions::default())
}

/// Writes `value` as JSON to `writer` using the provided [`MarshalOptions`].
pub fn marshal_with<T, W>(value: &T, writer: W, options: MarshalOptions) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    trace!(
        value_type = std::any::type_name::<T>(),
        pretty = options.pretty,
        "writing JSON"
    );
    if options.pretty {
        serde_json::to_writer_pretty(writer, value).context(SerializeJsonSnafu)
    } else {
        serde_json::to_writer(writer, value).context(SerializeJsonSnafu)
    }
}

/// Returns `value` as a compact JSON string.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    trace!(value_type = std::any::type_name::<T>(), "writing JSON");
    serde_json::to_string(value).context(SerializeJsonSnafu)
}

/// Returns `value` as compact JSON bytes.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    marshal(value, &mut buffer)?;
    Ok(buffer)
}

/// Reads a `T` from a JSON document, given either as string or as bytes.
pub fn unmarshal<T: DeserializeOwned>(input: impl AsRef<[u8]>) -> Result<T> {
    let input = input.as_ref();
    trace!(
        value_type = std::any::type_name::<T>(),
        len = input.len(),
        "reading JSON"
    );
    serde_json::from_slice(input).context(DeserializeJsonSnafu)
}

/// Reads a `T` from a JSON document provided by `reader`.
pub fn unmarshal_from_reader<T, R>(reader: R) -> Result<T>
where
    T: DeserializeOwned,
    R: Read,
{
    trace!(value_type = std::any::type_name::<T>(), "reading JSON");
    serde_json::from_reader(reader).context(DeserializeJsonSnafu)
}

/// Reads a `T` from an already parsed JSON tree.
pub fn read<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).context(DeserializeJsonSnafu)
}

/// Writes `value` into a JSON tree.
pub fn write<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).context(SerializeJsonSnafu)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use indoc::indoc;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::clustersmgmt::v1::{Cluster, ClusterState, NodePool};

    #[test]
    fn marshal_skips_absent_attributes() {
        let cluster = Cluster::builder()
            .id("123")
            .name("")
            .managed(false)
            .load_balancer_quota(0)
            .build()
            .unwrap();

        assert_eq!(
            to_string(&cluster).unwrap(),
            r#"{"kind":"Cluster","id":"123","load_balancer_quota":0,"managed":false,"name":""}"#
        );
    }

    #[test]
    fn marshal_pretty() {
        let cluster = Cluster::builder().id("123").build().unwrap();

        let mut buffer = Vec::new();
        marshal_with(&cluster, &mut buffer, MarshalOptions { pretty: true }).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            indoc! {r#"
                {
                  "kind": "Cluster",
                  "id": "123"
                }"#}
        );
        assert_eq!(to_vec(&cluster).unwrap(), br#"{"kind":"Cluster","id":"123"}"#);
    }

    #[test]
    fn map_keys_are_sorted() {
        let cluster = Cluster::builder()
            .properties(BTreeMap::from([
                ("zone".to_owned(), "b".to_owned()),
                ("owner".to_owned(), "me".to_owned()),
                ("arch".to_owned(), "arm64".to_owned()),
            ]))
            .build()
            .unwrap();

        assert_eq!(
            to_string(&cluster).unwrap(),
            r#"{"kind":"Cluster","properties":{"arch":"arm64","owner":"me","zone":"b"}}"#
        );
    }

    #[test]
    fn unmarshal_ignores_unknown_attributes() {
        let cluster: Cluster = unmarshal(indoc! {r#"
            {
              "kind": "Cluster",
              "id": "123",
              "brand_new_attribute": {"nested": [1, 2, 3]},
              "name": "my-cluster"
            }
        "#})
        .unwrap();

        assert_eq!(cluster.id.as_deref(), Some("123"));
        assert_eq!(cluster.name.as_deref(), Some("my-cluster"));
    }

    #[test]
    fn unknown_enum_values_survive() {
        let cluster: Cluster = unmarshal(r#"{"state":"defrosting"}"#).unwrap();
        assert_eq!(
            cluster.state,
            Some(ClusterState::Other("defrosting".to_owned()))
        );
        assert_eq!(
            to_string(&cluster).unwrap(),
            r#"{"kind":"Cluster","state":"defrosting"}"#
        );
    }

    #[rstest]
    #[case::invalid_timestamp(r#"{"creation_timestamp":"yesterday"}"#, 1)]
    #[case::wrong_type("{\n  \"multi_az\": \"yes\"\n}", 2)]
    #[case::truncated(r#"{"id":"#, 1)]
    fn unmarshal_errors(#[case] input: &str, #[case] line: usize) {
        let err = unmarshal::<Cluster>(input).unwrap_err();

        assert!(matches!(err, Error::DeserializeJson { .. }));
        assert_eq!(err.line(), Some(line));
        assert!(err.column().is_some());
    }

    #[test]
    fn invalid_timestamp_names_the_problem() {
        let err = unmarshal::<Cluster>(r#"{"creation_timestamp":"yesterday"}"#).unwrap_err();
        let Error::DeserializeJson { source } = err else {
            panic!("expected a deserialization error, got {err:?}");
        };
        assert!(source.is_data());
    }

    #[test]
    fn unmarshal_from_reader_and_tree() {
        let input = br#"{"kind":"NodePool","id":"workers","replicas":3}"#;

        let from_reader: NodePool = unmarshal_from_reader(&input[..]).unwrap();
        let tree = write(&from_reader).unwrap();
        assert_eq!(
            tree,
            json!({"kind": "NodePool", "id": "workers", "replicas": 3})
        );

        let from_tree: NodePool = read(tree).unwrap();
        assert_eq!(from_tree, from_reader);

        let err = read::<NodePool>(json!({"replicas": "three"})).unwrap_err();
        assert_eq!(err.line(), None);
    }
}
