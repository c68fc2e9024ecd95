use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod builder;

/// Derives a builder for an API value type. See `ocm_api_model::builder` for the traits the
/// generated code implements.
///
/// Every field except the link flag of a top-level resource must be an [`Option`]. The derive
/// generates:
///
/// - a `<Type>Builder` struct mirroring the fields, with one chained setter per field,
/// - `copy`, `is_empty` and `build` on the builder,
/// - `builder`, `to_builder` and `is_empty` on the value type,
/// - an implementation of `ocm_api_model::builder::Buildable` tying both together.
///
/// Top-level resources are marked with `#[builder(kind = "Name")]`. They must declare the fields
/// `link: bool`, `id: Option<String>` and `href: Option<String>` and additionally receive an
/// implementation of `ocm_api_model::kind::Resource` with the kind discriminators derived from
/// `Name` (`Name`, `NameLink`, `NameNil`, `NameList`, `NameListLink` and `NameListNil`).
///
/// ```ignore
/// #[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
/// #[builder(kind = "CloudProvider")]
/// pub struct CloudProvider {
///     #[serde(rename = "kind", default, serialize_with = "...", deserialize_with = "...")]
///     pub link: bool,
///     pub id: Option<String>,
///     pub href: Option<String>,
///     pub name: Option<String>,
/// }
/// ```
#[proc_macro_derive(Builder, attributes(builder))]
pub fn derive_builder(input: TokenStream) -> TokenStream {
    builder::derive(parse_macro_input!(input as DeriveInput)).into()
}
