//! Typed values, builders and the JSON wire format of the OCM clusters management API.
//!
//! Every API type is a plain struct whose attributes are [`Option`]s: an attribute which was never
//! set is `None`, an attribute explicitly set to a zero value (`""`, `false`, `0`) is `Some`.
//! Values are created either by deserializing them with the [`json`] functions or through the
//! builder derived for every type (see [`builder`]).
//!
//! ```
//! use ocm_api_model::{clustersmgmt::v1::{AmiOverride, CloudRegion}, json};
//!
//! let ami_override = AmiOverride::builder()
//!     .ami("ami-123")
//!     .region(CloudRegion::builder().link(true).id("us-east-1"))
//!     .build()
//!     .unwrap();
//!
//! let encoded = json::to_string(&ami_override).unwrap();
//! let decoded: AmiOverride = json::unmarshal(&encoded).unwrap();
//!
//! assert_eq!(decoded.ami.as_deref(), Some("ami-123"));
//! assert_eq!(decoded.href, None);
//! ```
//!
//! ## Crate Features
//!
//! - `default` enables the ARO-HCP API types.
//! - `full` enables all available features.
//! - `arohcp` enables the [`arohcp::v1alpha1`] types.

// The derive macros refer to this crate by its external name, also from within the crate itself.
extern crate self as ocm_api_model;

pub mod builder;
pub mod clustersmgmt;
pub mod json;
pub mod kind;
pub mod list;
pub mod number;

#[cfg(feature = "arohcp")]
pub mod arohcp;

mod enums;

pub use builder::{BuildError, Buildable, Builder};
pub use jiff::Timestamp;
pub use kind::{Resource, kind_of};
pub use list::{List, ListBuilder};
