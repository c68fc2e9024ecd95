//! Version `v1alpha1` of the ARO-HCP API.
//!
//! Attributes shared with the clusters management API use the types of
//! [`clustersmgmt::v1`](crate::clustersmgmt::v1).
mod azure;
mod cluster;
mod managed_identities;

pub use azure::*;
pub use cluster::*;
pub use managed_identities::*;
