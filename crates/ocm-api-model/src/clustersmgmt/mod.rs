//! The clusters management API (`/api/clusters_mgmt`).
pub mod v1;
