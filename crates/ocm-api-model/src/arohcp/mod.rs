//! The Azure Red Hat OpenShift with hosted control planes API (`/api/aro_hcp`).
pub mod v1alpha1;
