//! Version 1 of the clusters management API.
mod autoscaler;
mod aws;
mod cloud_provider;
mod cluster;
mod node_pool;
mod product;
mod status;
mod subscription;
mod value;
mod version;

pub use autoscaler::*;
pub use aws::*;
pub use cloud_provider::*;
pub use cluster::*;
pub use node_pool::*;
pub use product::*;
pub use status::*;
pub use subscription::*;
pub use value::*;
pub use version::*;
