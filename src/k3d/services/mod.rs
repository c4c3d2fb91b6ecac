//! Application services for k3d readiness and resource lifecycles.
//!
//! Every service composes a [`ToolInvocation`](crate::process::domain::ToolInvocation),
//! hands it to a [`ToolRunner`](crate::process::ports::ToolRunner), and
//! interprets the result. Services hold no mutable state, so a failed call
//! never affects the next one.

mod cluster;
mod error;
mod initializer;
mod registry;
mod version_gate;


pub use cluster::ClusterLifecycleService;
pub use error::{K3dServiceError, K3dServiceResult};
pub use initializer::Initializer;
pub use registry::RegistryLifecycleService;
pub use version_gate::VersionGate;
