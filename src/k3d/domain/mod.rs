//! Domain model for k3d clusters and registries.
//!
//! Names, settings, and versions are validated here before any process is
//! spawned. Existence of clusters and registries is deliberately absent: it
//! is only ever observed through a live listing.

mod error;
mod listing;
mod names;
mod resource;
mod settings;
mod version;

pub use error::{
    IncompatibleVersionError, K3dDomainError, ParseListingError, ParseToolVersionError,
};
pub use listing::parse_listing;
pub use names::{ClusterName, REGISTRY_PORT, RegistryName};
pub use resource::ResourceKind;
pub use settings::{ClusterSettings, StartClusterRequest};
pub use version::{ToolVersion, VersionRequirement};
