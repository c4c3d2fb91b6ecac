//! Kinds of resources managed through k3d.

use std::fmt;

/// A resource kind with its own k3d subcommand family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A local Kubernetes cluster.
    Cluster,
    /// A local container image registry.
    Registry,
}

impl ResourceKind {
    /// Returns the k3d subcommand for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::Registry => "registry",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
