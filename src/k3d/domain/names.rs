//! Validated names for clusters and registries.

use super::{K3dDomainError, ResourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a cluster or registry name, matching a DNS label.
const MAX_NAME_LENGTH: usize = 63;

/// Port every managed registry listens on.
pub const REGISTRY_PORT: u16 = 5000;

/// Prefix k3d adds to the containers it creates.
const K3D_PREFIX: &str = "k3d-";

/// Suffix appended to registry names on creation.
const REGISTRY_SUFFIX: &str = "-registry";

fn validate(kind: ResourceKind, value: &str) -> Result<String, K3dDomainError> {
    let normalized = value.trim().to_owned();

    if normalized.is_empty() {
        return Err(K3dDomainError::EmptyName { kind });
    }

    let is_valid = !normalized.starts_with('-')
        && normalized.chars().all(|character| {
            character.is_ascii_lowercase() || character.is_ascii_digit() || character == '-'
        });
    if !is_valid {
        return Err(K3dDomainError::InvalidName {
            kind,
            name: normalized,
        });
    }

    if normalized.len() > MAX_NAME_LENGTH {
        return Err(K3dDomainError::NameTooLong {
            kind,
            name: normalized,
        });
    }

    Ok(normalized)
}

/// Validated cluster name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClusterName(String);

impl ClusterName {
    /// Creates a validated cluster name.
    ///
    /// The input is trimmed. Only characters in `[a-z0-9-]` are accepted and
    /// the name may not start with `-`, so it can never be mistaken for a
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`K3dDomainError`] when validation fails.
    pub fn new(value: impl Into<String>) -> Result<Self, K3dDomainError> {
        let raw: String = value.into();
        validate(ResourceKind::Cluster, &raw).map(Self)
    }

    /// Returns the cluster name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClusterName {
    type Error = K3dDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClusterName> for String {
    fn from(name: ClusterName) -> Self {
        name.0
    }
}

impl AsRef<str> for ClusterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Validated registry name.
///
/// A registry named `kyma` is created by k3d as `kyma-registry`, runs in the
/// container `k3d-kyma-registry`, and is reachable at `kyma-registry:5000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryName(String);

impl RegistryName {
    /// Creates a validated registry name.
    ///
    /// # Errors
    ///
    /// Returns [`K3dDomainError`] when validation fails.
    pub fn new(value: impl Into<String>) -> Result<Self, K3dDomainError> {
        let raw: String = value.into();
        validate(ResourceKind::Registry, &raw).map(Self)
    }

    /// Returns the name as given by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name passed to `k3d registry create`.
    #[must_use]
    pub fn registry_name(&self) -> String {
        format!("{}{REGISTRY_SUFFIX}", self.0)
    }

    /// Returns the container name k3d assigns to the registry.
    #[must_use]
    pub fn container_name(&self) -> String {
        format!("{K3D_PREFIX}{}", self.registry_name())
    }

    /// Returns the `host:port` address of the registry.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{REGISTRY_PORT}", self.registry_name())
    }

    /// Returns whether a name from `k3d registry list` refers to this
    /// registry. Both the plain and the `k3d-` prefixed form match.
    #[must_use]
    pub fn matches_listed(&self, listed: &str) -> bool {
        let registry_name = self.registry_name();
        listed == registry_name || listed.strip_prefix(K3D_PREFIX) == Some(registry_name.as_str())
    }
}

impl AsRef<str> for RegistryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RegistryName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
