//! Error types for k3d domain validation and parsing.

use super::ResourceKind;
use thiserror::Error;

/// Errors returned while constructing k3d domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum K3dDomainError {
    /// The name is empty after trimming.
    #[error("{kind} name must not be empty")]
    EmptyName {
        /// Kind of resource being named.
        kind: ResourceKind,
    },

    /// The name contains characters outside `[a-z0-9-]` or starts with `-`.
    #[error(
        "{kind} name '{name}' is invalid (only lowercase alphanumeric characters and '-' allowed, not as the first character)"
    )]
    InvalidName {
        /// Kind of resource being named.
        kind: ResourceKind,
        /// Offending name.
        name: String,
    },

    /// The name exceeds the DNS label limit.
    #[error("{kind} name exceeds 63 character limit: {name}")]
    NameTooLong {
        /// Kind of resource being named.
        kind: ResourceKind,
        /// Offending name.
        name: String,
    },
}

/// Error returned when no version token is found in tool output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("could not extract a MAJOR.MINOR.PATCH version from output: {0}")]
pub struct ParseToolVersionError(pub String);

/// Error returned when the detected version is outside the supported range.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported k3d version '{found}'; a release matching {required} is required")]
pub struct IncompatibleVersionError {
    /// Version reported by the tool.
    pub found: super::ToolVersion,
    /// Supported range.
    pub required: super::VersionRequirement,
}

/// Error returned when list output cannot be interpreted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unparsable {kind} listing: {reason}")]
pub struct ParseListingError {
    /// Kind of resource being listed.
    pub kind: ResourceKind,
    /// Parser diagnostic.
    pub reason: String,
}
