//! Configuration for driving the k3d binary.

use crate::k3d::domain::VersionRequirement;
use crate::process::{adapters::ProcessToolRunner, domain::SearchPath};
use std::time::Duration;

/// Binary name resolved in the search path by default.
pub const DEFAULT_BINARY: &str = "k3d";

/// Deadline for read-only calls such as `list` and `version`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for locating and checking the k3d binary.
///
/// The search path is the only environment-derived value. It is captured
/// when the configuration is built and never re-read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct K3dConfig {
    binary: String,
    search_path: SearchPath,
    default_timeout: Duration,
    version_requirement: VersionRequirement,
}

impl K3dConfig {
    /// Creates a configuration searching `search_path` with default values
    /// for everything else.
    #[must_use]
    pub fn new(search_path: SearchPath) -> Self {
        Self {
            binary: DEFAULT_BINARY.to_owned(),
            search_path,
            default_timeout: DEFAULT_TIMEOUT,
            version_requirement: VersionRequirement::default(),
        }
    }

    /// Creates a configuration searching the current `PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SearchPath::from_env())
    }

    /// Overrides the binary name or path.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Replaces the search path.
    #[must_use]
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Overrides the deadline for read-only calls.
    #[must_use]
    pub const fn with_default_timeout(mut self, default_timeout: Duration) -> Self {
        self.default_timeout = default_timeout;
        self
    }

    /// Overrides the supported version range.
    #[must_use]
    pub const fn with_version_requirement(mut self, requirement: VersionRequirement) -> Self {
        self.version_requirement = requirement;
        self
    }

    /// Returns the binary name or path.
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Returns the search path.
    #[must_use]
    pub const fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Returns the deadline for read-only calls.
    #[must_use]
    pub const fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Returns the supported version range.
    #[must_use]
    pub const fn version_requirement(&self) -> VersionRequirement {
        self.version_requirement
    }

    /// Builds a process runner for this configuration.
    #[must_use]
    pub fn runner(&self) -> ProcessToolRunner {
        ProcessToolRunner::new(self.binary.clone(), self.search_path.clone())
    }
}
