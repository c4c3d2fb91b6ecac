//! Version compatibility gate for the installed k3d.

use super::{K3dServiceError, K3dServiceResult};
use crate::k3d::domain::{ToolVersion, VersionRequirement};
use crate::process::{domain::ToolInvocation, ports::ToolRunner};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Checks the installed tool against a [`VersionRequirement`].
#[derive(Clone)]
pub struct VersionGate<R>
where
    R: ToolRunner,
{
    runner: Arc<R>,
    requirement: VersionRequirement,
    timeout: Duration,
}

impl<R> VersionGate<R>
where
    R: ToolRunner,
{
    /// Creates a gate running `k3d version` with the given deadline.
    #[must_use]
    pub const fn new(runner: Arc<R>, requirement: VersionRequirement, timeout: Duration) -> Self {
        Self {
            runner,
            requirement,
            timeout,
        }
    }

    /// Returns the enforced requirement.
    #[must_use]
    pub const fn requirement(&self) -> VersionRequirement {
        self.requirement
    }

    /// Runs `k3d version` and checks the reported version.
    ///
    /// # Errors
    ///
    /// Returns [`K3dServiceError::VersionParse`] when the output carries no
    /// version, [`K3dServiceError::IncompatibleVersion`] when it is out of
    /// range, and runner errors unchanged.
    pub async fn check(&self, verbose: bool) -> K3dServiceResult<ToolVersion> {
        let invocation = ToolInvocation::new(["version"], self.timeout).with_verbose(verbose);
        let output = self.runner.run(&invocation).await?;
        let version = ToolVersion::parse_first(output.text())?;
        debug!(%version, requirement = %self.requirement, "detected k3d version");

        self.requirement.check(version).map_err(|err| {
            warn!(%version, requirement = %self.requirement, "unsupported k3d version");
            K3dServiceError::from(err)
        })?;
        Ok(version)
    }
}
