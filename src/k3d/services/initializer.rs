//! One-time readiness check for the external tool.

use super::{K3dServiceResult, VersionGate};
use crate::k3d::domain::ToolVersion;
use crate::process::ports::ToolRunner;
use std::sync::Arc;
use tracing::{debug, info};

/// Verifies that k3d is installed and compatible.
///
/// Lifecycle operations should not be attempted after a failed
/// [`Initializer::initialize`].
#[derive(Clone)]
pub struct Initializer<R>
where
    R: ToolRunner,
{
    runner: Arc<R>,
    gate: VersionGate<R>,
}

impl<R> Initializer<R>
where
    R: ToolRunner,
{
    /// Creates an initializer sharing `runner` with `gate`.
    #[must_use]
    pub const fn new(runner: Arc<R>, gate: VersionGate<R>) -> Self {
        Self { runner, gate }
    }

    /// Resolves the binary and runs the version gate.
    ///
    /// Safe to call repeatedly; nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns a runner `NotFound` error when the binary is missing, without
    /// spawning anything, and version gate errors unchanged.
    pub async fn initialize(&self, verbose: bool) -> K3dServiceResult<ToolVersion> {
        let binary = self.runner.resolve_binary()?;
        debug!(%binary, "resolved k3d binary");

        let version = self.gate.check(verbose).await?;
        info!(%binary, %version, "k3d is ready");
        Ok(version)
    }
}
