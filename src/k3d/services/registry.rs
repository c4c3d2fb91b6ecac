//! Registry lifecycle: exists, create, delete.

use super::{K3dServiceError, K3dServiceResult};
use crate::k3d::domain::{REGISTRY_PORT, RegistryName, ResourceKind, parse_listing};
use crate::process::{domain::ToolInvocation, ports::ToolRunner};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Registry lifecycle orchestration service.
#[derive(Clone)]
pub struct RegistryLifecycleService<R>
where
    R: ToolRunner,
{
    runner: Arc<R>,
    list_timeout: Duration,
}

impl<R> RegistryLifecycleService<R>
where
    R: ToolRunner,
{
    /// Creates a service; `list_timeout` bounds existence queries.
    #[must_use]
    pub const fn new(runner: Arc<R>, list_timeout: Duration) -> Self {
        Self {
            runner,
            list_timeout,
        }
    }

    /// Returns whether the registry for `name` is currently listed.
    ///
    /// # Errors
    ///
    /// Returns [`K3dServiceError::ListFailed`] on a non-zero exit or
    /// unparsable output, domain errors for invalid names, and other runner
    /// errors unchanged.
    pub async fn registry_exists(&self, verbose: bool, name: &str) -> K3dServiceResult<bool> {
        let registry_name = RegistryName::new(name)?;
        let invocation =
            ToolInvocation::new(["registry", "list", "-o", "json"], self.list_timeout)
                .with_verbose(verbose);
        let output = self
            .runner
            .run(&invocation)
            .await
            .map_err(|err| K3dServiceError::list_failed(ResourceKind::Registry, err))?;

        let names = parse_listing(ResourceKind::Registry, output.text()).map_err(|err| {
            K3dServiceError::ListFailed {
                kind: ResourceKind::Registry,
                reason: err.reason,
                output: output.text().to_owned(),
            }
        })?;
        let exists = names
            .iter()
            .any(|listed| registry_name.matches_listed(listed));
        debug!(registry = %registry_name, exists, "queried registry existence");
        Ok(exists)
    }

    /// Creates the registry for `name` and returns its `host:port` address.
    ///
    /// The address is derived from the name (`<name>-registry:5000`) rather
    /// than parsed from k3d's output.
    ///
    /// # Errors
    ///
    /// Returns [`K3dServiceError::CreateFailed`] on a non-zero exit and a
    /// runner timeout when `timeout` elapses first.
    pub async fn create_registry(
        &self,
        verbose: bool,
        timeout: Duration,
        name: &str,
    ) -> K3dServiceResult<String> {
        let registry_name = RegistryName::new(name)?;
        let invocation = ToolInvocation::new(
            [
                "registry".to_owned(),
                "create".to_owned(),
                registry_name.registry_name(),
                "--port".to_owned(),
                REGISTRY_PORT.to_string(),
            ],
            timeout,
        )
        .with_verbose(verbose);
        self.runner.run(&invocation).await.map_err(|err| {
            K3dServiceError::create_failed(ResourceKind::Registry, registry_name.as_str(), err)
        })?;

        let address = registry_name.address();
        info!(registry = %registry_name, %address, "created k3d registry");
        Ok(address)
    }

    /// Deletes the registry for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`K3dServiceError::DeleteFailed`] on a non-zero exit and a
    /// runner timeout when `timeout` elapses first.
    pub async fn delete_registry(
        &self,
        verbose: bool,
        timeout: Duration,
        name: &str,
    ) -> K3dServiceResult<()> {
        let registry_name = RegistryName::new(name)?;
        let invocation = ToolInvocation::new(
            [
                "registry".to_owned(),
                "delete".to_owned(),
                registry_name.container_name(),
            ],
            timeout,
        )
        .with_verbose(verbose);
        self.runner.run(&invocation).await.map_err(|err| {
            K3dServiceError::delete_failed(ResourceKind::Registry, registry_name.as_str(), err)
        })?;
        info!(registry = %registry_name, "deleted k3d registry");
        Ok(())
    }
}
