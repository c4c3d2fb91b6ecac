//! Cluster lifecycle: exists, create, delete.

use super::{K3dServiceError, K3dServiceResult};
use crate::k3d::domain::{ClusterName, ResourceKind, StartClusterRequest, parse_listing};
use crate::process::{domain::ToolInvocation, ports::ToolRunner};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Cluster lifecycle orchestration service.
///
/// Existence is always re-derived from `k3d cluster list`; nothing is
/// cached between calls. Creation is not idempotent: creating a cluster
/// that already exists surfaces k3d's conflict as
/// [`K3dServiceError::CreateFailed`].
#[derive(Clone)]
pub struct ClusterLifecycleService<R>
where
    R: ToolRunner,
{
    runner: Arc<R>,
    list_timeout: Duration,
}

impl<R> ClusterLifecycleService<R>
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

    /// Returns whether a cluster named `name` is currently listed.
    ///
    /// # Errors
    ///
    /// Returns [`K3dServiceError::ListFailed`] on a non-zero exit or
    /// unparsable output, domain errors for invalid names, and other runner
    /// errors unchanged.
    pub async fn cluster_exists(&self, verbose: bool, name: &str) -> K3dServiceResult<bool> {
        let cluster_name = ClusterName::new(name)?;
        let invocation =
            ToolInvocation::new(["cluster", "list", "-o", "json"], self.list_timeout)
                .with_verbose(verbose);
        let output = self
            .runner
            .run(&invocation)
            .await
            .map_err(|err| K3dServiceError::list_failed(ResourceKind::Cluster, err))?;

        let names = parse_listing(ResourceKind::Cluster, output.text()).map_err(|err| {
            K3dServiceError::ListFailed {
                kind: ResourceKind::Cluster,
                reason: err.reason,
                output: output.text().to_owned(),
            }
        })?;
        let exists = names.iter().any(|listed| listed == cluster_name.as_str());
        debug!(cluster = %cluster_name, exists, "queried cluster existence");
        Ok(exists)
    }

    /// Creates the cluster described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`K3dServiceError::CreateFailed`] on a non-zero exit and a
    /// runner timeout when `timeout` elapses first.
    pub async fn start_cluster(
        &self,
        verbose: bool,
        timeout: Duration,
        request: &StartClusterRequest,
    ) -> K3dServiceResult<()> {
        let invocation = ToolInvocation::new(request.create_args(timeout), timeout)
            .with_verbose(verbose);
        self.runner.run(&invocation).await.map_err(|err| {
            K3dServiceError::create_failed(ResourceKind::Cluster, request.name.as_str(), err)
        })?;
        info!(
            cluster = %request.name,
            workers = request.worker_count,
            "created k3d cluster"
        );
        Ok(())
    }

    /// Deletes the cluster named `name`.
    ///
    /// No existence check is made first; whether deleting a missing cluster
    /// fails is up to k3d.
    ///
    /// # Errors
    ///
    /// Returns [`K3dServiceError::DeleteFailed`] on a non-zero exit and a
    /// runner timeout when `timeout` elapses first.
    pub async fn delete_cluster(
        &self,
        verbose: bool,
        timeout: Duration,
        name: &str,
    ) -> K3dServiceResult<()> {
        let cluster_name = ClusterName::new(name)?;
        let invocation = ToolInvocation::new(
            ["cluster", "delete", cluster_name.as_str()],
            timeout,
        )
        .with_verbose(verbose);
        self.runner.run(&invocation).await.map_err(|err| {
            K3dServiceError::delete_failed(ResourceKind::Cluster, cluster_name.as_str(), err)
        })?;
        info!(cluster = %cluster_name, "deleted k3d cluster");
        Ok(())
    }
}
