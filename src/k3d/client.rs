//! Single entry point bundling readiness and lifecycle operations.

use super::domain::{StartClusterRequest, ToolVersion};
use super::services::{
    ClusterLifecycleService, Initializer, K3dServiceResult, RegistryLifecycleService, VersionGate,
};
use crate::config::K3dConfig;
use crate::process::{adapters::ProcessToolRunner, ports::ToolRunner};
use std::sync::Arc;
use std::time::Duration;

/// k3d client sharing one runner across all operations.
///
/// Call [`K3d::initialize`] once before anything else and stop if it
/// fails. Every other operation spawns exactly one k3d process.
#[derive(Clone)]
pub struct K3d<R>
where
    R: ToolRunner,
{
    initializer: Initializer<R>,
    clusters: ClusterLifecycleService<R>,
    registries: RegistryLifecycleService<R>,
}

impl K3d<ProcessToolRunner> {
    /// Creates a client running the binary described by `config`.
    #[must_use]
    pub fn from_config(config: &K3dConfig) -> Self {
        Self::with_runner(Arc::new(config.runner()), config)
    }
}

impl<R> K3d<R>
where
    R: ToolRunner,
{
    /// Creates a client over an existing runner, taking timeouts and the
    /// version requirement from `config`.
    #[must_use]
    pub fn with_runner(runner: Arc<R>, config: &K3dConfig) -> Self {
        let gate = VersionGate::new(
            Arc::clone(&runner),
            config.version_requirement(),
            config.default_timeout(),
        );
        Self {
            initializer: Initializer::new(Arc::clone(&runner), gate),
            clusters: ClusterLifecycleService::new(Arc::clone(&runner), config.default_timeout()),
            registries: RegistryLifecycleService::new(runner, config.default_timeout()),
        }
    }

    /// Returns the cluster lifecycle service.
    #[must_use]
    pub const fn clusters(&self) -> &ClusterLifecycleService<R> {
        &self.clusters
    }

    /// Returns the registry lifecycle service.
    #[must_use]
    pub const fn registries(&self) -> &RegistryLifecycleService<R> {
        &self.registries
    }

    /// See [`Initializer::initialize`].
    ///
    /// # Errors
    ///
    /// Returns the initializer's errors unchanged.
    pub async fn initialize(&self, verbose: bool) -> K3dServiceResult<ToolVersion> {
        self.initializer.initialize(verbose).await
    }

    /// See [`ClusterLifecycleService::cluster_exists`].
    ///
    /// # Errors
    ///
    /// Returns the service's errors unchanged.
    pub async fn cluster_exists(&self, verbose: bool, name: &str) -> K3dServiceResult<bool> {
        self.clusters.cluster_exists(verbose, name).await
    }

    /// See [`ClusterLifecycleService::start_cluster`].
    ///
    /// # Errors
    ///
    /// Returns the service's errors unchanged.
    pub async fn start_cluster(
        &self,
        verbose: bool,
        timeout: Duration,
        request: &StartClusterRequest,
    ) -> K3dServiceResult<()> {
        self.clusters.start_cluster(verbose, timeout, request).await
    }

    /// See [`ClusterLifecycleService::delete_cluster`].
    ///
    /// # Errors
    ///
    /// Returns the service's errors unchanged.
    pub async fn delete_cluster(
        &self,
        verbose: bool,
        timeout: Duration,
        name: &str,
    ) -> K3dServiceResult<()> {
        self.clusters.delete_cluster(verbose, timeout, name).await
    }

    /// See [`RegistryLifecycleService::registry_exists`].
    ///
    /// # Errors
    ///
    /// Returns the service's errors unchanged.
    pub async fn registry_exists(&self, verbose: bool, name: &str) -> K3dServiceResult<bool> {
        self.registries.registry_exists(verbose, name).await
    }

    /// See [`RegistryLifecycleService::create_registry`].
    ///
    /// # Errors
    ///
    /// Returns the service's errors unchanged.
    pub async fn create_registry(
        &self,
        verbose: bool,
        timeout: Duration,
        name: &str,
    ) -> K3dServiceResult<String> {
        self.registries.create_registry(verbose, timeout, name).await
    }

    /// See [`RegistryLifecycleService::delete_registry`].
    ///
    /// # Errors
    ///
    /// Returns the service's errors unchanged.
    pub async fn delete_registry(
        &self,
        verbose: bool,
        timeout: Duration,
        name: &str,
    ) -> K3dServiceResult<()> {
        self.registries.delete_registry(verbose, timeout, name).await
    }
}
