//! Caller-supplied cluster settings and the create command line built from
//! them.

use super::ClusterName;
use crate::process::domain::repeated_flag;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cluster settings owned by the caller.
///
/// Settings are read-only to lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSettings {
    /// Name of the cluster.
    pub cluster_name: ClusterName,
    /// Extra arguments appended verbatim to `k3d cluster create`.
    #[serde(default)]
    pub args: Vec<String>,
    /// Kubernetes version of the k3s image, such as `1.20.7`. Empty keeps the
    /// k3d default image.
    #[serde(default)]
    pub version: String,
    /// Port mappings such as `80:80@loadbalancer`.
    #[serde(default)]
    pub port_mapping: Vec<String>,
}

impl ClusterSettings {
    /// Creates settings for `cluster_name` with no extras.
    #[must_use]
    pub const fn new(cluster_name: ClusterName) -> Self {
        Self {
            cluster_name,
            args: Vec::new(),
            version: String::new(),
            port_mapping: Vec::new(),
        }
    }

    /// Returns the k3s image for the configured version, if one is set.
    #[must_use]
    pub fn k3s_image(&self) -> Option<String> {
        let trimmed = self.version.trim();
        let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
        (!version.is_empty()).then(|| format!("rancher/k3s:v{version}-k3s1"))
    }
}

/// Everything needed to create one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartClusterRequest {
    /// Cluster to create.
    pub name: ClusterName,
    /// Number of agent (worker) nodes; `0` leaves the flag out.
    pub worker_count: u32,
    /// Arguments appended verbatim before the settings arguments.
    pub extra_args: Vec<String>,
    /// Registries the cluster should pull from, as `host[:port]`.
    pub import_hosts: Vec<String>,
    /// Caller settings.
    pub settings: ClusterSettings,
}

impl StartClusterRequest {
    /// Creates a request for the cluster named in `settings`.
    #[must_use]
    pub fn new(settings: ClusterSettings) -> Self {
        Self {
            name: settings.cluster_name.clone(),
            worker_count: 0,
            extra_args: Vec::new(),
            import_hosts: Vec::new(),
            settings,
        }
    }

    /// Sets the number of agent nodes.
    #[must_use]
    pub const fn with_workers(mut self, worker_count: u32) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Sets the arguments appended verbatim.
    #[must_use]
    pub fn with_extra_args<I, S>(mut self, extra_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = extra_args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the registries the cluster uses.
    #[must_use]
    pub fn with_import_hosts<I, S>(mut self, import_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.import_hosts = import_hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the `k3d cluster create` arguments.
    ///
    /// `timeout` is also handed to k3d so it gives up waiting for the
    /// cluster at the same deadline the process is killed at. k3d only takes
    /// whole seconds, so a fractional deadline is rounded up.
    #[must_use]
    pub fn create_args(&self, timeout: Duration) -> Vec<String> {
        let mut args = vec![
            "cluster".to_owned(),
            "create".to_owned(),
            self.name.to_string(),
            "--kubeconfig-update-default".to_owned(),
            "--kubeconfig-switch-context".to_owned(),
            "--timeout".to_owned(),
            format!("{}s", whole_seconds(timeout)),
        ];
        if let Some(image) = self.settings.k3s_image() {
            args.extend(["--image".to_owned(), image]);
        }
        if self.worker_count > 0 {
            args.extend(["--agents".to_owned(), self.worker_count.to_string()]);
        }
        args.extend(repeated_flag("--port", &self.settings.port_mapping));
        args.extend(repeated_flag("--registry-use", &self.import_hosts));
        args.extend(self.extra_args.iter().cloned());
        args.extend(self.settings.args.iter().cloned());
        args
    }
}

/// Seconds in `timeout`, rounded up and never zero.
fn whole_seconds(timeout: Duration) -> u64 {
    let partial = u64::from(timeout.subsec_nanos() > 0);
    timeout.as_secs().saturating_add(partial).max(1)
}
