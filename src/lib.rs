//! k3dctl: lifecycle management for local k3d clusters and registries.
//!
//! This crate drives an installed `k3d` binary. It runs each subcommand
//! under a hard deadline, classifies the outcome, refuses to work with an
//! unsupported k3d release, and exposes create/exists/delete operations for
//! clusters and registries.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`process`]: Running the external tool under a deadline
//! - [`k3d`]: Version gate, initialization, and resource lifecycles
//! - [`config`]: Binary location and default limits
//!
//! # Example
//!
//! ```no_run
//! use k3dctl::{K3d, K3dConfig};
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), k3dctl::k3d::services::K3dServiceError> {
//! let k3d = K3d::from_config(&K3dConfig::from_env());
//! k3d.initialize(false).await?;
//!
//! if !k3d.registry_exists(false, "kyma").await? {
//!     let address = k3d
//!         .create_registry(false, Duration::from_secs(60), "kyma")
//!         .await?;
//!     assert_eq!(address, "kyma-registry:5000");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod k3d;
pub mod process;
pub mod shell;

pub use config::K3dConfig;
pub use k3d::K3d;
