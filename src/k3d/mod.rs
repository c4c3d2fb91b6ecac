//! k3d cluster and registry lifecycle management.
//!
//! The module follows hexagonal architecture on top of the
//! [`process`](crate::process) runner port:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//! - The [`K3d`] facade bundling both

mod client;
pub mod domain;
pub mod services;

pub use client::K3d;
