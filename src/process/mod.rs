//! Running the external tool under a deadline.
//!
//! This module owns the execution primitive every lifecycle operation is
//! built on: resolving the binary over an explicit search path, spawning it
//! with merged output capture, and classifying the outcome. It follows
//! hexagonal architecture:
//!
//! - Domain values in [`domain`]
//! - The runner port in [`ports`]
//! - The `tokio::process` adapter in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
