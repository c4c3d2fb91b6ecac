//! Port contracts for running the external tool.

mod runner;

#[cfg(test)]
pub use runner::MockToolRunner;
pub use runner::{ToolRunner, ToolRunnerError, ToolRunnerResult};
