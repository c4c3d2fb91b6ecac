//! Runner port for invoking the external tool.

use crate::process::domain::{ToolInvocation, ToolOutput};
use async_trait::async_trait;
use camino::Utf8PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for tool runner operations.
pub type ToolRunnerResult<T> = Result<T, ToolRunnerError>;

/// Execution contract for the external tool.
///
/// Each call to [`ToolRunner::run`] spawns at most one child process and
/// never leaves it running after returning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Resolves the binary that [`ToolRunner::run`] would execute.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRunnerError::NotFound`] when the binary cannot be
    /// located.
    fn resolve_binary(&self) -> ToolRunnerResult<Utf8PathBuf>;

    /// Runs the tool to completion or until the invocation deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRunnerError::NotFound`] without spawning when the binary
    /// is missing, [`ToolRunnerError::Timeout`] when the deadline elapses, and
    /// [`ToolRunnerError::ExecutionFailed`] on a non-zero exit.
    async fn run(&self, invocation: &ToolInvocation) -> ToolRunnerResult<ToolOutput>;
}

/// Errors returned by tool runner adapters.
#[derive(Debug, Clone, Error)]
pub enum ToolRunnerError {
    /// The binary is not present in the search path.
    #[error("command '{binary}' not found; install k3d (see https://k3d.io) and make sure it is on PATH")]
    NotFound {
        /// Binary name that was searched for.
        binary: String,
    },

    /// The deadline elapsed and the process was killed.
    #[error(
        "'{command}' timed out after {timeout:?}; try running the command manually or increase the timeout"
    )]
    Timeout {
        /// Rendered command line.
        command: String,
        /// Deadline that elapsed.
        timeout: Duration,
        /// Output captured before the process was killed.
        output: String,
    },

    /// The process exited with a non-zero status.
    #[error("'{command}' failed with {}: {output}", describe_exit(.exit_code))]
    ExecutionFailed {
        /// Rendered command line.
        command: String,
        /// Exit code, absent when the process was terminated by a signal.
        exit_code: Option<i32>,
        /// Merged output of the failed run.
        output: String,
    },

    /// The process could not be spawned.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Waiting for the process failed.
    #[error("failed to wait for '{command}': {source}")]
    Wait {
        /// Rendered command line.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl ToolRunnerError {
    /// Wraps a spawn failure.
    #[must_use]
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source: Arc::new(source),
        }
    }

    /// Wraps a failure while waiting for the process.
    #[must_use]
    pub fn wait(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Wait {
            command: command.into(),
            source: Arc::new(source),
        }
    }

    /// Returns the output captured from the process, when there was one.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Timeout { output, .. } | Self::ExecutionFailed { output, .. } => {
                Some(output.as_str())
            }
            Self::NotFound { .. } | Self::Spawn { .. } | Self::Wait { .. } => None,
        }
    }

    /// Returns whether the run was cut short by its deadline.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    exit_code.map_or_else(
        || "termination by signal".to_owned(),
        |code| format!("exit code {code}"),
    )
}

#[cfg(test)]
mod tests {
    use super::ToolRunnerError;
    use std::time::Duration;

    #[test]
    fn execution_failure_reports_exit_code_and_output() {
        let error = ToolRunnerError::ExecutionFailed {
            command: "k3d cluster xyz".to_owned(),
            exit_code: Some(1),
            output: "Error: unknown command".to_owned(),
        };

        let message = error.to_string();

        assert!(message.contains("k3d cluster xyz"));
        assert!(message.contains("exit code 1"));
        assert_eq!(error.output(), Some("Error: unknown command"));
    }

    #[test]
    fn signal_termination_is_described() {
        let error = ToolRunnerError::ExecutionFailed {
            command: "k3d version".to_owned(),
            exit_code: None,
            output: String::new(),
        };

        assert!(error.to_string().contains("termination by signal"));
    }

    #[test]
    fn timeout_keeps_partial_output() {
        let error = ToolRunnerError::Timeout {
            command: "k3d cluster create dev".to_owned(),
            timeout: Duration::from_secs(5),
            output: "INFO[0000] Prep: Network".to_owned(),
        };

        assert!(error.is_timeout());
        assert_eq!(error.output(), Some("INFO[0000] Prep: Network"));
    }

    #[test]
    fn not_found_has_no_output() {
        let error = ToolRunnerError::NotFound {
            binary: "k3d".to_owned(),
        };

        assert!(!error.is_timeout());
        assert_eq!(error.output(), None);
    }
}
