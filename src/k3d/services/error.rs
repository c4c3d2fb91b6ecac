//! Service-level errors for k3d lifecycle operations.

use crate::k3d::domain::{
    IncompatibleVersionError, K3dDomainError, ParseToolVersionError, ResourceKind,
};
use crate::process::ports::ToolRunnerError;
use thiserror::Error;

/// Errors returned by the initializer and the lifecycle services.
#[derive(Debug, Clone, Error)]
pub enum K3dServiceError {
    /// A name failed validation; nothing was run.
    #[error(transparent)]
    Domain(#[from] K3dDomainError),

    /// The runner failed outside an operation-specific classification:
    /// binary not found, deadline exceeded, or spawn failure.
    #[error(transparent)]
    Runner(#[from] ToolRunnerError),

    /// The version subcommand printed no version token.
    #[error(transparent)]
    VersionParse(#[from] ParseToolVersionError),

    /// The installed tool is outside the supported version range.
    #[error(transparent)]
    IncompatibleVersion(#[from] IncompatibleVersionError),

    /// The list subcommand failed or printed unparsable output.
    #[error("listing {kind}s failed: {reason}")]
    ListFailed {
        /// Kind of resource being listed.
        kind: ResourceKind,
        /// Failure description.
        reason: String,
        /// Raw list output.
        output: String,
    },

    /// The create subcommand exited with a non-zero status.
    #[error("creating {kind} '{name}' failed ('{command}'): {output}")]
    CreateFailed {
        /// Kind of resource being created.
        kind: ResourceKind,
        /// Requested name.
        name: String,
        /// Rendered command line.
        command: String,
        /// Merged output of the failed run.
        output: String,
    },

    /// The delete subcommand exited with a non-zero status.
    #[error("deleting {kind} '{name}' failed ('{command}'): {output}")]
    DeleteFailed {
        /// Kind of resource being deleted.
        kind: ResourceKind,
        /// Requested name.
        name: String,
        /// Rendered command line.
        command: String,
        /// Merged output of the failed run.
        output: String,
    },
}

/// Result type for lifecycle service operations.
pub type K3dServiceResult<T> = Result<T, K3dServiceError>;

impl K3dServiceError {
    /// Classifies a failed list run. Non-zero exits become
    /// [`Self::ListFailed`]; other runner errors pass through.
    pub(crate) fn list_failed(kind: ResourceKind, err: ToolRunnerError) -> Self {
        match err {
            ToolRunnerError::ExecutionFailed { output, .. } => Self::ListFailed {
                kind,
                reason: last_meaningful_line(&output),
                output,
            },
            other => Self::Runner(other),
        }
    }

    /// Classifies a failed create run.
    pub(crate) fn create_failed(kind: ResourceKind, name: &str, err: ToolRunnerError) -> Self {
        match err {
            ToolRunnerError::ExecutionFailed {
                command, output, ..
            } => Self::CreateFailed {
                kind,
                name: name.to_owned(),
                command,
                output,
            },
            other => Self::Runner(other),
        }
    }

    /// Classifies a failed delete run.
    pub(crate) fn delete_failed(kind: ResourceKind, name: &str, err: ToolRunnerError) -> Self {
        match err {
            ToolRunnerError::ExecutionFailed {
                command, output, ..
            } => Self::DeleteFailed {
                kind,
                name: name.to_owned(),
                command,
                output,
            },
            other => Self::Runner(other),
        }
    }

    /// Returns the raw tool output attached to the error, if any.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::ListFailed { output, .. }
            | Self::CreateFailed { output, .. }
            | Self::DeleteFailed { output, .. } => Some(output.as_str()),
            Self::Runner(err) => err.output(),
            Self::Domain(_) | Self::VersionParse(_) | Self::IncompatibleVersion(_) => None,
        }
    }

    /// Returns whether the operation was cut short by its deadline.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Runner(err) if err.is_timeout())
    }

    /// Returns whether the binary could not be resolved.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Runner(ToolRunnerError::NotFound { .. }))
    }
}

fn last_meaningful_line(output: &str) -> String {
    output
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map_or_else(|| "non-zero exit".to_owned(), |line| line.trim().to_owned())
}
