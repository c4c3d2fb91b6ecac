//! Result of a completed tool run.

use std::time::Duration;

/// Captured result of a tool run that exited successfully.
///
/// Standard output and standard error are merged line by line in arrival
/// order. The value is consumed by the caller and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    text: String,
    exit_code: Option<i32>,
    elapsed: Duration,
}

impl ToolOutput {
    /// Creates a captured output value.
    #[must_use]
    pub fn new(text: impl Into<String>, exit_code: Option<i32>, elapsed: Duration) -> Self {
        Self {
            text: text.into(),
            exit_code,
            elapsed,
        }
    }

    /// Creates the output of an instant, successful run. Useful for test doubles.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Some(0), Duration::ZERO)
    }

    /// Returns the merged output text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the value and returns the merged output text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the process exit code, if the platform reported one.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Returns the wall-clock time the run took.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
