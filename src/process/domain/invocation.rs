//! Command invocations handed to a tool runner.

use crate::shell::render_command_line;
use std::time::Duration;

/// A single invocation of the external tool.
///
/// Holds the subcommand and flags (without the program name), the deadline
/// for the whole run, and whether output is mirrored to the diagnostic
/// stream while the process runs. Invocations are built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    args: Vec<String>,
    timeout: Duration,
    verbose: bool,
}

impl ToolInvocation {
    /// Creates a non-verbose invocation.
    #[must_use]
    pub fn new<I, S>(args: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            timeout,
            verbose: false,
        }
    }

    /// Sets whether output is mirrored while the process runs.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the argument tokens.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the deadline for the run.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether output is mirrored while the process runs.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Renders the invocation as a shell-quoted command line for `program`.
    #[must_use]
    pub fn render(&self, program: &str) -> String {
        render_command_line(program, &self.args)
    }
}

/// Expands a repeated flag into alternating flag/value tokens.
///
/// `repeated_flag("-p", &["a", "b"])` yields `["-p", "a", "-p", "b"]`.
/// Values are passed through untouched and an empty slice yields no tokens.
#[must_use]
pub fn repeated_flag<S: AsRef<str>>(flag: &str, values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| [flag.to_owned(), value.as_ref().to_owned()])
        .collect()
}
