//! Child-process runner backed by `tokio::process`.

use super::BinaryLocator;
use crate::process::{
    domain::{SearchPath, ToolInvocation, ToolOutput},
    ports::{ToolRunner, ToolRunnerError, ToolRunnerResult},
};
use async_trait::async_trait;
use camino::Utf8PathBuf;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, trace, warn};

/// Tracing target used to mirror child output.
pub const OUTPUT_TARGET: &str = "k3dctl::output";

/// How long output is still collected after the child has exited.
const OUTPUT_GRACE: Duration = Duration::from_millis(200);

/// Runs the external tool as a child process.
///
/// Standard output and standard error are merged line by line. The child is
/// killed and reaped when the invocation deadline elapses, and is also
/// killed if the returned future is dropped early.
#[derive(Debug, Clone)]
pub struct ProcessToolRunner {
    locator: BinaryLocator,
}

impl ProcessToolRunner {
    /// Creates a runner for `binary` resolved over `search_path`.
    #[must_use]
    pub fn new(binary: impl Into<String>, search_path: SearchPath) -> Self {
        Self {
            locator: BinaryLocator::new(binary, search_path),
        }
    }

    /// Returns the binary name this runner executes.
    #[must_use]
    pub fn binary(&self) -> &str {
        self.locator.binary()
    }
}

#[async_trait]
impl ToolRunner for ProcessToolRunner {
    fn resolve_binary(&self) -> ToolRunnerResult<Utf8PathBuf> {
        self.locator.locate().ok_or_else(|| ToolRunnerError::NotFound {
            binary: self.binary().to_owned(),
        })
    }

    async fn run(&self, invocation: &ToolInvocation) -> ToolRunnerResult<ToolOutput> {
        let binary_path = self.resolve_binary()?;
        let command_line = invocation.render(self.binary());
        debug!(
            command = %command_line,
            binary = %binary_path,
            timeout = ?invocation.timeout(),
            "running external tool"
        );

        let started = Instant::now();
        let mut child = Command::new(binary_path.as_std_path())
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ToolRunnerError::spawn(&command_line, source))?;

        let deadline = started + invocation.timeout();
        let mut lines = forward_output(&mut child, invocation.is_verbose());
        let mut transcript = String::new();
        let waited = timeout_at(
            deadline,
            wait_collecting(&mut child, &mut lines, &mut transcript),
        )
        .await;

        let Ok(wait_result) = waited else {
            if let Err(err) = child.kill().await {
                warn!(command = %command_line, error = %err, "failed to kill timed out process");
            }
            while let Ok(line) = lines.try_recv() {
                push_line(&mut transcript, &line);
            }
            warn!(
                command = %command_line,
                timeout = ?invocation.timeout(),
                "external tool timed out"
            );
            return Err(ToolRunnerError::Timeout {
                command: command_line,
                timeout: invocation.timeout(),
                output: transcript,
            });
        };

        let status = wait_result.map_err(|source| ToolRunnerError::wait(&command_line, source))?;
        let drained = timeout_at(
            Instant::now() + OUTPUT_GRACE,
            collect_remaining(&mut lines, &mut transcript),
        )
        .await;
        if drained.is_err() {
            debug!(
                command = %command_line,
                "output pipes still open after exit, keeping output read so far"
            );
            while let Ok(line) = lines.try_recv() {
                push_line(&mut transcript, &line);
            }
        }
        let elapsed = started.elapsed();
        if status.success() {
            debug!(command = %command_line, ?elapsed, "external tool succeeded");
            return Ok(ToolOutput::new(transcript, status.code(), elapsed));
        }

        warn!(
            command = %command_line,
            exit_code = ?status.code(),
            ?elapsed,
            "external tool failed"
        );
        Err(ToolRunnerError::ExecutionFailed {
            command: command_line,
            exit_code: status.code(),
            output: transcript,
        })
    }
}

/// Collects output until the child exits.
///
/// The exit status decides the outcome, so a descendant that inherited the
/// pipes and outlives the child does not hold the run open.
async fn wait_collecting(
    child: &mut Child,
    lines: &mut mpsc::UnboundedReceiver<String>,
    transcript: &mut String,
) -> io::Result<ExitStatus> {
    let mut pipes_open = true;
    loop {
        tokio::select! {
            biased;
            received = lines.recv(), if pipes_open => match received {
                Some(line) => push_line(transcript, &line),
                None => pipes_open = false,
            },
            status = child.wait() => return status,
        }
    }
}

async fn collect_remaining(lines: &mut mpsc::UnboundedReceiver<String>, transcript: &mut String) {
    while let Some(line) = lines.recv().await {
        push_line(transcript, &line);
    }
}

fn push_line(transcript: &mut String, line: &str) {
    transcript.push_str(line);
    transcript.push('\n');
}

/// Starts one forwarding task per output pipe. The channel closes once both
/// pipes reach end of file.
fn forward_output(child: &mut Child, verbose: bool) -> mpsc::UnboundedReceiver<String> {
    let (sender, receiver) = mpsc::unbounded_channel();
    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(forward_lines(stdout, sender.clone(), verbose));
    }
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(forward_lines(stderr, sender, verbose));
    }
    receiver
}

async fn forward_lines<R>(pipe: R, sender: mpsc::UnboundedSender<String>, verbose: bool)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(pipe);
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buffer)
                    .trim_end_matches(['\n', '\r'])
                    .to_owned();
                mirror_line(&line, verbose);
                if sender.send(line).is_err() {
                    break;
                }
            }
            Err(err) => {
                debug!(error = %err, "stopped reading tool output");
                break;
            }
        }
    }
}

fn mirror_line(line: &str, verbose: bool) {
    if verbose {
        info!(target: OUTPUT_TARGET, "{line}");
    } else {
        trace!(target: OUTPUT_TARGET, "{line}");
    }
}
