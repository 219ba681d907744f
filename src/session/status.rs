//! Source of the status report: the external `openclaw status` command.

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::StatusError;
use crate::metrics;

/// Produces the raw text of a status report.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the report. Implementations must bound their own run time.
    async fn fetch_report(&self) -> Result<String, StatusError>;
}

/// Runs an executable and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandStatusSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandStatusSource {
    /// Create a source for `program args...` with a deadline.
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Source configured from [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.status_program.clone(),
            config.status_args.clone(),
            config.status_timeout(),
        )
    }

    /// Command line, for logging.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl StatusSource for CommandStatusSource {
    #[instrument(skip(self))]
    async fn fetch_report(&self) -> Result<String, StatusError> {
        let start = Instant::now();
        debug!(command = %self.command_line(), "Running status command");

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| StatusError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Dropping the future on timeout drops the child, which kills it.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| StatusError::Timeout {
                seconds: self.timeout.as_secs_f64(),
            })?
            .map_err(StatusError::Wait)?;

        metrics::record_status_command_latency(start);

        if !output.status.success() {
            return Err(StatusError::NonZeroExit {
                code: output.status.code(),
            });
        }

        debug!(bytes = output.stdout.len(), "Status command finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
