//! Unified error types for the dashboard API.
//!
//! None of these reach an HTTP client: data handlers degrade to default
//! values at the boundary. They exist so the fallible steps underneath can
//! be tested and logged precisely.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the dashboard API.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading the OpenClaw configuration file failed.
    #[error("failed to read {path}: {source}")]
    ConfigFile {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of the external status command.
#[derive(Error, Debug)]
pub enum StatusError {
    /// The executable could not be started (usually: not installed).
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The command ran past its deadline and was killed.
    #[error("status command timed out after {seconds:.1}s")]
    Timeout {
        /// Deadline that elapsed.
        seconds: f64,
    },

    /// The command exited unsuccessfully.
    #[error("status command exited with code {code:?}")]
    NonZeroExit {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },

    /// Waiting on the child process failed.
    #[error("failed to collect status output: {0}")]
    Wait(#[source] std::io::Error),
}

impl StatusError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            StatusError::Spawn { .. } => "spawn",
            StatusError::Timeout { .. } => "timeout",
            StatusError::NonZeroExit { .. } => "exit_code",
            StatusError::Wait(_) => "wait",
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, DashboardError>;
