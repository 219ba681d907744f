//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Workspace ===
    /// Agent workspace root. Defaults to `$HOME/clawd`.
    #[serde(default)]
    pub clawd_path: Option<PathBuf>,

    /// OpenClaw JSON configuration file. Defaults to `$HOME/.openclaw/openclaw.json`.
    #[serde(default)]
    pub openclaw_config: Option<PathBuf>,

    // === Status Command ===
    /// Executable reporting session status.
    #[serde(default = "default_status_program")]
    pub status_program: String,

    /// Arguments passed to the status executable (comma separated in env).
    #[serde(default = "default_status_args")]
    pub status_args: Vec<String>,

    /// Seconds to wait for the status command before giving up.
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,

    /// Session key identifying the row of interest in the status table.
    #[serde(default = "default_session_marker")]
    pub session_marker: String,

    // === Server Configuration ===
    /// Origins permitted by the CORS layer.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Logging ===
    /// Tracing filter directive, e.g. `info` or `openclaw_dashboard=debug`.
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging. Overrides `rust_log`.
    #[serde(default)]
    pub verbose: bool,
}

/// Filter directive used in verbose mode.
pub const VERBOSE_LOG_DIRECTIVE: &str = "openclaw_dashboard=debug,info";

fn default_status_program() -> String {
    "openclaw".to_string()
}

fn default_status_args() -> Vec<String> {
    vec!["status".to_string()]
}

fn default_status_timeout() -> u64 {
    15
}

fn default_session_marker() -> String {
    "agent:main:main".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clawd_path: None,
            openclaw_config: None,
            status_program: default_status_program(),
            status_args: default_status_args(),
            status_timeout_secs: default_status_timeout(),
            session_marker: default_session_marker(),
            cors_origins: default_cors_origins(),
            host: default_host(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.status_program.trim().is_empty() {
            return Err("STATUS_PROGRAM must not be empty".to_string());
        }

        if self.status_timeout_secs == 0 {
            return Err("STATUS_TIMEOUT_SECS must be greater than 0".to_string());
        }

        if self.session_marker.trim().is_empty() {
            return Err("SESSION_MARKER must not be empty".to_string());
        }

        if let Some(bad) = self
            .cors_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(format!("CORS_ORIGINS contains an invalid origin: {bad}"));
        }

        Ok(())
    }

    /// Workspace root containing the `memory` directory.
    pub fn workspace_root(&self) -> PathBuf {
        self.clawd_path
            .clone()
            .unwrap_or_else(|| home_dir().join("clawd"))
    }

    /// Directory of markdown memory files.
    pub fn memory_dir(&self) -> PathBuf {
        self.workspace_root().join("memory")
    }

    /// Path of the OpenClaw JSON configuration file.
    pub fn openclaw_config_path(&self) -> PathBuf {
        self.openclaw_config
            .clone()
            .unwrap_or_else(|| home_dir().join(".openclaw").join("openclaw.json"))
    }

    /// Timeout applied to the status command.
    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }

    /// Tracing filter directive. Verbose mode, from the CLI flag or
    /// `VERBOSE`, wins over `RUST_LOG`.
    pub fn log_directive(&self, verbose_flag: bool) -> &str {
        if verbose_flag || self.verbose {
            VERBOSE_LOG_DIRECTIVE
        } else {
            &self.rust_log
        }
    }

    /// CORS origins as header values. Invalid entries are dropped; run
    /// [`Config::validate`] first to reject them instead.
    pub fn cors_header_values(&self) -> Vec<HeaderValue> {
        self.cors_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    }
}
