//! Read-only HTTP API behind the OpenClaw BI dashboard.
//!
//! Summarises a local agent workspace for a single dashboard client:
//!
//! ```text
//! GET /api/overview        memory file count, workspace path
//! GET /api/sessions        configured model, token usage from `openclaw status`
//! GET /api/tasks           projects in flight
//! GET /api/automation      cron jobs
//! GET /api/memory          newest memory files
//! GET /api/metrics/tokens  daily token trend
//! ```
//!
//! Handlers never fail: missing files and a broken status command degrade
//! to defaults so the dashboard always renders.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`workspace`]: Memory directory listing
//! - [`session`]: Model lookup and status command scraping
//! - [`board`]: Projects, cron jobs and token trends
//! - [`api`]: HTTP router and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod metrics;
pub mod session;
pub mod utils;
pub mod workspace;

pub use config::Config;
pub use error::{DashboardError, Result};
