//! Static dashboard content: projects, cron jobs and token trends.
//!
//! This module handles:
//! - Project tracking records
//! - Cron job listing
//! - Synthetic token usage series

pub mod automation;
pub mod tasks;
pub mod tokens;

pub use automation::{CronJob, JobStatus, CRON_JOBS};
pub use tasks::{active_projects, Priority, ProjectTask, COMPLETED_TODAY};
pub use tokens::{daily_series, DailyTokens, SessionBudget, CURRENT_SESSION, TREND_DAYS};
