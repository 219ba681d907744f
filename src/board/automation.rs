//! Scheduled agent jobs.

use serde::Serialize;

/// Whether a cron job is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Runs on schedule.
    Active,
}

/// A cron job as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronJob {
    /// Job name.
    pub name: &'static str,
    /// Human-readable schedule.
    pub schedule: &'static str,
    /// Scheduling status.
    pub status: JobStatus,
}

const fn active(name: &'static str, schedule: &'static str) -> CronJob {
    CronJob {
        name,
        schedule,
        status: JobStatus::Active,
    }
}

/// Configured cron jobs.
pub static CRON_JOBS: [CronJob; 4] = [
    active("Morning motivation", "09:00 daily"),
    active("Midday nudge", "13:00 daily"),
    active("Evening check", "19:00 daily"),
    active("Weekly summary", "Sunday 20:00"),
];
