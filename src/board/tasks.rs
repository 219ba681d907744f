//! Project tracking.

use serde::Serialize;

/// Project priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    /// Needs attention this week.
    High,
    /// Ongoing.
    Medium,
}

/// A tracked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTask {
    /// Ticket key or slug.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Free-form status line.
    pub status: &'static str,
    /// Priority.
    pub priority: Priority,
    /// Last update, local ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Due date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<&'static str>,
    /// Completion percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

/// Projects currently in flight. `now` stamps the one under active work.
pub fn active_projects(now: &str) -> Vec<ProjectTask> {
    vec![
        ProjectTask {
            id: "KAN-82",
            title: "BI Dashboard",
            status: "In Progress",
            priority: Priority::High,
            updated: Some(now.to_string()),
            deadline: None,
            progress: None,
        },
        ProjectTask {
            id: "car-financing",
            title: "Škoda Fabia Financing",
            status: "Waiting for VWFS",
            priority: Priority::High,
            updated: None,
            deadline: Some("2026-03-09"),
            progress: None,
        },
        ProjectTask {
            id: "trading-bot",
            title: "Trading Bot Framework",
            status: "Phase 1 Complete",
            priority: Priority::Medium,
            updated: None,
            deadline: None,
            progress: Some(20),
        },
    ]
}

/// Tasks closed today.
pub const COMPLETED_TODAY: u32 = 1;
