//! HTTP API handlers.
//!
//! Every data handler answers 200. Missing directories, a broken config
//! file or a failing status command degrade to defaults so the dashboard
//! always has something to render.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::board::{
    active_projects, daily_series, CronJob, DailyTokens, ProjectTask, SessionBudget,
    COMPLETED_TODAY, CRON_JOBS, CURRENT_SESSION,
};
use crate::config::Config;
use crate::metrics::{Endpoint, RequestTimer};
use crate::session::{
    collect_active_session, ActiveSession, CommandStatusSource, StatusSource, StatusTableParser,
};
use crate::utils::{now_iso, now_local};
use crate::workspace::{MemoryDir, MemoryFileEntry, RECENT_FILES_LIMIT};

/// Banner reported by the root endpoint.
pub const SERVICE_NAME: &str = "OpenClaw BI Dashboard API";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolved configuration.
    pub config: Arc<Config>,
    /// Where status reports come from.
    pub status_source: Arc<dyn StatusSource>,
    /// Parser for the status table.
    pub parser: Arc<StatusTableParser>,
    /// Prometheus recorder handle, when one is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state running the configured status command.
    pub fn new(config: Config) -> Self {
        let status_source = Arc::new(CommandStatusSource::from_config(&config));
        let parser = Arc::new(StatusTableParser::new(config.session_marker.clone()));

        Self {
            config: Arc::new(config),
            status_source,
            parser,
            prometheus: None,
        }
    }

    /// Replace the status source.
    pub fn with_status_source(mut self, source: Arc<dyn StatusSource>) -> Self {
        self.status_source = source;
        self
    }

    /// Expose metrics from this recorder on `/metrics`.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Memory directory of the configured workspace.
    pub fn memory_dir(&self) -> MemoryDir {
        MemoryDir::new(self.config.memory_dir())
    }
}

/// Root response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service banner.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Overview response.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    /// Always "active".
    pub status: &'static str,
    /// Workspace root.
    pub workspace: String,
    /// Markdown files in the memory directory.
    pub memory_files_count: usize,
    /// Local ISO-8601 timestamp.
    pub last_updated: String,
}

/// Sessions response.
#[derive(Debug, Serialize)]
pub struct SessionsResponse {
    /// Sessions known to the dashboard.
    pub total_sessions: u32,
    /// The main session.
    pub active_session: ActiveSession,
}

/// Tasks response.
#[derive(Debug, Serialize)]
pub struct TasksResponse {
    /// Projects in flight.
    pub active_projects: Vec<ProjectTask>,
    /// Tasks closed today.
    pub completed_today: u32,
}

/// Automation response.
#[derive(Debug, Serialize)]
pub struct AutomationResponse {
    /// Scheduled jobs.
    pub cron_jobs: &'static [CronJob],
    /// Local ISO-8601 timestamp.
    pub last_heartbeat: String,
}

/// Memory summary response.
#[derive(Debug, Serialize)]
pub struct MemoryResponse {
    /// Newest memory files by name.
    pub recent_files: Vec<MemoryFileEntry>,
    /// Memory directory.
    pub memory_dir: String,
}

/// Token metrics response.
#[derive(Debug, Serialize)]
pub struct TokenMetricsResponse {
    /// Daily totals, oldest first.
    pub daily: Vec<DailyTokens>,
    /// Running session against its budget.
    pub current_session: SessionBudget,
}

/// Root handler - service banner and version.
pub async fn root() -> impl IntoResponse {
    let _timer = RequestTimer::new(Endpoint::Root);
    Json(RootResponse {
        status: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus exposition - 503 when no recorder is installed.
pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.prometheus {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}

/// Overview handler - workspace location and memory file count.
pub async fn overview(State(state): State<AppState>) -> impl IntoResponse {
    let _timer = RequestTimer::new(Endpoint::Overview);

    Json(OverviewResponse {
        status: "active",
        workspace: state.config.workspace_root().display().to_string(),
        memory_files_count: state.memory_dir().count(),
        last_updated: now_iso(),
    })
}

/// Sessions handler - configured model and estimated token usage.
pub async fn sessions(State(state): State<AppState>) -> impl IntoResponse {
    let _timer = RequestTimer::new(Endpoint::Sessions);

    let active_session = collect_active_session(
        &state.config.openclaw_config_path(),
        state.status_source.as_ref(),
        &state.parser,
    )
    .await;

    Json(SessionsResponse {
        total_sessions: 1,
        active_session,
    })
}

/// Tasks handler - projects in flight.
pub async fn tasks() -> impl IntoResponse {
    let _timer = RequestTimer::new(Endpoint::Tasks);

    Json(TasksResponse {
        active_projects: active_projects(&now_iso()),
        completed_today: COMPLETED_TODAY,
    })
}

/// Automation handler - cron jobs and heartbeat.
pub async fn automation() -> impl IntoResponse {
    let _timer = RequestTimer::new(Endpoint::Automation);

    Json(AutomationResponse {
        cron_jobs: &CRON_JOBS,
        last_heartbeat: now_iso(),
    })
}

/// Memory handler - newest memory files.
pub async fn memory(State(state): State<AppState>) -> impl IntoResponse {
    let _timer = RequestTimer::new(Endpoint::Memory);
    let dir = state.memory_dir();

    Json(MemoryResponse {
        recent_files: dir.recent_files(RECENT_FILES_LIMIT),
        memory_dir: dir.path().display().to_string(),
    })
}

/// Token metrics handler - daily trend and current budget.
pub async fn token_metrics() -> impl IntoResponse {
    let _timer = RequestTimer::new(Endpoint::TokenMetrics);

    Json(TokenMetricsResponse {
        daily: daily_series(now_local().date()),
        current_session: CURRENT_SESSION,
    })
}
