//! End-to-end tests for the dashboard API.
//!
//! The status command is stood in for by `sh -c`, so these run on any Unix
//! machine without OpenClaw installed.
//! Run with: cargo test --test integration

#![cfg(unix)]

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use openclaw_dashboard::api::{create_router, AppState};
use openclaw_dashboard::config::Config;

/// Config rooted in `root` whose status command is `sh -c <script>`.
fn test_config(root: &Path, script: &str, timeout_secs: u64) -> Config {
    Config {
        clawd_path: Some(root.join("clawd")),
        openclaw_config: Some(root.join("openclaw.json")),
        status_program: "sh".to_string(),
        status_args: vec!["-c".to_string(), script.to_string()],
        status_timeout_secs: timeout_secs,
        ..Config::default()
    }
}

async fn get_json(app: Router, uri: &str) -> Value {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "{uri}");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn sessions_scrape_status_command() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("openclaw.json"),
        r#"{"agents":{"defaults":{"model":{"primary":"anthropic/claude-sonnet-4-5"}}}}"#,
    )
    .unwrap();

    let script = "printf '%s\\n' \
        '┌─────────────────┬───────┬─────┬───────────────────┬────────────────┐' \
        '│ agent:main:main │ agent │ 2h  │ claude-sonnet-4-5 │ 69k/1000k (7%) │' \
        '└─────────────────┴───────┴─────┴───────────────────┴────────────────┘'";
    let app = create_router(AppState::new(test_config(tmp.path(), script, 5)));

    let body = get_json(app, "/api/sessions").await;
    let session = &body["active_session"];
    assert_eq!(session["model"], "anthropic/claude-sonnet-4-5");
    assert_eq!(session["tokens_in"], 62100);
    assert_eq!(session["tokens_out"], 6900);
}

#[tokio::test]
async fn sessions_survive_hanging_status_command() {
    let tmp = TempDir::new().unwrap();
    let app = create_router(AppState::new(test_config(tmp.path(), "sleep 30", 1)));

    let start = std::time::Instant::now();
    let body = get_json(app, "/api/sessions").await;

    assert!(start.elapsed() < std::time::Duration::from_secs(10));
    assert_eq!(body["active_session"]["model"], "unknown");
    assert_eq!(body["active_session"]["tokens_in"], 60000);
    assert_eq!(body["active_session"]["tokens_out"], 6000);
}

#[tokio::test]
async fn sessions_survive_failing_status_command() {
    let tmp = TempDir::new().unwrap();
    let script = "echo '│ agent:main:main │ agent │ 2h │ m │ 69k/1000k (7%) │'; exit 3";
    let app = create_router(AppState::new(test_config(tmp.path(), script, 5)));

    let body = get_json(app, "/api/sessions").await;
    assert_eq!(body["active_session"]["tokens_in"], 60000);
    assert_eq!(body["active_session"]["tokens_out"], 6000);
}

#[tokio::test]
async fn sessions_survive_missing_status_binary() {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        status_program: "openclaw-not-installed-anywhere".to_string(),
        status_args: vec!["status".to_string()],
        ..test_config(tmp.path(), "", 5)
    };
    let app = create_router(AppState::new(config));

    let body = get_json(app, "/api/sessions").await;
    assert_eq!(body["active_session"]["tokens_in"], 60000);
    assert_eq!(body["active_session"]["tokens_out"], 6000);
}

#[tokio::test]
async fn workspace_endpoints_agree() {
    let tmp = TempDir::new().unwrap();
    let memory = tmp.path().join("clawd").join("memory");
    fs::create_dir_all(&memory).unwrap();
    for day in 1..=12 {
        fs::write(memory.join(format!("2026-01-{day:02}.md")), "# notes\n").unwrap();
    }
    fs::write(memory.join("index.json"), "{}").unwrap();

    let state = AppState::new(test_config(tmp.path(), "true", 5));

    let overview = get_json(create_router(state.clone()), "/api/overview").await;
    assert_eq!(overview["memory_files_count"], 12);

    let summary = get_json(create_router(state), "/api/memory").await;
    let files = summary["recent_files"].as_array().unwrap();
    assert_eq!(files.len(), 7);
    assert_eq!(files[0]["name"], "2026-01-12.md");
    assert_eq!(files[6]["name"], "2026-01-06.md");
    assert!(files.iter().all(|f| f["size"] == 8));
}

#[tokio::test]
async fn every_route_answers_ok() {
    let tmp = TempDir::new().unwrap();
    let state = AppState::new(test_config(tmp.path(), "exit 1", 5));

    for uri in [
        "/",
        "/health",
        "/api/overview",
        "/api/sessions",
        "/api/tasks",
        "/api/automation",
        "/api/memory",
        "/api/metrics/tokens",
    ] {
        get_json(create_router(state.clone()), uri).await;
    }
}
