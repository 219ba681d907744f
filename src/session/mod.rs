//! Active agent session: configured model plus estimated token usage.
//!
//! This module handles:
//! - Model lookup from the OpenClaw JSON config
//! - Running the status command behind [`StatusSource`]
//! - Parsing the status table and estimating the token split
//! - Mock status source for testing

pub mod mock;
pub mod model;
pub mod parser;
pub mod status;

use std::path::Path;

use chrono::Duration as ChronoDuration;
use serde::Serialize;
use tracing::{debug, warn};

use crate::metrics;
use crate::utils::{iso_local, now_local};

pub use mock::{MockBehavior, MockStatusSource};
pub use model::{resolve_model, UNKNOWN_MODEL};
pub use parser::{ContextUsage, StatusTableParser, TokenEstimate};
pub use status::{CommandStatusSource, StatusSource};

/// Key of the only session the dashboard tracks.
pub const MAIN_SESSION_KEY: &str = "main";

/// Assumed age of the main session.
const SESSION_AGE_HOURS: i64 = 2;

/// The main agent session as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSession {
    /// Session key.
    pub key: String,
    /// Primary model, or `"unknown"`.
    pub model: String,
    /// Estimated input tokens.
    pub tokens_in: u64,
    /// Estimated output tokens.
    pub tokens_out: u64,
    /// Session start, local ISO-8601.
    pub started: String,
}

/// Estimated token split from the status report, or the fallback.
pub async fn estimate_tokens(
    source: &dyn StatusSource,
    parser: &StatusTableParser,
) -> TokenEstimate {
    let estimate = match source.fetch_report().await {
        Ok(report) => match parser.parse(&report) {
            Some(usage) => TokenEstimate::from(usage),
            None => {
                debug!(marker = parser.marker(), "No usage figure for session row");
                metrics::inc_status_command_failures("unparsed");
                TokenEstimate::from_total(0)
            }
        },
        Err(e) => {
            warn!("Error fetching token data: {}", e);
            metrics::inc_status_command_failures(e.reason());
            TokenEstimate::from_total(0)
        }
    };

    estimate.or_fallback()
}

/// Assemble the main session. Never fails: every input degrades to a default.
pub async fn collect_active_session(
    openclaw_config: &Path,
    source: &dyn StatusSource,
    parser: &StatusTableParser,
) -> ActiveSession {
    let model = resolve_model(openclaw_config);
    let tokens = estimate_tokens(source, parser).await;
    let started = now_local() - ChronoDuration::hours(SESSION_AGE_HOURS);

    ActiveSession {
        key: MAIN_SESSION_KEY.to_string(),
        model,
        tokens_in: tokens.tokens_in,
        tokens_out: tokens.tokens_out,
        started: iso_local(started),
    }
}
