//! Token usage trends.
//!
//! Figures are synthetic placeholders until session logs are aggregated;
//! the shape is what the dashboard charts.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Days of history in the trend chart.
pub const TREND_DAYS: u64 = 7;

/// Token totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTokens {
    /// Day, `YYYY-MM-DD`.
    pub date: String,
    /// Input tokens.
    pub tokens_in: u64,
    /// Output tokens.
    pub tokens_out: u64,
}

/// Usage of the running session against its budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionBudget {
    /// Input tokens.
    pub tokens_in: u64,
    /// Output tokens.
    pub tokens_out: u64,
    /// Context budget.
    pub budget: u64,
    /// Share of the budget used, in percent.
    pub usage_pct: f64,
}

/// Current session budget figure.
pub const CURRENT_SESSION: SessionBudget = SessionBudget {
    tokens_in: 113_000,
    tokens_out: 8_000,
    budget: 200_000,
    usage_pct: 60.5,
};

/// Daily series for the [`TREND_DAYS`] days before `today`, oldest first.
/// Day offset `i` (days ago) carries `50000 + 5000·i` in and `3000 + 300·i` out.
pub fn daily_series(today: NaiveDate) -> Vec<DailyTokens> {
    (1..=TREND_DAYS)
        .rev()
        .map(|days_ago| DailyTokens {
            date: today
                .checked_sub_days(Days::new(days_ago))
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string(),
            tokens_in: 50_000 + days_ago * 5_000,
            tokens_out: 3_000 + days_ago * 300,
        })
        .collect()
}
