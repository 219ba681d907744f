//! Scraping context usage out of the human-readable status table.
//!
//! The status command prints a box-drawn table, one row per session:
//!
//! ```text
//! │ agent:main:main │ agent │ 2h │ claude-sonnet-4-5 │ 69k/1000k (7%) │
//! ```
//!
//! The layout is not a stable interface, so parsing never fails hard: it
//! returns `None` and the caller falls back.

use once_cell::sync::Lazy;
use regex::Regex;

/// Box-drawing column separator used by the status table.
pub const TABLE_DELIMITER: char = '│';

/// Pieces a session row splits into: five columns plus the empty edges.
const TABLE_ROW_MIN_CELLS: usize = 6;

/// `<used>k/<limit>k`, optionally followed by ` (<pct>%)`.
static USAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)k/(\d+)k(?:\s*\((\d+(?:\.\d+)?)%\))?").expect("valid regex")
});

/// Context window usage reported for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextUsage {
    /// Tokens in context, in thousands.
    pub used_k: u64,
    /// Context window size, in thousands.
    pub limit_k: u64,
    /// Percentage printed next to the figures, if any.
    pub percent: Option<f64>,
}

impl ContextUsage {
    /// Tokens currently in context.
    pub fn used_tokens(&self) -> u64 {
        self.used_k.saturating_mul(1000)
    }
}

/// Estimated input/output token split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEstimate {
    /// Input tokens.
    pub tokens_in: u64,
    /// Output tokens.
    pub tokens_out: u64,
}

impl TokenEstimate {
    /// Reported when no usable figure is available.
    pub const FALLBACK: TokenEstimate = TokenEstimate {
        tokens_in: 60_000,
        tokens_out: 6_000,
    };

    /// Split a context total 90% input / 10% output.
    ///
    /// The status table only reports the context total. The ratio is a
    /// rough estimate, not something the tool measures.
    pub fn from_total(total: u64) -> Self {
        Self {
            tokens_in: total / 10 * 9 + total % 10 * 9 / 10,
            tokens_out: total / 10,
        }
    }

    /// Replace zero fields with their fallback values.
    pub fn or_fallback(self) -> Self {
        Self {
            tokens_in: if self.tokens_in > 0 {
                self.tokens_in
            } else {
                Self::FALLBACK.tokens_in
            },
            tokens_out: if self.tokens_out > 0 {
                self.tokens_out
            } else {
                Self::FALLBACK.tokens_out
            },
        }
    }
}

impl From<ContextUsage> for TokenEstimate {
    fn from(usage: ContextUsage) -> Self {
        Self::from_total(usage.used_tokens())
    }
}

/// Locates a session row by marker and reads its usage cell.
#[derive(Debug, Clone)]
pub struct StatusTableParser {
    marker: String,
}

impl StatusTableParser {
    /// Parser for rows containing `marker`, split on [`TABLE_DELIMITER`].
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Row marker.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Usage from the first table row containing the marker.
    ///
    /// Lines that mention the marker but are not table rows (prose, headers)
    /// are skipped. Only the first real row is considered: if its cells carry
    /// no usage figure the result is `None` even when later rows would match.
    pub fn parse(&self, report: &str) -> Option<ContextUsage> {
        let row = report
            .lines()
            .filter(|line| line.contains(&self.marker))
            .find(|line| line.split(TABLE_DELIMITER).count() >= TABLE_ROW_MIN_CELLS)?;

        row.split(TABLE_DELIMITER)
            .map(str::trim)
            .find_map(parse_usage_cell)
    }
}

/// Parse a `69k/1000k (7%)` cell.
pub fn parse_usage_cell(cell: &str) -> Option<ContextUsage> {
    let caps = USAGE_PATTERN.captures(cell)?;

    Some(ContextUsage {
        used_k: caps.get(1)?.as_str().parse().ok()?,
        limit_k: caps.get(2)?.as_str().parse().ok()?,
        percent: caps.get(3).and_then(|m| m.as_str().parse().ok()),
    })
}
