//! Mock status source for unit testing.
//!
//! Lets handler tests exercise the fallback policy without the real
//! `openclaw` executable on the machine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::StatusError;

use super::status::StatusSource;

/// What the mock returns when asked for a report.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text as the report.
    Report(String),
    /// Fail as if the command exited with this code.
    ExitCode(i32),
    /// Fail as if the deadline elapsed.
    Timeout(Duration),
    /// Fail as if the executable were missing.
    Missing,
}

/// Mock status source for testing.
#[derive(Debug, Clone)]
pub struct MockStatusSource {
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
}

impl MockStatusSource {
    /// Mock returning `report` verbatim.
    pub fn with_report(report: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Report(report.into()))
    }

    /// Mock with explicit behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of reports requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for MockStatusSource {
    async fn fetch_report(&self) -> Result<String, StatusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Report(report) => Ok(report.clone()),
            MockBehavior::ExitCode(code) => Err(StatusError::NonZeroExit { code: Some(*code) }),
            MockBehavior::Timeout(after) => Err(StatusError::Timeout {
                seconds: after.as_secs_f64(),
            }),
            MockBehavior::Missing => Err(StatusError::Spawn {
                program: "openclaw".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls() {
        let mock = MockStatusSource::with_report("ok");
        assert_eq!(mock.fetch_report().await.unwrap(), "ok");
        assert_eq!(mock.fetch_report().await.unwrap(), "ok");
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn missing_behaves_like_spawn_failure() {
        let mock = MockStatusSource::with_behavior(MockBehavior::Missing);
        assert!(matches!(
            mock.fetch_report().await,
            Err(StatusError::Spawn { .. })
        ));
    }
}
