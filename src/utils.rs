//! Small helpers shared by the server and handlers.

use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use tracing::info;

/// ISO-8601 local timestamp without offset, e.g. `2026-02-09T14:03:11.512004`.
/// Sub-microsecond precision is truncated. The fraction is always six
/// digits, or omitted entirely when it truncates to zero.
pub fn iso_local(ts: NaiveDateTime) -> String {
    let seconds = ts.format("%Y-%m-%dT%H:%M:%S");
    // Leap seconds carry nanosecond values past 1e9.
    let micros = (ts.nanosecond() / 1_000) % 1_000_000;

    if micros == 0 {
        seconds.to_string()
    } else {
        format!("{seconds}.{micros:06}")
    }
}

/// Current local wall-clock time.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current local wall-clock time as an ISO-8601 string.
pub fn now_iso() -> String {
    iso_local(now_local())
}

/// Convert a filesystem timestamp to local ISO-8601.
pub fn system_time_iso(ts: SystemTime) -> String {
    let local: DateTime<Local> = ts.into();
    iso_local(local.naive_local())
}

/// Resolve once SIGINT or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
