//! OpenClaw BI dashboard API entry point.

use std::time::Duration;

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use openclaw_dashboard::api::{create_router, AppState};
use openclaw_dashboard::config::Config;
use openclaw_dashboard::error::DashboardError;
use openclaw_dashboard::metrics;
use openclaw_dashboard::session::{
    resolve_model, CommandStatusSource, StatusSource, StatusTableParser, TokenEstimate,
};
use openclaw_dashboard::utils::shutdown_signal;
use openclaw_dashboard::workspace::MemoryDir;

/// Interval between Prometheus histogram upkeep runs.
const METRICS_UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Read-only HTTP API for the OpenClaw BI dashboard.
#[derive(Parser, Debug)]
#[command(name = "openclaw-dashboard")]
#[command(about = "Serve workspace, session and automation summaries to the BI dashboard")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard API (default).
    Serve {
        /// Bind address (overrides HOST).
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Run the status command once and print the parsed usage (diagnostic).
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging. A config that fails to load is reported later by
    // the subcommand; logging falls back to defaults until then.
    let log_config = Config::load().unwrap_or_default();
    let filter = EnvFilter::try_new(log_config.log_directive(args.verbose))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if args.json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Status) => cmd_status().await,
        Some(Command::Serve { host, port }) => cmd_serve(host, port).await,
        None => cmd_serve(None, None).await,
    }
}

/// Load and validate configuration.
fn load_config() -> anyhow::Result<Config> {
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(DashboardError::InvalidConfig(e).into());
    }

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("OPENCLAW DASHBOARD - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    let memory = MemoryDir::new(config.memory_dir());
    let openclaw_config = config.openclaw_config_path();

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Workspace: {}", config.workspace_root().display());
    println!(
        "  Memory Dir: {} ({})",
        memory.path().display(),
        if memory.exists() {
            format!("{} markdown files", memory.count())
        } else {
            "missing".to_string()
        }
    );
    println!(
        "  OpenClaw Config: {} ({})",
        openclaw_config.display(),
        if openclaw_config.exists() { "found" } else { "missing" }
    );
    println!("  Model: {}", resolve_model(&openclaw_config));
    println!(
        "  Status Command: {} (timeout {}s)",
        CommandStatusSource::from_config(&config).command_line(),
        config.status_timeout_secs
    );
    println!("  Session Marker: {}", config.session_marker);
    println!("  CORS Origins: {}", config.cors_origins.join(", "));
    println!("  Listen: {}:{}", config.host, config.port);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the status command once and print what the sessions endpoint would see.
async fn cmd_status() -> anyhow::Result<()> {
    let config = load_config()?;
    let source = CommandStatusSource::from_config(&config);
    let parser = StatusTableParser::new(config.session_marker.clone());

    println!("======================================================================");
    println!("OPENCLAW DASHBOARD - STATUS CHECK");
    println!("======================================================================");
    println!("Command: {}", source.command_line());
    println!("Marker: {}", parser.marker());

    let usage = match source.fetch_report().await {
        Ok(report) => {
            println!("Report: {} lines", report.lines().count());
            parser.parse(&report)
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            None
        }
    };

    match usage {
        Some(usage) => {
            let estimate = TokenEstimate::from(usage);
            println!(
                "Context: {}k/{}k ({})",
                usage.used_k,
                usage.limit_k,
                usage
                    .percent
                    .map(|p| format!("{p}%"))
                    .unwrap_or_else(|| "n/a".to_string())
            );
            println!(
                "Estimate: {} in / {} out (90/10 split)",
                estimate.tokens_in, estimate.tokens_out
            );
        }
        None => {
            let fallback = TokenEstimate::FALLBACK;
            println!("No usage figure found for {}", parser.marker());
            println!(
                "Fallback: {} in / {} out",
                fallback.tokens_in, fallback.tokens_out
            );
        }
    }
    println!("======================================================================");

    Ok(())
}

/// Install the Prometheus recorder and keep its histograms trimmed.
fn install_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let upkeep = handle.clone();
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(METRICS_UPKEEP_INTERVAL);
                loop {
                    interval.tick().await;
                    upkeep.run_upkeep();
                }
            });
            metrics::init_metrics();
            Some(handle)
        }
        Err(e) => {
            warn!("Prometheus recorder unavailable: {}", e);
            None
        }
    }
}

/// Serve the dashboard API until SIGINT/SIGTERM.
async fn cmd_serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = load_config()?;

    // Override with CLI args if provided
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Configuration loaded successfully");
    info!("Workspace: {}", config.workspace_root().display());
    info!("OpenClaw config: {}", config.openclaw_config_path().display());
    info!(
        "Status command: {} (timeout {}s)",
        CommandStatusSource::from_config(&config).command_line(),
        config.status_timeout_secs
    );
    info!("CORS origins: {}", config.cors_origins.join(", "));

    let mut app_state = AppState::new(config.clone());
    if let Some(handle) = install_metrics() {
        app_state = app_state.with_prometheus(handle);
    }

    let router = create_router(app_state);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
