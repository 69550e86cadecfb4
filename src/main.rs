//! launchgrid binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use launchgrid::args::{Args, determine_log_level};

/// Log line timer in local time.
struct LaunchgridTimer;

impl tracing_subscriber::fmt::time::FormatTime for LaunchgridTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&launchgrid::util::log_timestamp(chrono::Local::now()))
    }
}

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter: `RUST_LOG` when set, otherwise the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing, writing to `<logs_dir>/launchgrid.log` or stderr.
fn init_logging(level: &str) {
    let mut log_path = launchgrid::theme::logs_dir();
    log_path.push("launchgrid.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LaunchgridTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup never blocks on the log file
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LaunchgridTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse().normalized();
    init_logging(&determine_log_level(&args));

    tracing::info!(version = launchgrid::changelog::APP_VERSION, "launchgrid starting");
    if let Err(err) = launchgrid::app::run(&args).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("launchgrid: {err}");
        std::process::exit(1);
    }
    tracing::info!("launchgrid exited");
}
