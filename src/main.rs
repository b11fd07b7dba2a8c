//! sheetnav binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use sheetnav::{app, args, config, util};

struct SheetnavTimer;

impl tracing_subscriber::fmt::time::FormatTime for SheetnavTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&util::log_timestamp()) // "YYYY-MM-DD-T HH:MM:SS"
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `~/.config/sheetnav/logs/sheetnav.log`.
///
/// Inputs:
/// - `level`: Fallback filter when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = config::logs_dir().join("sheetnav.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(SheetnavTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(SheetnavTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let mut settings = config::load_settings();
    args::apply_overrides(&cli, &mut settings);
    tracing::info!(endpoint = %settings.endpoint_url(), "sheetnav starting");

    let result = if let Some(path) = &cli.export {
        args::export::handle_export(&settings, path, cli.search.as_deref()).await
    } else if let Some(keyword) = &cli.search {
        args::search::handle_search(&settings, keyword, cli.json).await
    } else {
        app::run(settings).await
    };

    match result {
        Ok(()) => {
            tracing::info!("sheetnav exited");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "sheetnav failed");
            eprintln!("sheetnav: {err}");
            ExitCode::FAILURE
        }
    }
}
