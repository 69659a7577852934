use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use cadence::{Cli, Committer, Settings, SystemClock};

fn main() -> ExitCode {
    // Pick up an optional .env (git credentials, CADENCE_* overrides)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli);

    if let Err(e) = init_logging(&settings) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    tracing::info!(root = %settings.project_root.display(), "Starting commit cycle");

    let committer = Committer::new(settings, SystemClock);
    match committer.run() {
        Ok(counter) => {
            tracing::info!(counter, "Successfully completed commit");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to complete commit");
            ExitCode::FAILURE
        }
    }
}

/// Log to both an append-mode file (<log_dir>/cadence.log) and stderr.
fn init_logging(settings: &Settings) -> Result<()> {
    fs::create_dir_all(&settings.log_dir)
        .with_context(|| format!("create log directory {}", settings.log_dir.display()))?;

    let log_path = settings.log_file_path();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file).and(std::io::stderr))
        .with_ansi(false) // Keep the log file free of ANSI colors
        .init();

    Ok(())
}
