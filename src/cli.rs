//! Command-line interface definition

use std::path::PathBuf;

use clap::Parser;

/// Automated activity committer: runs one commit cycle and exits.
///
/// Each invocation increments the persisted counter, appends a record to the
/// activity log, stages both files, commits them with a randomly chosen
/// message, and pushes when a remote is configured. Recurring invocation is
/// left to an external scheduler.
#[derive(Debug, Parser)]
#[command(name = "cadence", version, about)]
pub struct Cli {
    /// Repository root to operate on (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Directory holding the counter and activity files (defaults to <root>/data)
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the run log file (defaults to <root>/logs)
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Skip pushing even when a remote is configured
    #[arg(long)]
    pub no_push: bool,
}
