use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Resolved configuration for one committer run.
///
/// Everything the cycle touches goes through this object: there is no
/// module-level path constant or global logger handle anywhere in the crate,
/// so tests can run isolated cycles against scratch directories.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Repository root containing the working tree
    pub project_root: PathBuf,
    /// Directory holding the counter and activity files
    pub data_dir: PathBuf,
    /// Counter file path
    pub counter_path: PathBuf,
    /// Activity log file path
    pub activity_path: PathBuf,
    /// Lock file guarding the read-modify-write
    pub lock_path: PathBuf,
    /// Directory for the run log file
    pub log_dir: PathBuf,
    /// Whether to attempt a push when a remote is configured
    pub push_enabled: bool,
}

impl Settings {
    pub const COUNTER_FILE: &'static str = "counter.txt";
    pub const ACTIVITY_FILE: &'static str = "activity.json";
    pub const LOCK_FILE: &'static str = ".cadence.lock";
    pub const LOG_FILE: &'static str = "cadence.log";

    /// Resolve settings from CLI flags, `CADENCE_*` environment variables,
    /// and defaults, in that order of precedence.
    pub fn resolve(cli: &Cli) -> Self {
        let project_root = cli
            .project_root
            .clone()
            .or_else(|| env_path("CADENCE_PROJECT_ROOT"))
            .unwrap_or_else(|| PathBuf::from("."));

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| env_path("CADENCE_DATA_DIR"))
            .unwrap_or_else(|| project_root.join("data"));

        let log_dir = cli
            .log_dir
            .clone()
            .or_else(|| env_path("CADENCE_LOG_DIR"))
            .unwrap_or_else(|| project_root.join("logs"));

        Self::from_parts(project_root, data_dir, log_dir, !cli.no_push)
    }

    /// Build settings from explicit paths. Tests use this directly to point a
    /// cycle at a scratch repository.
    pub fn from_parts(
        project_root: PathBuf,
        data_dir: PathBuf,
        log_dir: PathBuf,
        push_enabled: bool,
    ) -> Self {
        let counter_path = data_dir.join(Self::COUNTER_FILE);
        let activity_path = data_dir.join(Self::ACTIVITY_FILE);
        let lock_path = data_dir.join(Self::LOCK_FILE);

        Self {
            project_root,
            data_dir,
            counter_path,
            activity_path,
            lock_path,
            log_dir,
            push_enabled,
        }
    }

    /// Path of the run log file inside the log directory
    pub fn log_file_path(&self) -> PathBuf {
        self.log_dir.join(Self::LOG_FILE)
    }

    /// Strip the project root from a state-file path for staging.
    ///
    /// `git add` resolves relative paths against the repository root. Paths
    /// outside the root (a custom `--data-dir` elsewhere) are passed through
    /// unchanged and left to git to resolve.
    pub fn rel_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}
