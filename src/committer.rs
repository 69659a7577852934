//! The run-once commit cycle
//!
//! One invocation performs exactly one cycle: increment the counter, append
//! to the activity log, stage both files, commit, and push when a remote is
//! configured. There are no retries; the caller re-invokes the whole cycle
//! on the next schedule tick.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::git::{GitError, GitRepo};
use crate::state::{ActivityLog, CommitRecord, CounterFile, StateError, StateLock};
use crate::util::clock::Clock;
use crate::util::messages::{format_commit_message, pick_commit_message};

/// Remote the cycle pushes to when configured
pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Error, Debug)]
pub enum CommitterError {
    #[error("No git working tree at {0}; run `git init` first")]
    NoWorkingTree(PathBuf),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Git(#[from] GitError),
}

/// Orchestrates one read-modify-write-commit cycle
pub struct Committer<C: Clock> {
    settings: Settings,
    clock: C,
}

impl<C: Clock> Committer<C> {
    pub fn new(settings: Settings, clock: C) -> Self {
        Self { settings, clock }
    }

    /// Run one full cycle, returning the new counter value on success.
    ///
    /// The working-tree check runs before anything else so a missing
    /// repository fails without mutating state. A push failure is recovered
    /// here: the local commit already stands, so the cycle still succeeds.
    pub fn run(&self) -> Result<u64, CommitterError> {
        let repo = match GitRepo::open(&self.settings.project_root) {
            Ok(repo) => repo,
            Err(GitError::NotAGitRepo(path)) => {
                return Err(CommitterError::NoWorkingTree(path));
            }
            Err(e) => return Err(e.into()),
        };

        let _lock = StateLock::acquire(self.settings.lock_path.clone())?;

        let has_remote = repo.has_remote(DEFAULT_REMOTE)?;
        if !has_remote {
            warn!("No remote repository configured. Commit will be local only.");
        }

        let counter_file = CounterFile::new(self.settings.counter_path.clone());
        let counter = counter_file.read()? + 1;
        counter_file.write(counter)?;
        info!(counter, "Counter updated");

        let mut activity = ActivityLog::load(&self.settings.activity_path)?;
        activity.append(CommitRecord::new(self.clock.now(), counter));
        activity.save(&self.settings.activity_path)?;
        info!(entries = activity.len(), "Activity log updated");

        let message = format_commit_message(pick_commit_message(), counter);

        repo.stage(&[
            self.settings.rel_to_root(&self.settings.counter_path),
            self.settings.rel_to_root(&self.settings.activity_path),
        ])?;
        repo.commit(&message)?;
        info!(message = %message, "Created commit");

        if has_remote && self.settings.push_enabled {
            match repo.push(DEFAULT_REMOTE) {
                Ok(()) => info!("Pushed to remote repository"),
                Err(e) => {
                    error!(error = %e, "Failed to push to remote");
                    info!("Commit was created locally");
                }
            }
        } else if has_remote {
            info!("Push disabled - commit saved locally");
        } else {
            info!("No remote configured - commit saved locally");
        }

        Ok(counter)
    }
}
