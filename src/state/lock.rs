//! Exclusive-acquisition guard for the persisted state
//!
//! Concurrent invocations must not interleave the counter/log
//! read-modify-write or the staging that follows. The guard is a lock file
//! created with `create_new` semantics and removed on drop.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::StateError;

/// Holds the lock file for the duration of one cycle
#[derive(Debug)]
pub struct StateLock {
    path: PathBuf,
}

impl StateLock {
    /// Acquire the lock, failing fast if another invocation holds it.
    ///
    /// A stale lock file left behind by a killed process is reported, not
    /// auto-broken; the operator removes it manually.
    pub fn acquire(path: PathBuf) -> Result<Self, StateError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                // Record the owning pid so stale locks can be diagnosed
                let _ = write!(file, "{}", std::process::id());
                Ok(Self { path })
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(StateError::LockHeld(path)),
            Err(e) => Err(StateError::Io(e)),
        }
    }
}

impl Drop for StateLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove state lock"
            );
        }
    }
}
