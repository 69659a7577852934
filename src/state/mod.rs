//! Persistence for the counter and activity log

mod activity;
mod counter;
mod lock;

pub use activity::{ActivityLog, CommitRecord, ACTIVITY_LOG_CAPACITY};
pub use counter::CounterFile;
pub use lock::StateLock;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Malformed counter file: {0}")]
    MalformedCounter(PathBuf),
    #[error("Malformed activity log {0}: {1}")]
    MalformedActivityLog(PathBuf, #[source] serde_json::Error),
    #[error("Failed to encode activity log: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("State lock already held: {0}")]
    LockHeld(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
