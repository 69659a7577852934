//! Activity log persistence
//!
//! The log is a pretty-printed JSON document with a single `commits` field,
//! bounded to the most recent 1000 records.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::StateError;

/// Maximum number of records retained in the activity log
pub const ACTIVITY_LOG_CAPACITY: usize = 1000;

/// One commit event in the activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full local date-time of the commit event
    pub timestamp: NaiveDateTime,
    /// Counter value persisted in the same cycle
    pub counter: u64,
    /// `%Y-%m-%d` projection of `timestamp`
    pub date: String,
    /// `%H:%M:%S` projection of `timestamp`
    pub time: String,
}

impl CommitRecord {
    /// Build a record for `counter` at `timestamp`, deriving the redundant
    /// date and time projections from the same instant.
    pub fn new(timestamp: NaiveDateTime, counter: u64) -> Self {
        Self {
            date: timestamp.format("%Y-%m-%d").to_string(),
            time: timestamp.format("%H:%M:%S").to_string(),
            timestamp,
            counter,
        }
    }
}

/// The activity log document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub commits: Vec<CommitRecord>,
}

impl ActivityLog {
    /// Load the log from `path`, treating a missing file as an empty log.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| StateError::MalformedActivityLog(path.to_path_buf(), e))
    }

    /// Append a record, evicting the oldest entries beyond capacity.
    pub fn append(&mut self, record: CommitRecord) {
        self.commits.push(record);
        if self.commits.len() > ACTIVITY_LOG_CAPACITY {
            let excess = self.commits.len() - ACTIVITY_LOG_CAPACITY;
            self.commits.drain(..excess);
        }
    }

    /// Persist the log as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Most recently appended record
    pub fn last(&self) -> Option<&CommitRecord> {
        self.commits.last()
    }
}
