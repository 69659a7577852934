//! Counter file persistence
//!
//! The counter is a plain-text non-negative integer equal to the number of
//! successful commit cycles since inception.

use std::fs;
use std::path::{Path, PathBuf};

use super::StateError;

/// Handle to the plain-text counter file
#[derive(Debug, Clone)]
pub struct CounterFile {
    path: PathBuf,
}

impl CounterFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current counter value, treating a missing file as 0.
    /// Surrounding whitespace is ignored; anything else is malformed.
    pub fn read(&self) -> Result<u64, StateError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let raw = fs::read_to_string(&self.path)?;
        raw.trim()
            .parse::<u64>()
            .map_err(|_| StateError::MalformedCounter(self.path.clone()))
    }

    /// Write the counter value, creating parent directories as needed.
    pub fn write(&self, value: u64) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value.to_string())?;
        Ok(())
    }
}
