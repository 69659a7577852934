pub mod cli;
pub mod committer;
pub mod config;
pub mod git;
pub mod state;
pub mod util;

pub use cli::Cli;
pub use committer::{Committer, CommitterError, DEFAULT_REMOTE};
pub use config::Settings;
pub use git::{GitError, GitRepo};
pub use state::{ActivityLog, CommitRecord, CounterFile, StateError, StateLock};
pub use util::{Clock, FixedClock, SystemClock, COMMIT_MESSAGES};
