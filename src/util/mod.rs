//! Shared utilities

pub mod clock;
pub mod messages;

pub use clock::{Clock, FixedClock, SystemClock};
pub use messages::{format_commit_message, pick_commit_message, COMMIT_MESSAGES};
