//! Canned commit message pool

use rand::seq::IndexedRandom;

/// Fixed pool of commit phrases
pub const COMMIT_MESSAGES: &[&str] = &[
    "Update activity tracking",
    "Sync project data",
    "Update counter",
    "Daily commit",
    "Increment tracking data",
    "Update activity log",
    "Sync changes",
    "Update project state",
    "Automated update",
    "Update tracking information",
    "Sync activity data",
    "Update metrics",
    "Daily synchronization",
    "Update project files",
    "Automated commit",
];

/// Pick one phrase uniformly at random from the pool
pub fn pick_commit_message() -> &'static str {
    let mut rng = rand::rng();
    COMMIT_MESSAGES
        .choose(&mut rng)
        .copied()
        .unwrap_or(COMMIT_MESSAGES[0])
}

/// Full commit message for a cycle: `"<phrase> #<counter>"`
pub fn format_commit_message(phrase: &str, counter: u64) -> String {
    format!("{} #{}", phrase, counter)
}
