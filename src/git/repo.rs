//! Git collaborator for staging, committing, and pushing the state files
//!
//! All operations shell out to the `git` binary. The committer only needs a
//! handful of primitives; anything richer belongs to git itself.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git command failed: {0}")]
    CommandFailed(String),
    #[error("Not a git repository: {0}")]
    NotAGitRepo(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the working tree enclosing the state files
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Open the working tree at `root`, verifying it is initialized.
    pub fn open(root: &Path) -> Result<Self, GitError> {
        if !root.join(".git").exists() {
            return Err(GitError::NotAGitRepo(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List configured remote names.
    pub fn remotes(&self) -> Result<Vec<String>, GitError> {
        let stdout = self.git(&["remote"])?;
        Ok(stdout
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }

    /// Whether a remote named `name` is configured.
    pub fn has_remote(&self, name: &str) -> Result<bool, GitError> {
        Ok(self.remotes()?.iter().any(|remote| remote == name))
    }

    /// Stage the given paths in the index.
    ///
    /// Relative paths are resolved by git against the repository root, not
    /// the process working directory.
    pub fn stage(&self, paths: &[&Path]) -> Result<(), GitError> {
        let mut cmd = Command::new("git");
        cmd.args(["add", "--"]);
        for path in paths {
            cmd.arg(path);
        }

        let output = cmd.current_dir(&self.root).output()?;
        if !output.status.success() {
            return Err(GitError::CommandFailed(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }
        Ok(())
    }

    /// Create a commit with `message` from the staged changes.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.git(&["commit", "-m", message]).map(|_| ())
    }

    /// Push the current branch to `remote`.
    pub fn push(&self, remote: &str) -> Result<(), GitError> {
        self.git(&["push", remote, "HEAD"]).map(|_| ())
    }

    /// Run a git subcommand in the repository, returning stdout.
    fn git(&self, args: &[&str]) -> Result<String, GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()?;

        if !output.status.success() {
            return Err(GitError::CommandFailed(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
