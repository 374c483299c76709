//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitPickerError`] which covers every failure mode of
//! git-picker. It uses `thiserror` for ergonomic error definitions and
//! includes specialized constructors for common failure scenarios.
//!
//! # Public API
//! - [`GitPickerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitPickerError>`
//!
//! # Error Categories
//! - **Git operations**: Repository not found, git2 library errors, failed
//!   listing or action commands
//! - **Selector**: fzf missing/too old, unexpected fzf exit status
//! - **Lookup**: selected commit/branch/reflog not present in the parsed set
//! - **Actions**: selected action name with no catalog match

use thiserror::Error;

/// Domain-specific error types for git-picker
#[derive(Error, Debug)]
pub enum GitPickerError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no working directory")]
    NoWorkdir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git {command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("failed to execute '{command}': exit status {status}")]
    ActionCommandFailed { command: String, status: i32 },

    // Selector errors
    #[error("fzf is not installed. Please install fzf (0.65.x or later), see https://github.com/junegunn/fzf")]
    FzfNotInstalled,

    #[error("fzf version {version} is too old. Please upgrade to 0.65.x or later")]
    FzfVersionTooOld { version: String },

    #[error("fzf failed: {stderr}")]
    SelectorFailed { stderr: String },

    // Lookup errors
    #[error("commit {id} not found")]
    CommitNotFound { id: String },

    #[error("branch {name} not found")]
    BranchNotFound { name: String },

    #[error("reflog entry not found: {line}")]
    ReflogNotFound { line: String },

    // Action resolution errors
    #[error("unknown action: {name}")]
    UnknownAction { name: String },
}

/// Convenience type alias for Results using GitPickerError
pub type Result<T> = std::result::Result<T, GitPickerError>;

impl GitPickerError {
    /// Create a failed-listing error carrying the command and its stderr
    pub fn git_command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a failed-action error for a non-zero executor exit
    pub fn action_command_failed(command: impl Into<String>, status: i32) -> Self {
        Self::ActionCommandFailed {
            command: command.into(),
            status,
        }
    }

    /// Create a selector failure carrying captured stderr
    pub fn selector_failed(stderr: impl Into<String>) -> Self {
        Self::SelectorFailed {
            stderr: stderr.into(),
        }
    }

    /// Create a commit lookup-miss error
    pub fn commit_not_found(id: impl Into<String>) -> Self {
        Self::CommitNotFound { id: id.into() }
    }

    /// Create a branch lookup-miss error
    pub fn branch_not_found(name: impl Into<String>) -> Self {
        Self::BranchNotFound { name: name.into() }
    }

    /// Create a reflog lookup-miss error
    pub fn reflog_not_found(line: impl Into<String>) -> Self {
        Self::ReflogNotFound { line: line.into() }
    }

    /// Create an unknown-action error
    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::UnknownAction { name: name.into() }
    }
}
