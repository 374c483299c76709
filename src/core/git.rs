//! Git repository operations: listing capture and action execution.
//!
//! This module provides [`GitRepo`], the executor-side collaborator. It uses
//! the `git2` library for repository discovery and the `git` binary for
//! everything the picker consumes or runs: the three listing commands are
//! captured as text for the parsers, and the chosen action command runs with
//! the terminal's stdio inherited so interactive actions (editor-based
//! rebase, revert) behave normally.
//!
//! # Public API
//! - [`GitRepo`]: repository handle with listing capture and action execution

use crate::core::{
    action::{ActionTarget, ActionType},
    error::{GitPickerError, Result},
};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    /// Discover the repository containing `path`.
    ///
    /// Fails with [`GitPickerError::NotInGitRepo`] outside a repository and
    /// with [`GitPickerError::NoWorkdir`] for bare repositories.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| GitPickerError::NotInGitRepo)?;
        let workdir = repo.workdir().ok_or(GitPickerError::NoWorkdir)?;
        Ok(GitRepo {
            workdir: workdir.to_path_buf(),
        })
    }

    /// Discover the repository containing the current directory
    pub fn open_current() -> Result<Self> {
        GitRepo::open(std::env::current_dir()?)
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run a git subcommand in the working directory and capture its stdout
    fn capture(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitPickerError::git_command_failed(
                args.join(" "),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Captured `git log --oneline --decorate -n <limit>` output
    pub fn log_listing(&self, limit: usize) -> Result<String> {
        self.capture(&["log", "--oneline", "--decorate", "-n", &limit.to_string()])
    }

    /// Captured `git branch --all --verbose` output
    pub fn branch_listing(&self) -> Result<String> {
        self.capture(&["branch", "--all", "--verbose"])
    }

    /// Captured `git reflog -n <limit>` output
    pub fn reflog_listing(&self, limit: usize) -> Result<String> {
        self.capture(&["reflog", "-n", &limit.to_string()])
    }

    /// Execute the chosen action against the chosen entity.
    ///
    /// The command runs with this terminal's stdin/stdout/stderr so that
    /// interactive actions work; a non-zero exit is a hard failure.
    pub fn execute_action<T: ActionTarget>(&self, target: &T, action: &ActionType) -> Result<()> {
        let display = target.display_command(action);
        log::debug!("executing action command: {display}");

        let status = Command::new(action.command())
            .args(target.action_args(action))
            .current_dir(&self.workdir)
            .status()?;

        if !status.success() {
            return Err(GitPickerError::action_command_failed(
                display,
                status.code().unwrap_or(-1),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> Result<(TempDir, GitRepo)> {
        let temp_dir = TempDir::new()?;
        let repo_path = temp_dir.path();

        std::process::Command::new("git")
            .args(["init"])
            .current_dir(repo_path)
            .output()?;

        std::process::Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(repo_path)
            .output()?;

        std::process::Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(repo_path)
            .output()?;

        let repo = GitRepo::open(repo_path)?;
        Ok((temp_dir, repo))
    }

    fn commit_file(repo: &GitRepo, name: &str, message: &str) -> Result<()> {
        std::fs::write(repo.workdir().join(name), "content\n")?;
        std::process::Command::new("git")
            .args(["add", name])
            .current_dir(repo.workdir())
            .output()?;
        std::process::Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(repo.workdir())
            .output()?;
        Ok(())
    }

    #[test]
    fn test_open_non_git_directory() {
        let result = GitRepo::open("/tmp/definitely/not/a/git/repo");
        assert!(matches!(result, Err(GitPickerError::NotInGitRepo)));
    }

    #[test]
    fn test_log_listing_contains_commits() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        commit_file(&repo, "a.txt", "first commit")?;
        commit_file(&repo, "b.txt", "second commit")?;

        let listing = repo.log_listing(10)?;
        assert!(listing.contains("first commit"));
        assert!(listing.contains("second commit"));
        Ok(())
    }

    #[test]
    fn test_log_listing_respects_limit() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        commit_file(&repo, "a.txt", "first commit")?;
        commit_file(&repo, "b.txt", "second commit")?;

        let listing = repo.log_listing(1)?;
        assert_eq!(listing.trim().lines().count(), 1);
        assert!(listing.contains("second commit"));
        Ok(())
    }

    #[test]
    fn test_branch_listing_marks_current() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        commit_file(&repo, "a.txt", "first commit")?;

        let listing = repo.branch_listing()?;
        assert!(listing.contains('*'));
        assert!(listing.contains("first commit"));
        Ok(())
    }

    #[test]
    fn test_reflog_listing_has_head_pointers() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        commit_file(&repo, "a.txt", "first commit")?;

        let listing = repo.reflog_listing(10)?;
        assert!(listing.contains("@{0}"));
        Ok(())
    }

    #[test]
    fn test_capture_failure_carries_stderr() -> Result<()> {
        let (_temp_dir, repo) = setup_test_repo()?;
        // log of an empty repo fails; stderr must reach the error
        let err = repo.log_listing(10).unwrap_err();
        match err {
            GitPickerError::GitCommandFailed { command, stderr } => {
                assert!(command.starts_with("log"));
                assert!(!stderr.is_empty());
            }
            other => panic!("expected GitCommandFailed, got {other:?}"),
        }
        Ok(())
    }
}
