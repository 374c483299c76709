//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! real history, branches and reflog entries.

#![allow(dead_code)]

use git_picker::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Sets up a fresh git repository with basic config so commits never prompt
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init", "--initial-branch=main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit on `main`
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git(&repo.path, &["add", "initial.txt"])?;
    git(&repo.path, &["commit", "-m", "Initial commit"])?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Creates and commits a file in one step
pub fn commit_file(repo_path: &Path, filename: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, "content\n")?;
    git(repo_path, &["add", filename])?;
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Creates a branch without switching to it
pub fn create_branch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["branch", name])
}

/// Switches to an existing branch
pub fn checkout_branch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["checkout", name])
}

/// Runs a git command in the repository, ignoring its output
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(())
}
