use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::assertions;

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_help_lists_subcommands() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("git-picker")?;
        cmd.arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("log"))
            .stdout(predicate::str::contains("branch"))
            .stdout(predicate::str::contains("reflog"));
        Ok(())
    }

    #[test]
    fn test_version_flag() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("git-picker")?;
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("git-picker"));
        Ok(())
    }

    #[test]
    fn test_no_arguments_shows_usage_error() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("git-picker")?;
        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
        Ok(())
    }

    #[test]
    fn test_log_not_in_git_repo() -> anyhow::Result<()> {
        // Use completely independent temp directory to avoid git discovery
        use tempfile::TempDir;
        let temp_dir = TempDir::new()?;
        let non_repo_path = temp_dir.path().join("not-a-repo");
        std::fs::create_dir(&non_repo_path)?;

        let mut cmd = Command::cargo_bin("git-picker")?;
        cmd.arg("log")
            .current_dir(&non_repo_path)
            .assert()
            .failure()
            .stdout(assertions::not_in_git_repo());
        Ok(())
    }

    #[test]
    fn test_branch_not_in_git_repo() -> anyhow::Result<()> {
        use tempfile::TempDir;
        let temp_dir = TempDir::new()?;
        let non_repo_path = temp_dir.path().join("not-a-repo");
        std::fs::create_dir(&non_repo_path)?;

        let mut cmd = Command::cargo_bin("git-picker")?;
        cmd.arg("branch")
            .current_dir(&non_repo_path)
            .assert()
            .failure()
            .stdout(assertions::not_in_git_repo());
        Ok(())
    }

    #[test]
    fn test_reflog_not_in_git_repo() -> anyhow::Result<()> {
        use tempfile::TempDir;
        let temp_dir = TempDir::new()?;
        let non_repo_path = temp_dir.path().join("not-a-repo");
        std::fs::create_dir(&non_repo_path)?;

        let mut cmd = Command::cargo_bin("git-picker")?;
        cmd.arg("reflog")
            .current_dir(&non_repo_path)
            .assert()
            .failure()
            .stdout(assertions::not_in_git_repo());
        Ok(())
    }
}
