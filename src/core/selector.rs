//! Interaction with the external fuzzy selector (fzf).
//!
//! [`FzfSelector`] owns the two selection round trips of an interaction:
//! entity selection (raw listing lines on stdin, one chosen line back) and
//! action selection (tab-delimited encoded lines with a preview of the full
//! command). User cancellation (ESC, Ctrl+C, or an empty selection) is the
//! [`Selection::Cancelled`] outcome, never an error; unexpected exit
//! statuses are surfaced with fzf's captured stderr.

use crate::core::{
    action::{
        decode_action, ActionCatalog, ActionTarget, ActionType, Selection, BRANCH_ACTIONS,
        COMMIT_ACTIONS, REFLOG_ACTIONS,
    },
    branch::{find_branch_by_name, Branch},
    commit::{find_commit_by_id, Commit},
    config::Settings,
    error::{GitPickerError, Result},
    reflog::{find_reflog_by_raw_line, Reflog},
};
use std::io::Write;
use std::process::{Command, Stdio};

// fzf exits 1 for "no match" and 130 for ESC/Ctrl+C; both mean the user
// backed out.
const CANCEL_EXIT_CODES: [i32; 2] = [1, 130];

const MIN_SUPPORTED_VERSION: (u32, u32) = (0, 65);

pub struct FzfSelector {
    layout: String,
}

impl FzfSelector {
    /// Validate that fzf is installed and recent enough, then build a
    /// selector using the configured layout.
    pub fn new(settings: &Settings) -> Result<Self> {
        validate_fzf()?;
        Ok(FzfSelector {
            layout: settings.fzf_layout.clone(),
        })
    }

    /// Present the commit listing; the selected line is resolved back to
    /// its commit by id (the line's first field).
    pub fn select_commit<'a>(&self, commits: &'a [Commit]) -> Result<Selection<&'a Commit>> {
        let args = [
            "--ansi".to_string(),
            "--prompt=git-picker-log> ".to_string(),
            format!("--layout={}", self.layout),
            "--preview".to_string(),
            "echo {} | awk '{print $1}' | xargs git show --color=always --stat -p".to_string(),
            "--preview-window=right:60%:wrap".to_string(),
            "--bind".to_string(),
            "shift-down:preview-down,shift-up:preview-up".to_string(),
            "--bind".to_string(),
            "pgdn:preview-page-down,pgup:preview-page-up".to_string(),
            "--bind".to_string(),
            "ctrl-s:toggle-preview".to_string(),
        ];

        let input = raw_lines(commits);
        match self.run_fzf(&args, &input)? {
            Selection::Cancelled => Ok(Selection::Cancelled),
            Selection::Picked(line) => {
                let id = first_field(&line);
                log::debug!("selected commit id: {id}");
                Ok(Selection::Picked(find_commit_by_id(commits, id)?))
            }
        }
    }

    /// Present the branch listing; the selected line is resolved back to
    /// its branch by name (the line's first field).
    pub fn select_branch<'a>(&self, branches: &'a [Branch]) -> Result<Selection<&'a Branch>> {
        let args = [
            "--ansi".to_string(),
            "--prompt=git-picker-branch> ".to_string(),
            format!("--layout={}", self.layout),
            "--preview".to_string(),
            "echo {} | awk '{print $1}' | xargs git log --oneline --graph --decorate".to_string(),
            "--preview-window=down:65%:nowrap".to_string(),
            "--bind".to_string(),
            "ctrl-d:preview-down,ctrl-u:preview-up".to_string(),
            "--bind".to_string(),
            "pgdn:preview-page-down,pgup:preview-page-up".to_string(),
            "--bind".to_string(),
            "ctrl-s:toggle-preview".to_string(),
        ];

        let input = raw_lines(branches);
        match self.run_fzf(&args, &input)? {
            Selection::Cancelled => Ok(Selection::Cancelled),
            Selection::Picked(line) => {
                let name = first_field(&line);
                log::debug!("selected branch: {name}");
                Ok(Selection::Picked(find_branch_by_name(branches, name)?))
            }
        }
    }

    /// Present the reflog listing; reflog ids repeat across entries, so the
    /// selected line is matched verbatim instead of by first field.
    pub fn select_reflog<'a>(&self, entries: &'a [Reflog]) -> Result<Selection<&'a Reflog>> {
        let args = [
            "--ansi".to_string(),
            "--prompt=git-picker-reflog> ".to_string(),
            format!("--layout={}", self.layout),
            "--preview".to_string(),
            "echo {} | awk '{print $1}' | xargs git show --stat --oneline".to_string(),
            "--preview-window=down:65%:nowrap".to_string(),
            "--bind".to_string(),
            "ctrl-d:preview-down,ctrl-u:preview-up".to_string(),
            "--bind".to_string(),
            "pgdn:preview-page-down,pgup:preview-page-up".to_string(),
            "--bind".to_string(),
            "ctrl-s:toggle-preview".to_string(),
        ];

        let input = raw_lines(entries);
        match self.run_fzf(&args, &input)? {
            Selection::Cancelled => Ok(Selection::Cancelled),
            Selection::Picked(line) => {
                log::debug!("selected reflog line: {line}");
                Ok(Selection::Picked(find_reflog_by_raw_line(entries, &line)?))
            }
        }
    }

    pub fn select_commit_action(&self, commit: &Commit) -> Result<Selection<&'static ActionType>> {
        self.select_action(commit, &COMMIT_ACTIONS, "git-picker-log> ")
    }

    pub fn select_branch_action(&self, branch: &Branch) -> Result<Selection<&'static ActionType>> {
        self.select_action(branch, &BRANCH_ACTIONS, "git-picker-branch> ")
    }

    pub fn select_reflog_action(&self, entry: &Reflog) -> Result<Selection<&'static ActionType>> {
        self.select_action(entry, &REFLOG_ACTIONS, "git-picker-reflog> ")
    }

    /// Second round trip: encoded action lines in, one decoded action out.
    /// Only the name column is listed; the preview shows the description
    /// and the full command.
    fn select_action<T: ActionTarget>(
        &self,
        target: &T,
        catalog: &ActionCatalog,
        prompt: &str,
    ) -> Result<Selection<&'static ActionType>> {
        let args = [
            "--ansi".to_string(),
            format!("--layout={}", self.layout),
            format!("--prompt={prompt}"),
            "--delimiter".to_string(),
            "\t".to_string(),
            "--with-nth=1".to_string(),
            "--preview".to_string(),
            "printf '%s\n%s\n' {2} {3}".to_string(),
            "--preview-window=right:65%:wrap".to_string(),
            "--border".to_string(),
        ];

        let input = target.action_input();
        log::debug!("action selector input:\n{input}");

        match self.run_fzf(&args, &input)? {
            Selection::Cancelled => Ok(Selection::Cancelled),
            Selection::Picked(line) => decode_action(&line, catalog),
        }
    }

    /// One blocking fzf round trip: write `input` to its stdin, wait, and
    /// translate the exit status into a [`Selection`].
    fn run_fzf(&self, args: &[String], input: &str) -> Result<Selection<String>> {
        let mut child = Command::new("fzf")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(fzf_spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            // fzf may exit before consuming all input; a broken pipe here is
            // not an error, the exit status below decides the outcome
            let _ = stdin.write_all(input.as_bytes());
        }

        let output = child.wait_with_output()?;

        match output.status.code() {
            Some(0) => {
                let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if selected.is_empty() {
                    Ok(Selection::Cancelled)
                } else {
                    Ok(Selection::Picked(selected))
                }
            }
            Some(code) if CANCEL_EXIT_CODES.contains(&code) => {
                log::debug!("user cancelled selection (fzf exit {code})");
                Ok(Selection::Cancelled)
            }
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(GitPickerError::selector_failed(stderr.trim()))
            }
        }
    }
}

fn raw_lines<T: ActionTarget>(entities: &[T]) -> String {
    entities
        .iter()
        .map(|entity| format!("{}\n", entity.raw_line()))
        .collect()
}

fn first_field(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or(line)
}

fn fzf_spawn_error(err: std::io::Error) -> GitPickerError {
    if err.kind() == std::io::ErrorKind::NotFound {
        GitPickerError::FzfNotInstalled
    } else {
        GitPickerError::Io(err)
    }
}

/// Check that fzf runs and is at least 0.65.
fn validate_fzf() -> Result<()> {
    let output = Command::new("fzf")
        .arg("--version")
        .output()
        .map_err(fzf_spawn_error)?;

    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    match parse_fzf_version(&version) {
        Some(parsed) if parsed >= MIN_SUPPORTED_VERSION => Ok(()),
        Some(_) => Err(GitPickerError::FzfVersionTooOld { version }),
        None => {
            // Unparseable version output; let the actual invocation decide.
            log::warn!("could not parse fzf version output: {version}");
            Ok(())
        }
    }
}

/// Extract `(major, minor)` from output like `0.65.2 (d471067)`.
fn parse_fzf_version(output: &str) -> Option<(u32, u32)> {
    let mut parts = output.split_whitespace().next()?.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}
