//! Commit entity and `git log --oneline` parsing.
//!
//! A [`Commit`] is one line of oneline log output: the short hash, the
//! message, and the verbatim line (which is what the selector displays and
//! what its preview command reads the hash from).

use crate::core::action::{ActionTarget, ActionType, COMMIT_ACTIONS};
use crate::core::error::{GitPickerError, Result};

/// One commit from a `git log --oneline` listing, immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    id: String,
    message: String,
    raw_line: String,
}

impl Commit {
    /// Short hash; always the first whitespace-delimited token of the raw line
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Commit subject; may be empty
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ActionTarget for Commit {
    fn actions(&self) -> &'static [ActionType] {
        COMMIT_ACTIONS.all()
    }

    fn action_argument(&self, _action: &ActionType) -> &str {
        &self.id
    }

    fn raw_line(&self) -> &str {
        &self.raw_line
    }
}

/// Parse the captured output of `git log --oneline`.
///
/// Each non-blank line splits on the first space into `(id, message)`.
/// Lines without a space are malformed and skipped; the listing never fails
/// as a whole. Output order matches input order (most recent first).
pub fn parse_commits(log: &str) -> Vec<Commit> {
    let mut commits = Vec::new();

    for line in log.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((id, message)) = line.split_once(' ') else {
            log::debug!("skipping malformed commit line: {line}");
            continue;
        };

        commits.push(Commit {
            id: id.to_string(),
            message: message.to_string(),
            raw_line: line.to_string(),
        });
    }

    commits
}

/// Find the commit whose id matches the first field of a selected line.
pub fn find_commit_by_id<'a>(commits: &'a [Commit], id: &str) -> Result<&'a Commit> {
    commits
        .iter()
        .find(|commit| commit.id == id)
        .ok_or_else(|| GitPickerError::commit_not_found(id))
}
