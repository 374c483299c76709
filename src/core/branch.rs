//! Branch entity and `git branch --all --verbose` parsing.
//!
//! Verbose branch listings come in two shapes: the normal
//! `name <short-hash> <subject>` line, and symbolic-reference lines such as
//! `remotes/origin/HEAD -> origin/main`, which carry no commit at all. The
//! two shapes are modeled as [`BranchTarget`] variants instead of a magic
//! placeholder commit id.

use crate::core::action::{ActionTarget, ActionType, BRANCH_ACTIONS, BRANCH_GET_LAST_COMMIT};
use crate::core::error::{GitPickerError, Result};

/// What a branch line points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchTarget {
    /// Normal branch: last commit id plus its subject
    Commit { id: String, message: String },
    /// Symbolic reference / alias, e.g. `remotes/origin/HEAD -> origin/main`
    Symbolic { target: String },
}

/// One branch from a `git branch --all --verbose` listing, immutable after
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    is_current: bool,
    name: String,
    target: BranchTarget,
    raw_line: String,
}

impl Branch {
    /// True for the line carrying the leading `*` marker; at most one per
    /// listing (guaranteed upstream)
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &BranchTarget {
        &self.target
    }

    /// Short hash of the last commit; `None` for symbolic references
    pub fn last_commit_id(&self) -> Option<&str> {
        match &self.target {
            BranchTarget::Commit { id, .. } => Some(id),
            BranchTarget::Symbolic { .. } => None,
        }
    }

    /// Last commit subject, or the synthesized `-> target` description for
    /// symbolic references
    pub fn last_commit_message(&self) -> String {
        match &self.target {
            BranchTarget::Commit { message, .. } => message.clone(),
            BranchTarget::Symbolic { target } => format!("-> {target}"),
        }
    }
}

impl ActionTarget for Branch {
    fn actions(&self) -> &'static [ActionType] {
        BRANCH_ACTIONS.all()
    }

    fn action_argument(&self, action: &ActionType) -> &str {
        if action == &BRANCH_GET_LAST_COMMIT {
            // A symbolic reference has no commit of its own; the redirect
            // target stands in.
            match &self.target {
                BranchTarget::Commit { id, .. } => id,
                BranchTarget::Symbolic { target } => target,
            }
        } else {
            &self.name
        }
    }

    fn raw_line(&self) -> &str {
        &self.raw_line
    }
}

/// Parse the captured output of `git branch --all --verbose`.
///
/// The leading `*` marker is stripped before the stored raw line, so the
/// first whitespace field of every raw line is the branch name; selection
/// decoding relies on that. Lines with fewer than two fields are skipped.
pub fn parse_branches(listing: &str) -> Vec<Branch> {
    let mut branches = Vec::new();

    for line in listing.lines() {
        let mut line = line.trim();
        if line.is_empty() {
            continue;
        }

        let is_current = line.starts_with('*');
        if is_current {
            line = line[1..].trim_start();
        }

        // Symbolic reference, e.g. "remotes/origin/HEAD -> origin/main"
        if let Some((name, target)) = line.split_once("->") {
            branches.push(Branch {
                is_current,
                name: name.trim().to_string(),
                target: BranchTarget::Symbolic {
                    target: target.trim().to_string(),
                },
                raw_line: line.to_string(),
            });
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            log::debug!("skipping malformed branch line: {line}");
            continue;
        }

        branches.push(Branch {
            is_current,
            name: fields[0].to_string(),
            target: BranchTarget::Commit {
                id: fields[1].to_string(),
                message: fields[2..].join(" "),
            },
            raw_line: line.to_string(),
        });
    }

    branches
}

/// Find the branch whose name matches the first field of a selected line.
pub fn find_branch_by_name<'a>(branches: &'a [Branch], name: &str) -> Result<&'a Branch> {
    branches
        .iter()
        .find(|branch| branch.name == name)
        .ok_or_else(|| GitPickerError::branch_not_found(name))
}
