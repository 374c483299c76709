//! Reflog entity and `git reflog` parsing.
//!
//! A reflog line looks like `<hash> HEAD@{n}: <action>: <message>`, but
//! decoration fragments such as `(main, origin/main)` may sit between the
//! hash and the pointer. The line rule pinned here: an optional
//! parenthesized decoration is tolerated and excluded from the pointer
//! field, the action label between the pointer colon and the next colon may
//! not itself contain a colon, and the message after that second colon may.
//! Decorations stay verbatim in the raw line.

use crate::core::action::{ActionTarget, ActionType, REFLOG_ACTIONS};
use crate::core::error::{GitPickerError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static REFLOG_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9a-f]+)\s+(?:\([^)]*\)\s+)?(\S+@\{\d+\}):\s*([^:]*):\s*(.*)$")
        .expect("reflog line regex is valid")
});

/// One entry from a `git reflog` listing, immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflog {
    id: String,
    head_pointer: String,
    message: String,
    raw_line: String,
}

impl Reflog {
    /// Short hash of the entry's commit; not unique across a listing
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stack-position reference, e.g. `HEAD@{0}`; unique within a listing
    /// and strictly increasing in recency order
    pub fn head_pointer(&self) -> &str {
        &self.head_pointer
    }

    /// Free text after the action label
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ActionTarget for Reflog {
    fn actions(&self) -> &'static [ActionType] {
        REFLOG_ACTIONS.all()
    }

    fn action_argument(&self, _action: &ActionType) -> &str {
        &self.head_pointer
    }

    fn raw_line(&self) -> &str {
        &self.raw_line
    }
}

/// Parse the captured output of `git reflog`.
///
/// Lines that do not match the pinned rule (missing pointer or either
/// colon) are skipped with a diagnostic; the listing never fails as a
/// whole. Order is preserved exactly as given, `HEAD@{0}` first.
pub fn parse_reflogs(listing: &str) -> Vec<Reflog> {
    let mut entries = Vec::new();

    for line in listing.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(captures) = REFLOG_LINE_REGEX.captures(line) else {
            log::debug!("skipping malformed reflog line: {line}");
            continue;
        };

        entries.push(Reflog {
            id: captures[1].to_string(),
            head_pointer: captures[2].to_string(),
            message: captures[4].trim().to_string(),
            raw_line: line.to_string(),
        });
    }

    entries
}

/// Find the entry matching a selected line verbatim.
///
/// Reflog ids repeat whenever the same commit appears under several
/// pointers, so lookup is by the whole raw line rather than the hash.
pub fn find_reflog_by_raw_line<'a>(entries: &'a [Reflog], line: &str) -> Result<&'a Reflog> {
    entries
        .iter()
        .find(|entry| entry.raw_line == line)
        .ok_or_else(|| GitPickerError::reflog_not_found(line))
}
