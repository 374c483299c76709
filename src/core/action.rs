//! Action catalogs and the action selection codec.
//!
//! Every entity kind (commit, branch, reflog) carries a fixed, ordered
//! catalog of [`ActionType`]s. An action binds a display name, an external
//! command, a fixed argument prefix and a one-line help string. Catalogs are
//! `'static` constant tables; nothing in here is mutable at runtime.
//!
//! # Public API
//! - [`ActionType`]: named external command template (equality is by name)
//! - [`ActionCatalog`]: ordered action registry with [`ActionCatalog::all`]
//!   and [`ActionCatalog::resolve`]
//! - [`ActionTarget`]: trait implemented by the entity types; provides
//!   command building and the tab-delimited selection encoding
//! - [`Selection`]: outcome of a selection round trip
//! - [`decode_action`]: selected line -> resolved action

use crate::core::error::{GitPickerError, Result};

/// A named, preconfigured external command template applicable to one
/// entity kind.
///
/// The `name` is a stable key: it is displayed in the selector, round-trips
/// through the selection codec, and is the only field considered by equality.
#[derive(Debug, Clone)]
pub struct ActionType {
    name: &'static str,
    command: &'static str,
    args: &'static [&'static str],
    help: &'static str,
}

impl ActionType {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Fixed argument prefix preceding the entity-derived argument
    pub fn args(&self) -> &'static [&'static str] {
        self.args
    }

    pub fn help(&self) -> &'static str {
        self.help
    }
}

// The catalogs are constant tables, so name equality is identity.
impl PartialEq for ActionType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ActionType {}

/// The fixed ordered set of [`ActionType`]s for one entity kind.
#[derive(Debug)]
pub struct ActionCatalog {
    actions: &'static [ActionType],
}

impl ActionCatalog {
    const fn new(actions: &'static [ActionType]) -> Self {
        ActionCatalog { actions }
    }

    /// All actions, in the fixed display order
    pub fn all(&self) -> &'static [ActionType] {
        self.actions
    }

    /// Exact, case-sensitive lookup by action name
    pub fn resolve(&self, name: &str) -> Result<&'static ActionType> {
        self.actions
            .iter()
            .find(|action| action.name == name)
            .ok_or_else(|| GitPickerError::unknown_action(name))
    }
}

/// The action a branch resolves through its last commit id instead of its
/// name. Exposed so the branch entity can special-case its argument.
pub(crate) const BRANCH_GET_LAST_COMMIT: ActionType = ActionType {
    name: "get last commit",
    command: "echo",
    args: &[],
    help: "print branch last commit id",
};

/// Actions applicable to a commit, in display order
pub static COMMIT_ACTIONS: ActionCatalog = ActionCatalog::new(&[
    ActionType {
        name: "get commit id",
        command: "echo",
        args: &[],
        help: "print commit id",
    },
    ActionType {
        name: "diff",
        command: "git",
        args: &["diff"],
        help: "Show changes between commits",
    },
    ActionType {
        name: "rebase interactive",
        command: "git",
        args: &["rebase", "-i"],
        help: "Interactive rebase",
    },
    ActionType {
        name: "revert",
        command: "git",
        args: &["revert", "--edit"],
        help: "Revert commit",
    },
    ActionType {
        name: "revert no commit",
        command: "git",
        args: &["revert", "--no-commit"],
        help: "Revert without committing",
    },
    ActionType {
        name: "cherry-pick",
        command: "git",
        args: &["cherry-pick"],
        help: "Cherry-pick commit",
    },
    ActionType {
        name: "cherry-pick without commit",
        command: "git",
        args: &["cherry-pick", "--no-commit"],
        help: "Cherry-pick without committing",
    },
    ActionType {
        name: "switch",
        command: "git",
        args: &["switch"],
        help: "Switch branch to commit",
    },
]);

/// Actions applicable to a branch, in display order
pub static BRANCH_ACTIONS: ActionCatalog = ActionCatalog::new(&[
    ActionType {
        name: "switch",
        command: "git",
        args: &["switch"],
        help: "Switch branch to selected branch",
    },
    ActionType {
        name: "diff",
        command: "git",
        args: &["diff"],
        help: "Show changes between current branch and selected branch",
    },
    ActionType {
        name: "delete",
        command: "git",
        args: &["branch", "-d"],
        help: "Delete branch",
    },
    ActionType {
        name: "rebase interactive",
        command: "git",
        args: &["rebase", "-i"],
        help: "Interactive rebase to selected branch",
    },
    ActionType {
        name: "rebase",
        command: "git",
        args: &["rebase"],
        help: "Rebase to selected branch",
    },
    ActionType {
        name: "merge",
        command: "git",
        args: &["merge"],
        help: "Merge to selected branch",
    },
    BRANCH_GET_LAST_COMMIT,
]);

/// Actions applicable to a reflog entry, in display order
pub static REFLOG_ACTIONS: ActionCatalog = ActionCatalog::new(&[ActionType {
    name: "reset hard",
    command: "git",
    args: &["reset", "--hard"],
    help: "Hard reset to selected commit",
}]);

/// Outcome of one selector round trip: either a value was picked or the
/// user backed out (ESC / Ctrl+C / empty selection).
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<T> {
    Picked(T),
    Cancelled,
}

/// Implemented by the parsed entity types; provides deterministic command
/// building and the encoding fed to the action selector.
pub trait ActionTarget {
    /// The actions applicable to this entity, in display order
    fn actions(&self) -> &'static [ActionType];

    /// The single entity-derived argument trailing the action's fixed prefix
    fn action_argument(&self, action: &ActionType) -> &str;

    /// The verbatim listing line presented during entity selection
    fn raw_line(&self) -> &str;

    /// Full argument vector for `action.command()`: fixed prefix plus the
    /// entity-derived argument
    fn action_args(&self, action: &ActionType) -> Vec<String> {
        let mut args: Vec<String> = action.args().iter().map(|s| s.to_string()).collect();
        args.push(self.action_argument(action).to_string());
        args
    }

    /// Space-joined rendition of the full command, for preview display only
    fn display_command(&self, action: &ActionType) -> String {
        format!("{} {}", action.command(), self.action_args(action).join(" "))
    }

    /// One tab-delimited selector line for this action. The padding after
    /// "Command" keeps the colons column-aligned with "Description" in the
    /// selector preview.
    fn action_line(&self, action: &ActionType) -> String {
        format!(
            "{}\tDescription : {}\tCommand     : {}\n",
            action.name(),
            action.help(),
            self.display_command(action)
        )
    }

    /// Concatenation of all action lines, the full selector input
    fn action_input(&self) -> String {
        self.actions()
            .iter()
            .map(|action| self.action_line(action))
            .collect()
    }
}

/// Decode a line returned by the action selector.
///
/// An empty selection means the user cancelled and is not an error. A
/// non-empty line resolves its first tab-delimited field through the
/// catalog; an unrecognized name yields [`GitPickerError::UnknownAction`],
/// which callers treat as a silent no-op.
pub fn decode_action(
    selected: &str,
    catalog: &ActionCatalog,
) -> Result<Selection<&'static ActionType>> {
    let selected = selected.trim();
    if selected.is_empty() {
        log::debug!("no action selected");
        return Ok(Selection::Cancelled);
    }

    let name = selected.split('\t').next().unwrap_or(selected);
    let action = catalog.resolve(name)?;
    log::debug!("selected action: {}", action.name());
    Ok(Selection::Picked(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_round_trips_every_catalog_entry() -> Result<()> {
        for catalog in [&COMMIT_ACTIONS, &BRANCH_ACTIONS, &REFLOG_ACTIONS] {
            for action in catalog.all() {
                let resolved = catalog.resolve(action.name())?;
                assert_eq!(resolved, action);
                assert_eq!(resolved.command(), action.command());
                assert_eq!(resolved.args(), action.args());
                assert_eq!(resolved.help(), action.help());
            }
        }
        Ok(())
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(COMMIT_ACTIONS.resolve("Diff").is_err());
        assert!(COMMIT_ACTIONS.resolve("diff").is_ok());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = COMMIT_ACTIONS.resolve("bogus").unwrap_err();
        assert_eq!(err.to_string(), "unknown action: bogus");
    }

    #[test]
    fn test_commit_catalog_order() {
        let names: Vec<&str> = COMMIT_ACTIONS.all().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "get commit id",
                "diff",
                "rebase interactive",
                "revert",
                "revert no commit",
                "cherry-pick",
                "cherry-pick without commit",
                "switch",
            ]
        );
    }

    #[test]
    fn test_branch_catalog_order() {
        let names: Vec<&str> = BRANCH_ACTIONS.all().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "switch",
                "diff",
                "delete",
                "rebase interactive",
                "rebase",
                "merge",
                "get last commit",
            ]
        );
    }

    #[test]
    fn test_reflog_catalog_order() {
        let names: Vec<&str> = REFLOG_ACTIONS.all().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["reset hard"]);
    }

    #[test]
    fn test_equality_is_by_name_only() {
        let resolved = BRANCH_ACTIONS.resolve("get last commit").unwrap();
        assert_eq!(resolved, &BRANCH_GET_LAST_COMMIT);
    }

    #[test]
    fn test_decode_empty_selection_is_cancelled() -> Result<()> {
        assert_eq!(decode_action("", &COMMIT_ACTIONS)?, Selection::Cancelled);
        assert_eq!(decode_action("  \n", &COMMIT_ACTIONS)?, Selection::Cancelled);
        Ok(())
    }

    #[test]
    fn test_decode_selected_line() -> Result<()> {
        let line = "diff\tDescription : Show changes between commits\tCommand     : git diff abc";
        match decode_action(line, &COMMIT_ACTIONS)? {
            Selection::Picked(action) => assert_eq!(action.name(), "diff"),
            Selection::Cancelled => panic!("expected a picked action"),
        }
        Ok(())
    }

    #[test]
    fn test_decode_unknown_action() {
        let err = decode_action("bogus\tDescription : x\tCommand     : y", &COMMIT_ACTIONS)
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown action: bogus");
    }

    #[test]
    fn test_decode_line_without_tabs_uses_whole_line() {
        let result = decode_action("reset hard", &REFLOG_ACTIONS).unwrap();
        match result {
            Selection::Picked(action) => assert_eq!(action.name(), "reset hard"),
            Selection::Cancelled => panic!("expected a picked action"),
        }
    }
}
