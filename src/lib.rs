//! Git Picker - interactive fuzzy selection for git commits, branches and
//! reflog entries.
//!
//! This library provides the core functionality for git-picker: parsing the
//! three git listing formats into typed entities, fixed action catalogs per
//! entity kind, deterministic command construction, and the round trips
//! with the external selector (fzf) and executor (git) processes.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Listing parsers and entity types (commit, branch, reflog)
//! - Action catalogs and the selection codec
//! - Selector and executor collaborators
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    decode_action,
    find_branch_by_name,
    find_commit_by_id,
    find_reflog_by_raw_line,
    parse_branches,
    parse_commits,
    parse_reflogs,
    print_error,
    print_info,

    ActionCatalog,
    ActionTarget,
    ActionType,

    Branch,
    BranchTarget,
    Commit,

    FzfSelector,
    // Error handling
    GitPickerError,
    // Executor collaborator
    GitRepo,

    Reflog,
    Result,
    Selection,
    // Configuration
    Settings,

    BRANCH_ACTIONS,
    COMMIT_ACTIONS,
    REFLOG_ACTIONS,
};
