//! Core functionality for the git-picker tool.
//!
//! This module provides the fundamental building blocks: listing parsers,
//! action catalogs, command construction, the selector and executor
//! collaborators, and error handling.

pub mod action;
pub mod branch;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod reflog;
pub mod selector;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitPickerError, Result};

// === Actions ===
// Catalogs, the command-building trait and the selection codec
pub use action::{
    decode_action, ActionCatalog, ActionTarget, ActionType, Selection, BRANCH_ACTIONS,
    COMMIT_ACTIONS, REFLOG_ACTIONS,
};

// === Entities and parsers ===
// Parsed listing records, one module per entity kind
pub use branch::{find_branch_by_name, parse_branches, Branch, BranchTarget};
pub use commit::{find_commit_by_id, parse_commits, Commit};
pub use reflog::{find_reflog_by_raw_line, parse_reflogs, Reflog};

// === Collaborators ===
// External selector (fzf) and executor (git) round trips
pub use git::GitRepo;
pub use selector::FzfSelector;

// === Configuration ===
// Environment-derived runtime settings
pub use config::Settings;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info};
