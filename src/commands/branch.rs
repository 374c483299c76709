//! Interactive branch picker: list branches, pick one, pick an action,
//! run it.

use crate::commands::resolve_action_selection;
use crate::core::{
    branch::parse_branches, config::Settings, error::Result, git::GitRepo, print_info,
    selector::FzfSelector, Selection,
};

pub fn execute_branch() -> Result<()> {
    let repo = GitRepo::open_current()?;
    let settings = Settings::from_env();
    let selector = FzfSelector::new(&settings)?;

    let listing = repo.branch_listing()?;
    let branches = parse_branches(&listing);
    log::debug!("parsed {} branches", branches.len());

    if branches.is_empty() {
        print_info("No branches found. Make your first commit to create one.");
        return Ok(());
    }

    let branch = match selector.select_branch(&branches)? {
        Selection::Picked(branch) => branch,
        Selection::Cancelled => return Ok(()),
    };

    let Some(action) = resolve_action_selection(selector.select_branch_action(branch))? else {
        return Ok(());
    };

    repo.execute_action(branch, action)
}
