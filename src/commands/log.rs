//! Interactive commit picker: list commits, pick one, pick an action, run it.

use crate::commands::resolve_action_selection;
use crate::core::{
    commit::parse_commits, config::Settings, error::Result, git::GitRepo, print_info,
    selector::FzfSelector, Selection,
};

pub fn execute_log() -> Result<()> {
    let repo = GitRepo::open_current()?;
    let settings = Settings::from_env();
    let selector = FzfSelector::new(&settings)?;

    let listing = repo.log_listing(settings.log_limit)?;
    let commits = parse_commits(&listing);
    log::debug!("parsed {} commits", commits.len());

    if commits.is_empty() {
        print_info("No commits found.");
        return Ok(());
    }

    let commit = match selector.select_commit(&commits)? {
        Selection::Picked(commit) => commit,
        Selection::Cancelled => return Ok(()),
    };

    let Some(action) = resolve_action_selection(selector.select_commit_action(commit))? else {
        return Ok(());
    };

    repo.execute_action(commit, action)
}
