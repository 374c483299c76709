//! Interactive reflog picker: list reflog entries, pick one, pick an
//! action, run it.

use crate::commands::resolve_action_selection;
use crate::core::{
    config::Settings, error::Result, git::GitRepo, print_info, reflog::parse_reflogs,
    selector::FzfSelector, Selection,
};

pub fn execute_reflog() -> Result<()> {
    let repo = GitRepo::open_current()?;
    let settings = Settings::from_env();
    let selector = FzfSelector::new(&settings)?;

    let listing = repo.reflog_listing(settings.reflog_limit)?;
    let entries = parse_reflogs(&listing);
    log::debug!("parsed {} reflog entries", entries.len());

    if entries.is_empty() {
        print_info("No reflog entries found.");
        return Ok(());
    }

    let entry = match selector.select_reflog(&entries)? {
        Selection::Picked(entry) => entry,
        Selection::Cancelled => return Ok(()),
    };

    let Some(action) = resolve_action_selection(selector.select_reflog_action(entry))? else {
        return Ok(());
    };

    repo.execute_action(entry, action)
}
