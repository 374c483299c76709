pub mod branch;
pub mod log;
pub mod reflog;

pub use branch::*;
pub use log::*;
pub use reflog::*;

use crate::core::{GitPickerError, Result, Selection};

/// Unwrap an action-selection outcome. Cancellation ends the interaction
/// silently, and an unknown decoded action is treated the same way rather
/// than crashing the picker.
pub(crate) fn resolve_action_selection<T>(outcome: Result<Selection<T>>) -> Result<Option<T>> {
    match outcome {
        Ok(Selection::Picked(value)) => Ok(Some(value)),
        Ok(Selection::Cancelled) => Ok(None),
        Err(GitPickerError::UnknownAction { name }) => {
            ::log::debug!("ignoring unknown action selection: {name}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
