use log::{debug, info};
use rust_launch_core::error::{Error, Result};
use rust_launch_core::usage::UsageRanker;

use super::types::ResolvedChoice;

/// Runs `action` for the chosen item and counts the item once it went through.
///
/// A program that started but exited non-zero still counts as used. Failures
/// to start it or to copy it leave the usage history untouched.
pub fn act_then_record<F>(
    ranker: &UsageRanker,
    resolved: &ResolvedChoice,
    record: bool,
    action: F,
) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let outcome = action();

    let went_through = matches!(outcome, Ok(()) | Err(Error::SubProcessExit));
    if !went_through {
        debug!("Not recording `{}` as it was not launched", resolved.item);
    } else if !record {
        info!("Skipping usage recording was specified.");
    } else if !resolved.item.is_empty() {
        ranker.record_use(&resolved.item)?;
    }

    outcome
}
