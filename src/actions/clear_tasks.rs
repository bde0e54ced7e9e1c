//! Clear-recents action

use crate::actions::ActionResult;
use crate::bridge::SystemBridge;
use crate::error::Result;
use crate::resolver::{self, LogicalAction};
use tracing::{debug, warn};

/// Upper bound on entries fetched in one run.
pub const MAX_RECENT_TASKS: u32 = 100;

/// Trailing value the two-int removal signature expects. Opaque
/// platform-required parameter; no semantics inferred.
const REMOVAL_RESERVED_FLAG: i32 = 0;

/// Remove every current recent task.
///
/// Entries that cannot be removed are skipped and logged, never aborting the
/// rest of the batch: the listing is a snapshot, and a task may legitimately
/// disappear between listing and removal.
pub fn clear_recent_tasks(bridge: &dyn SystemBridge) -> ActionResult {
    match clear(bridge) {
        Ok(0) => ActionResult::success(0, "No recent tasks to remove"),
        Ok(removed) => ActionResult::success(removed, format!("Removed {} recent tasks", removed)),
        Err(e) => {
            debug!(error = ?e, "clear-recents run failed");
            ActionResult::failure(e.to_string())
        }
    }
}

fn clear(bridge: &dyn SystemBridge) -> Result<usize> {
    let list_specs = resolver::supported_candidates(bridge, LogicalAction::ListTasks)?;
    let tasks = resolver::try_each(LogicalAction::ListTasks, &list_specs, |_| {
        bridge.list_tasks(MAX_RECENT_TASKS)
    })?;

    let records = tasks.into_records();
    if records.is_empty() {
        return Ok(0);
    }

    let removal_specs = resolver::supported_candidates(bridge, LogicalAction::RemoveTask)?;

    let mut removed = 0;
    for record in records {
        let id = record.persistent_id;
        if id <= 0 {
            debug!(task_id = id, "not removable, skipping");
            continue;
        }

        let outcome = resolver::try_each(LogicalAction::RemoveTask, &removal_specs, |spec| {
            if spec.params.len() == 1 {
                bridge.remove_task(id)
            } else {
                bridge.remove_task_flagged(id, REMOVAL_RESERVED_FLAG)
            }
        });

        match outcome {
            Ok(()) => removed += 1,
            Err(e) => warn!(task_id = id, error = %e, "skipping task"),
        }
    }

    Ok(removed)
}
