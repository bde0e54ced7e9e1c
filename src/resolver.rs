//! Operation resolution and ordered signature fallback
//!
//! The hidden activity-management surface drifts across platform revisions:
//! an operation may disappear, be renamed, or grow an extra parameter. Each
//! logical action therefore carries a compile-time table of candidate
//! signatures in priority order, and callers walk the table with [`try_each`]
//! instead of catching invocation failures ad hoc.

use crate::bridge::{InvokeError, SystemBridge};
use crate::error::{BridgeError, Result};
use std::fmt;
use tracing::debug;

/// A user-facing intent that may map to several concrete signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalAction {
    ListTasks,
    RemoveTask,
    GetConfiguration,
    UpdateConfiguration,
}

impl fmt::Display for LogicalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogicalAction::ListTasks => "list-tasks",
            LogicalAction::RemoveTask => "remove-task",
            LogicalAction::GetConfiguration => "get-configuration",
            LogicalAction::UpdateConfiguration => "update-configuration",
        };
        write!(f, "{}", name)
    }
}

/// Parameter-type descriptor for one slot of a candidate signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Configuration,
}

/// One concrete way to perform a logical action.
///
/// Immutable and defined at compile time; `rank` mirrors the position in the
/// candidate table (0 = most preferred).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub params: &'static [ParamKind],
    pub rank: u8,
}

const LIST_TASKS_CANDIDATES: &[OperationSpec] = &[OperationSpec {
    name: "getRecentTasks",
    params: &[ParamKind::Int, ParamKind::Int, ParamKind::Int],
    rank: 0,
}];

// The single-int signature is the newer one; older revisions expect a
// trailing disambiguating int.
const REMOVE_TASK_CANDIDATES: &[OperationSpec] = &[
    OperationSpec {
        name: "removeTask",
        params: &[ParamKind::Int],
        rank: 0,
    },
    OperationSpec {
        name: "removeTask",
        params: &[ParamKind::Int, ParamKind::Int],
        rank: 1,
    },
];

const GET_CONFIGURATION_CANDIDATES: &[OperationSpec] = &[OperationSpec {
    name: "getConfiguration",
    params: &[],
    rank: 0,
}];

const UPDATE_CONFIGURATION_CANDIDATES: &[OperationSpec] = &[OperationSpec {
    name: "updatePersistentConfiguration",
    params: &[ParamKind::Configuration],
    rank: 0,
}];

/// All registered candidate signatures for an action, most preferred first.
pub fn candidates(action: LogicalAction) -> &'static [OperationSpec] {
    match action {
        LogicalAction::ListTasks => LIST_TASKS_CANDIDATES,
        LogicalAction::RemoveTask => REMOVE_TASK_CANDIDATES,
        LogicalAction::GetConfiguration => GET_CONFIGURATION_CANDIDATES,
        LogicalAction::UpdateConfiguration => UPDATE_CONFIGURATION_CANDIDATES,
    }
}

/// Probe the bridge for the candidates it exposes, preserving priority order.
///
/// The first element is the signature a plain find-operation lookup would
/// select; the rest are invocation-time fallbacks.
pub fn supported_candidates(
    bridge: &dyn SystemBridge,
    action: LogicalAction,
) -> Result<Vec<&'static OperationSpec>> {
    let supported: Vec<&'static OperationSpec> = candidates(action)
        .iter()
        .filter(|spec| bridge.supports(spec))
        .collect();

    if supported.is_empty() {
        return Err(BridgeError::NoCompatibleOperation(action));
    }

    debug!(%action, count = supported.len(), "resolved candidate signatures");
    Ok(supported)
}

/// Invoke candidates in order until one succeeds.
///
/// Only [`InvokeError::MethodNotFound`] advances the chain; any other
/// invocation failure stops it and surfaces as the result. An exhausted
/// chain reports [`BridgeError::FallbackExhausted`].
pub fn try_each<T>(
    action: LogicalAction,
    specs: &[&'static OperationSpec],
    mut attempt: impl FnMut(&OperationSpec) -> std::result::Result<T, InvokeError>,
) -> Result<T> {
    for spec in specs {
        match attempt(spec) {
            Ok(value) => return Ok(value),
            Err(InvokeError::MethodNotFound(operation)) => {
                debug!(%action, %operation, rank = spec.rank, "signature absent, trying next");
            }
            Err(InvokeError::Invocation { operation, cause }) => {
                return Err(BridgeError::Invocation { operation, cause });
            }
        }
    }

    Err(BridgeError::FallbackExhausted { action })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::mock::MockBridge;

    #[test]
    fn removal_candidates_prefer_single_int_signature() {
        let specs = candidates(LogicalAction::RemoveTask);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].params.len(), 1);
        assert_eq!(specs[1].params.len(), 2);
        assert!(specs[0].rank < specs[1].rank);
    }

    #[test]
    fn supported_candidates_filters_absent_signatures() {
        let mut bridge = MockBridge::default();
        bridge.plain_removal_supported = false;

        let specs = supported_candidates(&bridge, LogicalAction::RemoveTask).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].params.len(), 2);
    }

    #[test]
    fn no_supported_candidates_is_a_resolution_failure() {
        let mut bridge = MockBridge::default();
        bridge.plain_removal_supported = false;
        bridge.flagged_removal_supported = false;

        let err = supported_candidates(&bridge, LogicalAction::RemoveTask).unwrap_err();
        assert!(matches!(err, BridgeError::NoCompatibleOperation(LogicalAction::RemoveTask)));
        assert_eq!(err.to_string(), "no compatible operation for remove-task");
    }

    #[test]
    fn try_each_advances_only_on_method_not_found() {
        let specs: Vec<&'static OperationSpec> =
            candidates(LogicalAction::RemoveTask).iter().collect();
        let mut attempts = Vec::new();

        let result = try_each(LogicalAction::RemoveTask, &specs, |spec| {
            attempts.push(spec.rank);
            if spec.rank == 0 {
                Err(InvokeError::MethodNotFound("removeTask".to_string()))
            } else {
                Ok(42)
            }
        });

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts, vec![0, 1]);
    }

    #[test]
    fn try_each_stops_on_invocation_failure() {
        let specs: Vec<&'static OperationSpec> =
            candidates(LogicalAction::RemoveTask).iter().collect();
        let mut attempts = 0;

        let result: Result<()> = try_each(LogicalAction::RemoveTask, &specs, |_| {
            attempts += 1;
            Err(InvokeError::Invocation {
                operation: "removeTask".to_string(),
                cause: "task vanished".to_string(),
            })
        });

        assert!(matches!(result, Err(BridgeError::Invocation { .. })));
        assert_eq!(attempts, 1);
    }

    #[test]
    fn try_each_reports_exhaustion() {
        let specs: Vec<&'static OperationSpec> =
            candidates(LogicalAction::RemoveTask).iter().collect();

        let result: Result<()> = try_each(LogicalAction::RemoveTask, &specs, |spec| {
            Err(InvokeError::MethodNotFound(spec.name.to_string()))
        });

        assert!(matches!(
            result,
            Err(BridgeError::FallbackExhausted {
                action: LogicalAction::RemoveTask
            })
        ));
    }
}
