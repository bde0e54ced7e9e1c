//! Action implementations (one per helper executable)

pub mod clear_tasks;
pub mod set_locale;

pub use clear_tasks::clear_recent_tasks;
pub use set_locale::{set_device_locale, LocaleSpec};

use serde::{Deserialize, Serialize};

/// The single definitive outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionResult {
    Success { count: usize, detail: String },
    Failure { reason: String },
}

impl ActionResult {
    pub fn success(count: usize, detail: impl Into<String>) -> Self {
        ActionResult::Success {
            count,
            detail: detail.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        ActionResult::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success { .. })
    }
}
