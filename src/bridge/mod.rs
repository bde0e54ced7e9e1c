//! The privileged-action bridge seam
//!
//! [`SystemBridge`] is the capability-typed interface over the hidden
//! activity-management surface. All fallback logic in the crate operates
//! against this trait rather than against the raw platform mechanism, so the
//! executors stay platform-agnostic and testable with a mock adapter.

pub mod shell;

#[cfg(test)]
pub mod mock;

use crate::error::{BridgeError, Result};
use crate::resolver::OperationSpec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure of a single bridge invocation.
///
/// `MethodNotFound` is the restricted class the fallback chain is allowed to
/// retry past; everything else stops the chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    #[error("no such operation: {0}")]
    MethodNotFound(String),

    #[error("{operation} failed: {cause}")]
    Invocation { operation: String, cause: String },
}

/// One recent-task entry; only the persistent identifier matters here.
///
/// Non-positive identifiers mark entries the platform considers not
/// removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRecord {
    pub persistent_id: i64,
}

/// The wrapped, paginated return shape some platform revisions use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPage {
    records: Vec<TaskRecord>,
}

impl TaskPage {
    pub fn new(records: Vec<TaskRecord>) -> Self {
        Self { records }
    }

    pub fn into_records(self) -> Vec<TaskRecord> {
        self.records
    }
}

/// Heterogeneous task-list return shapes, normalized in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskList {
    Direct(Vec<TaskRecord>),
    Paginated(TaskPage),
}

impl TaskList {
    pub fn into_records(self) -> Vec<TaskRecord> {
        match self {
            TaskList::Direct(records) => records,
            TaskList::Paginated(page) => page.into_records(),
        }
    }
}

/// A locale parsed from a `language[-region]` or `language[_region]` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub region: Option<String>,
}

impl FromStr for Locale {
    type Err = BridgeError;

    fn from_str(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(BridgeError::InvalidLocaleTag(tag.to_string()));
        }

        let (language, region) = match trimmed.find(['-', '_']) {
            Some(split) => (&trimmed[..split], Some(&trimmed[split + 1..])),
            None => (trimmed, None),
        };

        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BridgeError::InvalidLocaleTag(tag.to_string()));
        }

        // Extended tags like zh-Hant-TW carry subtags past the region; only
        // the segment up to the next delimiter is kept, the rest is dropped.
        let region = match region {
            Some(rest) => {
                let segment = rest.split(['-', '_']).next().unwrap_or("");
                if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(BridgeError::InvalidLocaleTag(tag.to_string()));
                }
                Some(segment.to_ascii_uppercase())
            }
            None => None,
        };

        Ok(Locale {
            language: language.to_ascii_lowercase(),
            region,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// The persisted device configuration, fetched and written back as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceConfig {
    pub locales: Vec<Locale>,
}

impl DeviceConfig {
    /// Replace the locale-preference list, first entry becoming the default.
    pub fn set_locales(&mut self, locales: Vec<Locale>) {
        self.locales = locales;
    }

    /// Comma-joined language tags, matching the platform's persisted form.
    pub fn language_tags(&self) -> String {
        self.locales
            .iter()
            .map(Locale::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Capability interface over the activity-management service.
pub trait SystemBridge {
    /// Whether this adapter exposes the given candidate signature. Adapters
    /// that cannot probe cheaply may report `true` and rely on invocation
    /// classification instead.
    fn supports(&self, _spec: &OperationSpec) -> bool {
        true
    }

    /// Fetch up to `max` current task entries.
    fn list_tasks(&self, max: u32) -> std::result::Result<TaskList, InvokeError>;

    /// Remove a task by persistent id (the single-int signature).
    fn remove_task(&self, id: i64) -> std::result::Result<(), InvokeError>;

    /// Remove a task by persistent id plus the opaque trailing int some
    /// revisions require (the two-int signature).
    fn remove_task_flagged(&self, id: i64, flag: i32) -> std::result::Result<(), InvokeError>;

    /// Fetch the persisted configuration.
    fn get_configuration(&self) -> std::result::Result<DeviceConfig, InvokeError>;

    /// Persist an updated configuration.
    fn update_persistent_configuration(
        &self,
        config: &DeviceConfig,
    ) -> std::result::Result<(), InvokeError>;
}
