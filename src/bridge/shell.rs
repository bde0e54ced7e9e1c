//! Shell-surface adapter for the activity-management service
//!
//! Runs as a shell-identity process and reaches the service through the
//! platform's command-line tools: `dumpsys` for the recents dump, `am` for
//! task removal, and the settings provider for the persisted locale list.
//! Signature drift shows up here as tools rejecting a verb or an argument
//! count, which the adapter classifies as [`InvokeError::MethodNotFound`] so
//! the resolver's chain can fall back.

use crate::bridge::{DeviceConfig, InvokeError, SystemBridge, TaskList, TaskRecord};
use crate::locator::ServiceHandle;
use regex::Regex;
use std::io::ErrorKind;
use std::process::Command;
use tracing::debug;

// Markers the shell tools print when a verb or argument shape is unknown on
// this platform revision.
const UNKNOWN_OPERATION_MARKERS: &[&str] = &["Unknown command", "unknown command", "Bad argument"];

pub struct ShellBridge {
    handle: ServiceHandle,
}

impl ShellBridge {
    pub fn new(handle: ServiceHandle) -> Self {
        Self { handle }
    }

    fn run_tool(&self, tool: &str, args: &[&str], operation: &str) -> Result<String, InvokeError> {
        debug!(tool, ?args, operation, "invoking shell surface");

        let output = Command::new(tool).args(args).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                // The tool itself is absent on this build; same class as a
                // missing method.
                InvokeError::MethodNotFound(operation.to_string())
            } else {
                InvokeError::Invocation {
                    operation: operation.to_string(),
                    cause: e.to_string(),
                }
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if reports_unknown_operation(&stdout) || reports_unknown_operation(&stderr) {
            return Err(InvokeError::MethodNotFound(operation.to_string()));
        }

        if !output.status.success() {
            let cause = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(InvokeError::Invocation {
                operation: operation.to_string(),
                cause,
            });
        }

        Ok(stdout)
    }
}

impl SystemBridge for ShellBridge {
    fn list_tasks(&self, max: u32) -> Result<TaskList, InvokeError> {
        let dump = self.run_tool(
            "dumpsys",
            &[self.handle.service_name(), "recents"],
            "getRecentTasks",
        )?;
        // The shell dump is always the flat shape; the paginated wrapper only
        // exists at the binder level.
        Ok(TaskList::Direct(parse_recent_tasks(&dump, max)))
    }

    fn remove_task(&self, id: i64) -> Result<(), InvokeError> {
        self.run_tool("am", &["stack", "remove", &id.to_string()], "removeTask")?;
        Ok(())
    }

    fn remove_task_flagged(&self, id: i64, flag: i32) -> Result<(), InvokeError> {
        self.run_tool(
            "am",
            &["stack", "remove", &id.to_string(), &flag.to_string()],
            "removeTask",
        )?;
        Ok(())
    }

    fn get_configuration(&self) -> Result<DeviceConfig, InvokeError> {
        let raw = self.run_tool(
            "settings",
            &["get", "system", "system_locales"],
            "getConfiguration",
        )?;
        parse_locale_setting(&raw).map_err(|cause| InvokeError::Invocation {
            operation: "getConfiguration".to_string(),
            cause,
        })
    }

    fn update_persistent_configuration(&self, config: &DeviceConfig) -> Result<(), InvokeError> {
        self.run_tool(
            "settings",
            &["put", "system", "system_locales", &config.language_tags()],
            "updatePersistentConfiguration",
        )?;
        Ok(())
    }
}

fn reports_unknown_operation(text: &str) -> bool {
    UNKNOWN_OPERATION_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

/// Extract persistent task ids from a recents dump, oldest format first:
///
/// ```text
/// * Recent #0: TaskRecord{3af1f25 #137 A=com.example.app U=0 sz=1}
/// * Recent #1: Task{f5d20cc #142 type=standard A=com.android.chrome}
/// ```
///
/// The first `#n` on an entry line is the recency index; the task id is the
/// one that follows.
fn parse_recent_tasks(dump: &str, max: u32) -> Vec<TaskRecord> {
    let Ok(id_pattern) = Regex::new(r"#(-?\d+)") else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for line in dump.lines() {
        let line = line.trim_start();
        if !line.starts_with("* Recent") {
            continue;
        }

        let ids: Vec<i64> = id_pattern
            .captures_iter(line)
            .filter_map(|cap| cap[1].parse().ok())
            .collect();
        let id = match ids.len() {
            0 => continue,
            1 => ids[0],
            _ => ids[1],
        };

        records.push(TaskRecord { persistent_id: id });
        if records.len() as u32 >= max {
            break;
        }
    }
    records
}

/// Parse the persisted `system_locales` value ("ja-JP,ko-KR", "null" when
/// unset) into a configuration.
fn parse_locale_setting(raw: &str) -> Result<DeviceConfig, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(DeviceConfig::default());
    }

    let mut locales = Vec::new();
    for tag in trimmed.split(',') {
        let locale = tag
            .parse()
            .map_err(|e: crate::error::BridgeError| e.to_string())?;
        locales.push(locale);
    }
    Ok(DeviceConfig { locales })
}
