//! Scriptable in-memory bridge for unit tests

use crate::bridge::{DeviceConfig, InvokeError, SystemBridge, TaskList, TaskRecord};
use crate::resolver::OperationSpec;
use std::cell::RefCell;

/// A bridge whose behavior is configured per test: which removal signatures
/// exist, which task ids fail to remove, whether persisting the
/// configuration fails. Calls are recorded for assertions.
pub struct MockBridge {
    pub tasks: TaskList,
    pub plain_removal_supported: bool,
    pub flagged_removal_supported: bool,
    pub failing_ids: Vec<i64>,
    pub config: DeviceConfig,
    pub fail_persist: bool,
    pub removed: RefCell<Vec<i64>>,
    pub flagged_calls: RefCell<Vec<(i64, i32)>>,
    pub persisted: RefCell<Option<DeviceConfig>>,
}

impl Default for MockBridge {
    fn default() -> Self {
        Self {
            tasks: TaskList::Direct(Vec::new()),
            plain_removal_supported: true,
            flagged_removal_supported: true,
            failing_ids: Vec::new(),
            config: DeviceConfig::default(),
            fail_persist: false,
            removed: RefCell::new(Vec::new()),
            flagged_calls: RefCell::new(Vec::new()),
            persisted: RefCell::new(None),
        }
    }
}

impl MockBridge {
    pub fn with_task_ids(ids: &[i64]) -> Self {
        Self {
            tasks: TaskList::Direct(
                ids.iter()
                    .map(|&persistent_id| TaskRecord { persistent_id })
                    .collect(),
            ),
            ..Self::default()
        }
    }

    fn check_removal(&self, id: i64) -> Result<(), InvokeError> {
        if self.failing_ids.contains(&id) {
            return Err(InvokeError::Invocation {
                operation: "removeTask".to_string(),
                cause: format!("task {} vanished", id),
            });
        }
        Ok(())
    }
}

impl SystemBridge for MockBridge {
    fn supports(&self, spec: &OperationSpec) -> bool {
        match (spec.name, spec.params.len()) {
            ("removeTask", 1) => self.plain_removal_supported,
            ("removeTask", 2) => self.flagged_removal_supported,
            _ => true,
        }
    }

    fn list_tasks(&self, _max: u32) -> Result<TaskList, InvokeError> {
        Ok(self.tasks.clone())
    }

    fn remove_task(&self, id: i64) -> Result<(), InvokeError> {
        if !self.plain_removal_supported {
            return Err(InvokeError::MethodNotFound("removeTask".to_string()));
        }
        self.check_removal(id)?;
        self.removed.borrow_mut().push(id);
        Ok(())
    }

    fn remove_task_flagged(&self, id: i64, flag: i32) -> Result<(), InvokeError> {
        if !self.flagged_removal_supported {
            return Err(InvokeError::MethodNotFound("removeTask".to_string()));
        }
        self.check_removal(id)?;
        self.flagged_calls.borrow_mut().push((id, flag));
        self.removed.borrow_mut().push(id);
        Ok(())
    }

    fn get_configuration(&self) -> Result<DeviceConfig, InvokeError> {
        Ok(self.config.clone())
    }

    fn update_persistent_configuration(&self, config: &DeviceConfig) -> Result<(), InvokeError> {
        if self.fail_persist {
            return Err(InvokeError::Invocation {
                operation: "updatePersistentConfiguration".to_string(),
                cause: "write to settings provider rejected".to_string(),
            });
        }
        *self.persisted.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
