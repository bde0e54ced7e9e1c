//! Ambridge - shell-privilege helpers for Android's hidden activity APIs
//!
//! Each helper is a short-lived process launched with shell identity (via
//! `app_process`/adb, not root) that performs one privileged action against
//! the activity-management service and reports a single definitive outcome.
//! The hidden API surface drifts across platform revisions, so every action
//! resolves its target operation from a priority-ordered list of candidate
//! signatures and falls back gracefully when one is absent.
//!
//! # Example
//!
//! ```no_run
//! use ambridge::bridge::shell::ShellBridge;
//! use ambridge::locator::{ServiceKind, ServiceLocator};
//! use ambridge::{clear_recent_tasks, emit, OutputFormat};
//!
//! let handle = ServiceLocator::new()
//!     .resolve(ServiceKind::ActivityManagement)
//!     .unwrap();
//! let bridge = ShellBridge::new(handle);
//! let result = clear_recent_tasks(&bridge);
//! std::process::exit(emit(&result, &OutputFormat::Human));
//! ```

pub mod actions;
pub mod bridge;
pub mod cli;
pub mod error;
pub mod locator;
pub mod report;
pub mod resolver;
pub mod telemetry;

pub use actions::{clear_recent_tasks, set_device_locale, ActionResult, LocaleSpec};
pub use bridge::{InvokeError, SystemBridge};
pub use error::{BridgeError, Result};
pub use locator::{ServiceHandle, ServiceKind, ServiceLocator};
pub use report::{emit, OutputFormat};
pub use resolver::{LogicalAction, OperationSpec};
