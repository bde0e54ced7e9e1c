//! Service resolution
//!
//! Privileged services cannot be instantiated directly from a shell-identity
//! process; the locator goes through the platform's service registry
//! (`service check <name>`) and hands back an opaque handle. Resolution
//! happens at most once per run, and a missing service is terminal; there is
//! nothing to retry within a single invocation.

use crate::error::{BridgeError, Result};
use std::fmt;
use std::io::ErrorKind;
use std::process::Command;
use tracing::debug;

const SERVICE_PROBE_TOOL: &str = "service";

/// Symbolic identifier for a target system-service family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    ActivityManagement,
}

impl ServiceKind {
    /// The name the service is registered under.
    pub fn service_name(&self) -> &'static str {
        match self {
            ServiceKind::ActivityManagement => "activity",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::ActivityManagement => write!(f, "activity-management"),
        }
    }
}

/// Opaque reference to a resolved service. Only a successful
/// [`ServiceLocator::resolve`] produces one.
#[derive(Debug, Clone)]
pub struct ServiceHandle {
    kind: ServiceKind,
    service_name: &'static str,
}

impl ServiceHandle {
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    pub fn service_name(&self) -> &'static str {
        self.service_name
    }
}

#[derive(Debug, Default)]
pub struct ServiceLocator;

impl ServiceLocator {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, kind: ServiceKind) -> Result<ServiceHandle> {
        let name = kind.service_name();
        debug!(%kind, service = name, "probing service registry");

        let output = Command::new(SERVICE_PROBE_TOOL)
            .args(["check", name])
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    BridgeError::ServiceUnavailable(format!(
                        "service registry probe tool missing for {}",
                        kind
                    ))
                } else {
                    BridgeError::ServiceResolution(e.to_string())
                }
            })?;

        let report = String::from_utf8_lossy(&output.stdout);
        if !probe_reports_found(&report) {
            return Err(BridgeError::ServiceUnavailable(format!(
                "{} service '{}' is not registered",
                kind, name
            )));
        }

        Ok(ServiceHandle {
            kind,
            service_name: name,
        })
    }
}

/// `service check <name>` prints `Service <name>: found` when the service is
/// registered and `Service <name>: not found` otherwise.
fn probe_reports_found(report: &str) -> bool {
    report.trim().ends_with(": found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_output_classification() {
        assert!(probe_reports_found("Service activity: found\n"));
        assert!(!probe_reports_found("Service activity: not found\n"));
        assert!(!probe_reports_found(""));
        assert!(!probe_reports_found("garbage"));
    }

    #[test]
    fn service_kind_maps_to_registry_name() {
        assert_eq!(ServiceKind::ActivityManagement.service_name(), "activity");
        assert_eq!(ServiceKind::ActivityManagement.to_string(), "activity-management");
    }
}
