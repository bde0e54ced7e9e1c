//! Error types for Ambridge

use crate::resolver::LogicalAction;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("service resolution error: {0}")]
    ServiceResolution(String),

    #[error("no compatible operation for {0}")]
    NoCompatibleOperation(LogicalAction),

    #[error("all known {action} signatures failed")]
    FallbackExhausted { action: LogicalAction },

    #[error("at least one locale required")]
    NoLocales,

    #[error("invalid locale tag '{0}'")]
    InvalidLocaleTag(String),

    #[error("{operation} failed: {cause}")]
    Invocation { operation: String, cause: String },

    #[error("configuration update failed: {0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
