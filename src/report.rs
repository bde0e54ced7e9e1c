//! Outcome reporting
//!
//! The driver that spawns these helpers consumes exactly one terminal line:
//! `SUCCESS: …` on stdout or `FAIL: …` on stderr, plus the exit code.

use crate::actions::ActionResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Render the outcome and return the process exit code.
pub fn emit(result: &ActionResult, format: &OutputFormat) -> i32 {
    let line = render(result, format);
    match result {
        ActionResult::Success { .. } => {
            println!("{}", line);
            0
        }
        ActionResult::Failure { .. } => {
            eprintln!("{}", line);
            1
        }
    }
}

fn render(result: &ActionResult, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => match result {
            ActionResult::Success { detail, .. } => format!("SUCCESS: {}", detail),
            ActionResult::Failure { reason } => format!("FAIL: {}", reason),
        },
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .unwrap_or_else(|_| "{}".to_string()),
    }
}
