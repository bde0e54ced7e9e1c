//! clear-recents - remove every recent task

use ambridge::bridge::shell::ShellBridge;
use ambridge::cli::ClearRecentsArgs;
use ambridge::{clear_recent_tasks, emit, telemetry, ActionResult, OutputFormat};
use ambridge::{ServiceKind, ServiceLocator};
use clap::Parser;

fn main() {
    let args = ClearRecentsArgs::parse();
    telemetry::init(args.verbose);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let result = run();
    std::process::exit(emit(&result, &format));
}

fn run() -> ActionResult {
    let handle = match ServiceLocator::new().resolve(ServiceKind::ActivityManagement) {
        Ok(handle) => handle,
        Err(e) => return ActionResult::failure(e.to_string()),
    };

    let bridge = ShellBridge::new(handle);
    clear_recent_tasks(&bridge)
}
