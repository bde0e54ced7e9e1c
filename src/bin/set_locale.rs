//! set-locale - set the persisted device locale-preference list

use ambridge::bridge::shell::ShellBridge;
use ambridge::cli::SetLocaleArgs;
use ambridge::{emit, set_device_locale, telemetry, ActionResult, LocaleSpec, OutputFormat};
use ambridge::{ServiceKind, ServiceLocator};
use clap::Parser;

fn main() {
    let args = SetLocaleArgs::parse();
    telemetry::init(args.verbose);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let result = run(&args);
    std::process::exit(emit(&result, &format));
}

fn run(args: &SetLocaleArgs) -> ActionResult {
    // Validate the locale list before touching the service registry.
    let locales = match LocaleSpec::from_tags(&args.locales) {
        Ok(locales) => locales,
        Err(e) => return ActionResult::failure(e.to_string()),
    };

    let handle = match ServiceLocator::new().resolve(ServiceKind::ActivityManagement) {
        Ok(handle) => handle,
        Err(e) => return ActionResult::failure(e.to_string()),
    };

    let bridge = ShellBridge::new(handle);
    set_device_locale(&bridge, &locales)
}
