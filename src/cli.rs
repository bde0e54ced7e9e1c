//! CLI argument parsing

use clap::Parser;

#[derive(Parser)]
#[command(name = "clear-recents")]
#[command(author, version, about = "Remove every recent task via the activity service", long_about = None)]
pub struct ClearRecentsArgs {
    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser)]
#[command(name = "set-locale")]
#[command(author, version, about = "Set the persisted device locale list", long_about = None)]
pub struct SetLocaleArgs {
    /// Locale tags in language[-region] form, preference order (first = default)
    #[arg(value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
