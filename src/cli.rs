//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sublock - subproject lock manager
///
/// Pin every subproject in a build tree to the exact upstream revision that
/// was checked out, so future builds fetch byte-identical content.
#[derive(Parser, Debug)]
#[command(
    name = "sublock",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Subproject lock manager for build trees",
    long_about = "Sublock reads the subproject declarations (*.wrap files) in a build \
                  tree's subprojects directory, reconciles them against the checkouts \
                  actually on disk, and records the result in a lock file so that \
                  future builds are pinned to exact revisions.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  sublock lock\n    \
                  sublock lock --prune\n    \
                  sublock show\n    \
                  sublock show --json\n    \
                  sublock status"
)]
pub struct Cli {
    /// Subprojects directory (defaults to "subprojects")
    #[arg(long, short = 'd', global = true)]
    pub subprojects_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile subproject declarations into the lock file
    Lock(LockArgs),

    /// Show locked subprojects
    Show(ShowArgs),

    /// Compare declarations against the lock file
    Status,

    /// Show version information
    Version,
}

/// Arguments for the lock command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Lock all declared subprojects:\n    sublock lock\n\n\
                  Drop entries whose declaration was removed:\n    sublock lock --prune\n\n\
                  Lock a different subprojects directory:\n    sublock -d third_party lock")]
pub struct LockArgs {
    /// Remove lock entries that no longer have a wrap declaration
    #[arg(long)]
    pub prune: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show all locked subprojects:\n    sublock show\n\n\
                  Show one subproject:\n    sublock show zlib\n\n\
                  Machine-readable output:\n    sublock show --json")]
pub struct ShowArgs {
    /// Subproject name to show (all when omitted)
    pub name: Option<String>,

    /// Emit JSON instead of the styled listing
    #[arg(long)]
    pub json: bool,
}
