//! Sublock - subproject lock manager
//!
//! A command line tool that records, for every external subproject pulled
//! into a build tree, exactly which upstream source revision was used, so a
//! later build can re-fetch byte-identical content.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod git;
mod lock;
mod wrap;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lock(args) => commands::lock::run(cli.subprojects_dir, args),
        Commands::Show(args) => commands::show::run(cli.subprojects_dir, args),
        Commands::Status => commands::status::run(cli.subprojects_dir),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
