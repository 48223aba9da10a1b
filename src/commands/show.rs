//! Show command implementation
//!
//! Prints the locked subprojects, either as a styled listing or as JSON for
//! machine consumption.

use std::path::PathBuf;

use console::Style;

use crate::cli::ShowArgs;
use crate::error::{Result, SublockError};
use crate::lock::{LockFile, LockedSource, LockedSubproject};

/// Run show command
pub fn run(subprojects_dir: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let root = super::resolve_subprojects_dir(subprojects_dir);
    let lock = LockFile::load(&root)?.ok_or(SublockError::LockFileMissing)?;

    if args.json {
        return print_json(&lock, args.name.as_deref());
    }

    match args.name {
        Some(name) => {
            let entry = lock
                .get_subproject(&name)
                .ok_or(SublockError::SubprojectNotFound { name })?;
            display_subproject(entry);
        }
        None => {
            if lock.subprojects.is_empty() {
                println!("No subprojects locked.");
                return Ok(());
            }
            println!("Locked subprojects ({}):", lock.subprojects.len());
            println!();
            for entry in lock.subprojects.values() {
                display_subproject(entry);
                println!();
            }
        }
    }

    Ok(())
}

fn print_json(lock: &LockFile, name: Option<&str>) -> Result<()> {
    let json = match name {
        Some(name) => {
            let entry = lock
                .get_subproject(name)
                .ok_or_else(|| SublockError::SubprojectNotFound {
                    name: name.to_string(),
                })?;
            serde_json::to_string_pretty(entry)
        }
        None => serde_json::to_string_pretty(lock),
    }
    .map_err(|e| SublockError::IoError {
        message: e.to_string(),
    })?;

    println!("{json}");
    Ok(())
}

/// Display one locked subproject with styled field labels
fn display_subproject(entry: &LockedSubproject) {
    let bold = Style::new().bold();

    println!("  {}", Style::new().bold().yellow().apply_to(&entry.name));
    println!("    {} {}", bold.apply_to("Type:"), entry.kind());
    println!("    {} {}", bold.apply_to("Directory:"), entry.directory);

    match &entry.source {
        LockedSource::Git {
            url,
            revision,
            commit,
        } => {
            display_opt(&bold, "Url:", url);
            display_opt(&bold, "Revision:", revision);
            display_opt(&bold, "Commit:", commit);
        }
        LockedSource::File {
            source_url,
            source_filename,
            source_hash,
        } => {
            display_opt(&bold, "Source url:", source_url);
            display_opt(&bold, "Source filename:", source_filename);
            display_opt(&bold, "Source hash:", source_hash);
        }
        LockedSource::Hg { url, revision } | LockedSource::Svn { url, revision } => {
            display_opt(&bold, "Url:", url);
            display_opt(&bold, "Revision:", revision);
        }
    }

    display_opt(&bold, "Patch url:", &entry.patch_url);
    display_opt(&bold, "Patch filename:", &entry.patch_filename);
    display_opt(&bold, "Patch hash:", &entry.patch_hash);
}

fn display_opt(bold: &Style, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        println!("    {} {}", bold.apply_to(label), value);
    }
}
