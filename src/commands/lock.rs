//! Lock command implementation
//!
//! Reads every wrap declaration in the subprojects directory, reconciles it
//! against the checkout actually on disk, and writes the result back to the
//! lock file.

use std::collections::HashSet;
use std::path::PathBuf;

use console::Style;

use crate::cli::LockArgs;
use crate::error::{Result, SublockError};
use crate::lock::{LockFile, LockedSource};
use crate::wrap;
use crate::wrap::PackageDefinition;

/// Run lock command
pub fn run(subprojects_dir: Option<PathBuf>, args: LockArgs) -> Result<()> {
    let root = super::resolve_subprojects_dir(subprojects_dir);
    if !root.is_dir() {
        return Err(SublockError::IoError {
            message: format!("subprojects directory '{}' does not exist", root.display()),
        });
    }

    let definitions = wrap::load_all(&root)?;
    let mut lock = LockFile::load(&root)?.unwrap_or_default();

    for definition in &definitions {
        lock.add_subproject(definition, &root);
        if let Some(entry) = lock.get_subproject(&definition.name) {
            println!(
                "  {} {} ({})",
                Style::new().green().apply_to("Locked"),
                entry.name,
                describe_source(&entry.source)
            );
        }
    }

    if args.prune {
        prune_orphaned(&mut lock, &definitions);
    }

    let path = lock.save(&root)?;
    println!("Lock file saved to {}", path.display());

    Ok(())
}

/// Drop lock entries whose wrap declaration no longer exists
fn prune_orphaned(lock: &mut LockFile, definitions: &[PackageDefinition]) {
    let declared: HashSet<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
    let orphaned: Vec<String> = lock
        .subprojects
        .keys()
        .filter(|name| !declared.contains(name.as_str()))
        .cloned()
        .collect();

    for name in orphaned {
        lock.remove_subproject(&name);
        println!("  {} {}", Style::new().red().apply_to("Pruned"), name);
    }
}

fn describe_source(source: &LockedSource) -> String {
    match source {
        LockedSource::Git {
            commit: Some(commit),
            ..
        } => format!("git, commit {}", short_commit(commit)),
        source => source.kind().to_string(),
    }
}

fn short_commit(commit: &str) -> &str {
    commit.get(..10).unwrap_or(commit)
}
