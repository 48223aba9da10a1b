//! Status command implementation
//!
//! Compares the wrap declarations against the lock file without touching
//! either: locked, outdated (the declaration changed since locking),
//! unlocked (declared but not locked), orphaned (locked but no longer
//! declared).

use std::collections::HashSet;
use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::lock::{LockFile, LockedSource, LockedSubproject};
use crate::wrap;
use crate::wrap::PackageDefinition;

/// Run status command
pub fn run(subprojects_dir: Option<PathBuf>) -> Result<()> {
    let root = super::resolve_subprojects_dir(subprojects_dir);
    let definitions = wrap::load_all(&root)?;
    let lock = LockFile::load(&root)?;

    if definitions.is_empty() && lock.is_none() {
        println!("No subprojects declared in {}", root.display());
        return Ok(());
    }
    let lock = lock.unwrap_or_default();

    let mut stale = 0usize;

    for definition in &definitions {
        match lock.get_subproject(&definition.name) {
            None => {
                stale += 1;
                print_entry(&Style::new().cyan(), "unlocked", &definition.name);
            }
            Some(entry) if declaration_changed(entry, definition) => {
                stale += 1;
                print_entry(&Style::new().yellow(), "outdated", &definition.name);
            }
            Some(_) => print_entry(&Style::new().green(), "locked", &definition.name),
        }
    }

    let declared: HashSet<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
    let mut orphaned = 0usize;
    for name in lock.subprojects.keys() {
        if !declared.contains(name.as_str()) {
            orphaned += 1;
            print_entry(&Style::new().red(), "orphaned", name);
        }
    }

    if stale + orphaned > 0 {
        println!();
        if orphaned > 0 {
            println!("Run 'sublock lock --prune' to update the lock file");
        } else {
            println!("Run 'sublock lock' to update the lock file");
        }
    }

    Ok(())
}

/// True when the declaration's own fields differ from the locked ones.
///
/// The resolved commit is observed state, not a declared field, so it is
/// excluded from the comparison.
fn declaration_changed(entry: &LockedSubproject, definition: &PackageDefinition) -> bool {
    let expected = LockedSubproject::from_definition(definition, None);

    let mut declared = entry.clone();
    if let LockedSource::Git { commit, .. } = &mut declared.source {
        *commit = None;
    }

    declared != expected
}

fn print_entry(style: &Style, label: &str, name: &str) {
    println!("  {} {}", style.apply_to(format!("{label:>8}")), name);
}
