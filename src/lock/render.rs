//! Canonical text rendering of the lock file
//!
//! Output is deterministic: entries are emitted in name order with a fixed
//! field order per entry, so repeated saves of the same store are
//! byte-identical and diffs stay minimal.

use crate::lock::LockFile;

/// Render a lock store to its textual form.
///
/// All values are plain double-quoted strings; URLs, paths and hashes never
/// contain quotes or newlines, so no escaping is applied.
pub fn render(lock: &LockFile) -> String {
    let mut lines = vec![format!("version = {}", lock.version), String::new()];

    for (name, locked) in &lock.subprojects {
        lines.push("[[subproject]]".to_string());
        lines.push(format!("name = \"{name}\""));
        for (key, value) in locked.to_record() {
            lines.push(format!("{key} = \"{value}\""));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
