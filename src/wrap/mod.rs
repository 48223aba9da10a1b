//! Subproject declarations (*.wrap files)
//!
//! A wrap file is the project's declaration of where a subproject comes
//! from: its source kind, URL, revision or archive hash, and optional patch
//! overlay. This module only reads declarations; it never rewrites them.

pub mod file;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::lock::SourceKind;

/// A subproject's declared source, prior to resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDefinition {
    /// Subproject name, taken from the wrap file stem
    pub name: String,

    /// Declared source kind
    pub kind: SourceKind,

    /// Checkout directory relative to the subprojects root, defaulting to
    /// the subproject name
    pub directory: String,

    /// Declared key/value fields (url, revision, source_hash, patch_url and
    /// friends, depending on the kind)
    pub values: HashMap<String, String>,
}

impl PackageDefinition {
    /// Create a definition with no declared values
    ///
    /// # Note
    /// This function is used by tests.
    #[allow(dead_code)] // Used by tests
    pub fn new(
        name: impl Into<String>,
        kind: SourceKind,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            directory: directory.into(),
            values: HashMap::new(),
        }
    }

    /// A declared value by key
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Read every `*.wrap` declaration in the subprojects root, sorted by name.
///
/// A missing root yields an empty list; there is nothing declared to lock.
pub fn load_all(subprojects_root: &Path) -> Result<Vec<PackageDefinition>> {
    let mut definitions = Vec::new();
    if !subprojects_root.is_dir() {
        return Ok(definitions);
    }

    for entry in fs::read_dir(subprojects_root)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "wrap") {
            definitions.push(file::parse_wrap_file(&path)?);
        }
    }

    definitions.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(definitions)
}
