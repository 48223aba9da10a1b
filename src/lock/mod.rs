//! Lock file (meson.lock) main module
//!
//! The lock file pins every subproject in the build tree to the exact
//! upstream revision that was checked out, so future builds can re-fetch
//! byte-identical content.

pub mod parse;
pub mod render;
pub mod source;
pub mod subproject;


use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::error::{Result, lock_io_failed};
use crate::wrap::PackageDefinition;

// Re-export types for use by commands
pub use source::{LockedSource, SourceKind};
pub use subproject::LockedSubproject;

/// Lock file name inside the subprojects directory
pub const LOCK_FILE_NAME: &str = "meson.lock";

/// The single supported format version
pub const LOCK_FILE_VERSION: u32 = 1;

/// In-memory lock store: format version plus name-keyed entries
///
/// A `BTreeMap` keeps iteration lexicographic by name, which makes the
/// rendered file canonical across repeated saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockFile {
    /// Format version, checked against [`LOCK_FILE_VERSION`] on load
    pub version: u32,

    /// Locked subprojects by name
    pub subprojects: BTreeMap<String, LockedSubproject>,
}

impl Default for LockFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for LockFile {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let entries: Vec<&LockedSubproject> = self.subprojects.values().collect();
        let field_count = if entries.is_empty() { 1 } else { 2 };

        let mut state = serializer.serialize_struct("LockFile", field_count)?;
        state.serialize_field("version", &self.version)?;
        if !entries.is_empty() {
            state.serialize_field("subproject", &entries)?;
        }
        state.end()
    }
}

impl LockFile {
    /// Create an empty lock store at the current format version
    pub fn new() -> Self {
        Self {
            version: LOCK_FILE_VERSION,
            subprojects: BTreeMap::new(),
        }
    }

    /// Conventional lock file path under a subprojects directory
    pub fn file_path(subprojects_root: &Path) -> PathBuf {
        subprojects_root.join(LOCK_FILE_NAME)
    }

    /// Load the lock file under `subprojects_root`.
    ///
    /// A missing file is `Ok(None)`, not an error. Read failures wrap as
    /// lock file I/O errors; parse failures keep their own diagnostics.
    pub fn load(subprojects_root: &Path) -> Result<Option<LockFile>> {
        let path = Self::file_path(subprojects_root);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| lock_io_failed(path.display().to_string(), e.to_string()))?;
        Ok(Some(parse::parse(&content)?))
    }

    /// Render the store and write it to its conventional path, replacing any
    /// existing file. The text is rendered fully in memory before the single
    /// whole-file write, so a partially-rendered file is never visible.
    ///
    /// Returns the path written; the caller owns user-facing output.
    pub fn save(&self, subprojects_root: &Path) -> Result<PathBuf> {
        let path = Self::file_path(subprojects_root);
        let content = render::render(self);

        fs::write(&path, content)
            .map_err(|e| lock_io_failed(path.display().to_string(), e.to_string()))?;
        Ok(path)
    }

    /// Reconcile a package definition against its on-disk checkout into a
    /// lock entry, replacing any previous entry of the same name.
    ///
    /// Declared fields are copied verbatim. For git subprojects the checkout
    /// is additionally queried for its current commit when version-control
    /// metadata is present; a failed query leaves the commit unknown rather
    /// than failing the reconcile.
    pub fn add_subproject(&mut self, definition: &PackageDefinition, subprojects_root: &Path) {
        let commit = match definition.kind {
            SourceKind::Git => resolve_commit(subprojects_root, &definition.directory),
            _ => None,
        };

        let locked = LockedSubproject::from_definition(definition, commit);
        self.subprojects.insert(locked.name.clone(), locked);
    }

    /// Look up a locked subproject by name
    pub fn get_subproject(&self, name: &str) -> Option<&LockedSubproject> {
        self.subprojects.get(name)
    }

    /// Remove a locked subproject, returning the removed entry
    pub fn remove_subproject(&mut self, name: &str) -> Option<LockedSubproject> {
        self.subprojects.remove(name)
    }
}

/// Current commit of a checkout, None when the directory has no
/// version-control metadata or the query fails
fn resolve_commit(subprojects_root: &Path, directory: &str) -> Option<String> {
    let repo_path = subprojects_root.join(directory);
    if !repo_path.join(".git").exists() {
        return None;
    }
    crate::git::current_commit(&repo_path)
}
