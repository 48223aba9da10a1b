//! `LockedSubproject` struct for the lock file
//!
//! One entry per subproject: its source identity plus optional patch
//! provenance.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, malformed_lock_entry};
use crate::lock::source::{LockedSource, SourceKind};
use crate::wrap::PackageDefinition;

/// Flat key/value view of a subproject entry, as stored in the lock file
pub(crate) type Record = HashMap<String, String>;

/// A locked subproject entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockedSubproject {
    /// Subproject name, the lock file table key
    pub name: String,

    /// Checkout directory relative to the subprojects root
    pub directory: String,

    /// Source identity, shaped by the subproject's kind
    #[serde(flatten)]
    pub source: LockedSource,

    /// Patch overlay URL, if the subproject applies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_filename: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_hash: Option<String>,
}

impl LockedSubproject {
    /// Create an entry with no patch provenance
    ///
    /// # Note
    /// This function is used by tests.
    #[allow(dead_code)] // Used by tests
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<String>,
        source: LockedSource,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            source,
            patch_url: None,
            patch_filename: None,
            patch_hash: None,
        }
    }

    /// Build an entry from a package definition, copying declared fields
    /// verbatim.
    ///
    /// `commit` is the checkout's resolved commit and is only meaningful for
    /// the git kind; callers pass None when resolution failed or does not
    /// apply.
    pub fn from_definition(definition: &PackageDefinition, commit: Option<String>) -> Self {
        let source = match definition.kind {
            SourceKind::Git => LockedSource::Git {
                url: definition.value("url"),
                revision: definition.value("revision"),
                commit,
            },
            SourceKind::File => LockedSource::File {
                source_url: definition.value("source_url"),
                source_filename: definition.value("source_filename"),
                source_hash: definition.value("source_hash"),
            },
            SourceKind::Hg => LockedSource::Hg {
                url: definition.value("url"),
                revision: definition.value("revision"),
            },
            SourceKind::Svn => LockedSource::Svn {
                url: definition.value("url"),
                revision: definition.value("revision"),
            },
        };

        Self {
            name: definition.name.clone(),
            directory: definition.directory.clone(),
            source,
            patch_url: definition.value("patch_url"),
            patch_filename: definition.value("patch_filename"),
            patch_hash: definition.value("patch_hash"),
        }
    }

    /// The kind of this entry's source
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Emit the entry's fields in canonical order: type, directory, the
    /// kind's own fields, then patch fields. Absent options are omitted.
    pub fn to_record(&self) -> Vec<(&'static str, &str)> {
        let mut record = vec![
            ("type", self.kind().as_str()),
            ("directory", self.directory.as_str()),
        ];

        match &self.source {
            LockedSource::Git {
                url,
                revision,
                commit,
            } => {
                push_field(&mut record, "url", url);
                push_field(&mut record, "revision", revision);
                push_field(&mut record, "commit", commit);
            }
            LockedSource::File {
                source_url,
                source_filename,
                source_hash,
            } => {
                push_field(&mut record, "source_url", source_url);
                push_field(&mut record, "source_filename", source_filename);
                push_field(&mut record, "source_hash", source_hash);
            }
            LockedSource::Hg { url, revision } | LockedSource::Svn { url, revision } => {
                push_field(&mut record, "url", url);
                push_field(&mut record, "revision", revision);
            }
        }

        push_field(&mut record, "patch_url", &self.patch_url);
        push_field(&mut record, "patch_filename", &self.patch_filename);
        push_field(&mut record, "patch_hash", &self.patch_hash);

        record
    }

    /// Rebuild an entry from its key/value record.
    ///
    /// `type` and `directory` are required; only the fields matching the
    /// declared kind are read, and unknown keys are ignored so that newer
    /// writers remain readable.
    pub fn from_record(name: &str, record: &Record) -> Result<LockedSubproject> {
        let kind_name = record
            .get("type")
            .ok_or_else(|| malformed_lock_entry(name, "missing type"))?;
        let kind = SourceKind::parse(kind_name)
            .ok_or_else(|| malformed_lock_entry(name, format!("unknown type '{kind_name}'")))?;
        let directory = record
            .get("directory")
            .cloned()
            .ok_or_else(|| malformed_lock_entry(name, "missing directory"))?;

        let value = |key: &str| record.get(key).cloned();

        let source = match kind {
            SourceKind::Git => LockedSource::Git {
                url: value("url"),
                revision: value("revision"),
                commit: value("commit"),
            },
            SourceKind::File => LockedSource::File {
                source_url: value("source_url"),
                source_filename: value("source_filename"),
                source_hash: value("source_hash"),
            },
            SourceKind::Hg => LockedSource::Hg {
                url: value("url"),
                revision: value("revision"),
            },
            SourceKind::Svn => LockedSource::Svn {
                url: value("url"),
                revision: value("revision"),
            },
        };

        Ok(LockedSubproject {
            name: name.to_string(),
            directory,
            source,
            patch_url: value("patch_url"),
            patch_filename: value("patch_filename"),
            patch_hash: value("patch_hash"),
        })
    }
}

fn push_field<'a>(
    record: &mut Vec<(&'static str, &'a str)>,
    key: &'static str,
    value: &'a Option<String>,
) {
    if let Some(value) = value {
        record.push((key, value.as_str()));
    }
}
