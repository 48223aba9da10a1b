//! Source kinds and per-kind payloads for locked subprojects

use serde::Serialize;
use std::fmt;

/// Closed set of subproject source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Git,
    File,
    Hg,
    Svn,
}

impl SourceKind {
    /// Kind name as written in lock and wrap files
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Git => "git",
            SourceKind::File => "file",
            SourceKind::Hg => "hg",
            SourceKind::Svn => "svn",
        }
    }

    /// Parse a kind name; None for anything outside the closed set
    pub fn parse(s: &str) -> Option<SourceKind> {
        match s {
            "git" => Some(SourceKind::Git),
            "file" => Some(SourceKind::File),
            "hg" => Some(SourceKind::Hg),
            "svn" => Some(SourceKind::Svn),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source identity of a locked subproject
///
/// One payload shape per kind, so fields of another kind cannot be populated
/// by construction. Every field is optional: a declaration may omit any of
/// them, and absent fields are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LockedSource {
    /// Version-controlled git repository
    Git {
        /// Repository URL
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        /// Revision as declared by the project (branch, tag, or commit)
        #[serde(skip_serializing_if = "Option::is_none")]
        revision: Option<String>,
        /// Commit hash observed on disk at lock time
        #[serde(skip_serializing_if = "Option::is_none")]
        commit: Option<String>,
    },
    /// Plain downloadable archive
    File {
        /// Download URL
        #[serde(skip_serializing_if = "Option::is_none")]
        source_url: Option<String>,
        /// Archive file name
        #[serde(skip_serializing_if = "Option::is_none")]
        source_filename: Option<String>,
        /// Content hash of the archive
        #[serde(skip_serializing_if = "Option::is_none")]
        source_hash: Option<String>,
    },
    /// Mercurial repository
    Hg {
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        revision: Option<String>,
    },
    /// Subversion repository
    Svn {
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        revision: Option<String>,
    },
}

impl LockedSource {
    /// The kind tag of this source
    pub fn kind(&self) -> SourceKind {
        match self {
            LockedSource::Git { .. } => SourceKind::Git,
            LockedSource::File { .. } => SourceKind::File,
            LockedSource::Hg { .. } => SourceKind::Hg,
            LockedSource::Svn { .. } => SourceKind::Svn,
        }
    }
}
