//! Wrap declaration file parsing
//!
//! One INI-style file per subproject: a leading `[wrap-<kind>]` section
//! followed by `key = value` lines. Only the leading section is
//! lock-relevant; later sections (provides and the like) are skipped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, SublockError, wrap_parse_failed};
use crate::lock::SourceKind;
use crate::wrap::PackageDefinition;

fn section_kind(section: &str) -> Option<SourceKind> {
    match section {
        "wrap-git" => Some(SourceKind::Git),
        "wrap-file" => Some(SourceKind::File),
        "wrap-hg" => Some(SourceKind::Hg),
        "wrap-svn" => Some(SourceKind::Svn),
        _ => None,
    }
}

/// Parse a wrap declaration file into a package definition.
///
/// The subproject name is the file stem; `directory` defaults to the name
/// when the declaration omits it.
pub fn parse_wrap_file(path: &Path) -> Result<PackageDefinition> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            wrap_parse_failed(path.display().to_string(), "file name is not valid UTF-8")
        })?
        .to_string();

    let content = fs::read_to_string(path).map_err(|e| SublockError::WrapReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_wrap(&name, &content).map_err(|reason| wrap_parse_failed(path.display().to_string(), reason))
}

fn parse_wrap(
    name: &str,
    content: &str,
) -> std::result::Result<PackageDefinition, String> {
    let mut kind = None;
    let mut values = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            if kind.is_some() {
                // Later sections are not lock-relevant
                break;
            }
            kind = Some(
                section_kind(section).ok_or_else(|| format!("unknown section '[{section}]'"))?,
            );
        } else if let Some((key, value)) = line.split_once('=') {
            if kind.is_none() {
                return Err(format!("key '{}' before any section", key.trim()));
            }
            values.insert(key.trim().to_string(), value.trim().to_string());
        } else {
            return Err(format!("unparsable line '{line}'"));
        }
    }

    let kind = kind.ok_or("missing [wrap-*] section")?;
    let directory = values
        .get("directory")
        .cloned()
        .unwrap_or_else(|| name.to_string());

    Ok(PackageDefinition {
        name: name.to_string(),
        kind,
        directory,
        values,
    })
}
