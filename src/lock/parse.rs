//! Lock file parsing
//!
//! Two implementations behind one entry point: the primary path uses the
//! `toml` crate when it is compiled in, the fallback is a line scanner that
//! understands exactly the subset the renderer produces. The choice is made
//! here, at the selection point, never inside the parsing logic itself.

use std::collections::BTreeMap;

use crate::error::{Result, SublockError, malformed_lock};
use crate::lock::subproject::{LockedSubproject, Record};
use crate::lock::{LOCK_FILE_VERSION, LockFile};

/// Parse lock file text, preferring the structured parser when available.
pub fn parse(text: &str) -> Result<LockFile> {
    match parse_primary(text) {
        Some(outcome) => outcome,
        None => parse_fallback(text),
    }
}

/// Primary parser, None when the capability is not compiled in
#[cfg(feature = "toml")]
fn parse_primary(text: &str) -> Option<Result<LockFile>> {
    Some(primary::parse(text))
}

#[cfg(not(feature = "toml"))]
fn parse_primary(_text: &str) -> Option<Result<LockFile>> {
    None
}

fn check_version(version: u32) -> Result<()> {
    if version != LOCK_FILE_VERSION {
        return Err(SublockError::LockVersionMismatch {
            found: version,
            expected: LOCK_FILE_VERSION,
        });
    }
    Ok(())
}

#[cfg(feature = "toml")]
mod primary {
    use super::*;
    use toml::Value;

    pub fn parse(text: &str) -> Result<LockFile> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| malformed_lock(e.to_string()))?;

        let version = match table.get("version") {
            Some(Value::Integer(version)) => u32::try_from(*version)
                .map_err(|_| malformed_lock(format!("version {version} out of range")))?,
            Some(_) => return Err(malformed_lock("version must be an integer")),
            None => LOCK_FILE_VERSION,
        };
        check_version(version)?;

        let mut subprojects = BTreeMap::new();
        if let Some(value) = table.get("subproject") {
            let entries = value
                .as_array()
                .ok_or_else(|| malformed_lock("subproject must be an array of tables"))?;
            for entry in entries {
                let locked = parse_entry(entry)?;
                subprojects.insert(locked.name.clone(), locked);
            }
        }

        Ok(LockFile {
            version,
            subprojects,
        })
    }

    fn parse_entry(entry: &Value) -> Result<LockedSubproject> {
        let table = entry
            .as_table()
            .ok_or_else(|| malformed_lock("subproject entry must be a table"))?;

        let mut name = None;
        let mut record = Record::new();
        for (key, value) in table {
            let value = value
                .as_str()
                .ok_or_else(|| malformed_lock(format!("key '{key}' must be a string")))?;
            if key == "name" {
                name = Some(value.to_string());
            } else {
                record.insert(key.clone(), value.to_string());
            }
        }

        let name = name.ok_or_else(|| malformed_lock("subproject entry missing name"))?;
        LockedSubproject::from_record(&name, &record)
    }
}

/// Fallback line scanner.
///
/// Handles only the renderer's subset: blank lines and `#` comments are
/// skipped, `[[subproject]]` opens a record, `key = value` lines inside a
/// record buffer quote-stripped values, and `version = <int>` outside any
/// record sets the format version. Records without a name are dropped.
pub(crate) fn parse_fallback(text: &str) -> Result<LockFile> {
    let version = scan_version(text)?;
    check_version(version)?;

    let mut subprojects = BTreeMap::new();
    let mut current: Option<Record> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line == "[[subproject]]" {
            flush_record(current.take(), &mut subprojects)?;
            current = Some(Record::new());
        } else if let Some((key, value)) = line.split_once('=') {
            if let Some(record) = current.as_mut() {
                let value = value.trim().trim_matches('"');
                record.insert(key.trim().to_string(), value.to_string());
            }
        }
    }
    flush_record(current.take(), &mut subprojects)?;

    Ok(LockFile {
        version,
        subprojects,
    })
}

/// Find the format version before any record parsing happens, so a version
/// mismatch fails without producing a partial mapping.
fn scan_version(text: &str) -> Result<u32> {
    for line in text.lines() {
        let line = line.trim();
        if line == "[[subproject]]" {
            break;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim() == "version" {
            let value = value.trim();
            return value
                .parse()
                .map_err(|_| malformed_lock(format!("version '{value}' is not an integer")));
        }
    }
    Ok(LOCK_FILE_VERSION)
}

fn flush_record(
    record: Option<Record>,
    subprojects: &mut BTreeMap<String, LockedSubproject>,
) -> Result<()> {
    let Some(record) = record else {
        return Ok(());
    };
    let Some(name) = record.get("name").cloned() else {
        return Ok(());
    };
    let locked = LockedSubproject::from_record(&name, &record)?;
    subprojects.insert(name, locked);
    Ok(())
}
