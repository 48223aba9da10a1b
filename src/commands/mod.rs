//! Command implementations for Sublock CLI

pub mod lock;
pub mod show;
pub mod status;
pub mod version;

use std::path::PathBuf;

/// Subprojects directory from the CLI argument or the conventional default
fn resolve_subprojects_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("subprojects"))
}
