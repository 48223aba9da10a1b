//! Git queries against on-disk checkouts
//!
//! Only local repository inspection; no network access, no mutation.

use std::path::Path;

use git2::Repository;

/// Resolve the currently checked-out commit of a repository.
///
/// Returns None when the path is not a repository or HEAD cannot be
/// resolved (unborn branch, corrupt metadata). Callers treat an unknown
/// commit as non-fatal.
pub fn current_commit(repo_path: &Path) -> Option<String> {
    let repo = Repository::open(repo_path).ok()?;
    let head = repo.head().ok()?;
    let commit = head.peel_to_commit().ok()?;
    Some(commit.id().to_string())
}
