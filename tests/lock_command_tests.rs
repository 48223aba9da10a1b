//! Lock command tests
//!
//! Verify that `sublock lock` reconciles wrap declarations into the lock
//! file and that the written file is canonical.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn sublock_cmd() -> Command {
    Command::cargo_bin("sublock").unwrap()
}

const ZLIB_WRAP: &str = "[wrap-file]\n\
directory = zlib-1.3\n\
source_url = https://example.org/zlib-1.3.tar.gz\n\
source_filename = zlib-1.3.tar.gz\n\
source_hash = 5c62c097\n";

const FOO_GIT_WRAP: &str = "[wrap-git]\n\
url = https://example.org/foo.git\n\
revision = v1.2\n";

#[test]
fn test_lock_writes_lock_file() {
    let tree = common::TestTree::new();
    tree.write_wrap("zlib", ZLIB_WRAP);

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locked"))
        .stdout(predicate::str::contains("Lock file saved to"));

    let content = tree.read_file("subprojects/meson.lock");
    assert!(content.starts_with("version = 1\n"));
    assert!(content.contains("[[subproject]]"));
    assert!(content.contains("name = \"zlib\""));
    assert!(content.contains("type = \"file\""));
    assert!(content.contains("directory = \"zlib-1.3\""));
    assert!(content.contains("source_hash = \"5c62c097\""));
}

#[test]
fn test_lock_is_deterministic() {
    let tree = common::TestTree::new();
    tree.write_wrap("zlib", ZLIB_WRAP);
    tree.write_wrap("foo", FOO_GIT_WRAP);

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success();
    let first = tree.read_file("subprojects/meson.lock");

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success();
    let second = tree.read_file("subprojects/meson.lock");

    assert_eq!(first, second);
}

#[test]
fn test_lock_resolves_git_commit() {
    let tree = common::TestTree::new();
    tree.write_wrap("foo", FOO_GIT_WRAP);
    let commit = common::init_repo_with_commit(&tree.path.join("subprojects/foo"));

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success();

    let content = tree.read_file("subprojects/meson.lock");
    assert!(content.contains("revision = \"v1.2\""));
    assert!(content.contains(&format!("commit = \"{commit}\"")));
}

#[test]
fn test_lock_without_checkout_leaves_commit_out() {
    let tree = common::TestTree::new();
    tree.write_wrap("foo", FOO_GIT_WRAP);

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success();

    let content = tree.read_file("subprojects/meson.lock");
    assert!(content.contains("type = \"git\""));
    assert!(!content.contains("commit ="));
}

#[test]
fn test_lock_preserves_orphaned_entries_without_prune() {
    let tree = common::TestTree::new();
    tree.write_wrap("zlib", ZLIB_WRAP);
    tree.write_wrap("foo", FOO_GIT_WRAP);

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success();

    tree.remove_file("subprojects/foo.wrap");
    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success();

    let content = tree.read_file("subprojects/meson.lock");
    assert!(content.contains("name = \"foo\""));
}

#[test]
fn test_lock_prune_removes_orphaned_entries() {
    let tree = common::TestTree::new();
    tree.write_wrap("zlib", ZLIB_WRAP);
    tree.write_wrap("foo", FOO_GIT_WRAP);

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .success();

    tree.remove_file("subprojects/foo.wrap");
    sublock_cmd()
        .current_dir(&tree.path)
        .args(["lock", "--prune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pruned"))
        .stdout(predicate::str::contains("foo"));

    let content = tree.read_file("subprojects/meson.lock");
    assert!(!content.contains("name = \"foo\""));
    assert!(content.contains("name = \"zlib\""));
}

#[test]
fn test_lock_custom_subprojects_dir() {
    let tree = common::TestTree::bare();
    tree.write_file("third_party/zlib.wrap", ZLIB_WRAP);

    sublock_cmd()
        .current_dir(&tree.path)
        .args(["-d", "third_party", "lock"])
        .assert()
        .success();

    assert!(tree.file_exists("third_party/meson.lock"));
}

#[test]
fn test_lock_fails_without_subprojects_dir() {
    let tree = common::TestTree::bare();

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_lock_malformed_wrap_fails() {
    let tree = common::TestTree::new();
    tree.write_wrap("broken", "[wrap-cvs]\nurl = x\n");

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse wrap file"));
}

#[test]
fn test_lock_rejects_unsupported_lock_version() {
    let tree = common::TestTree::new();
    tree.write_wrap("zlib", ZLIB_WRAP);
    tree.write_file("subprojects/meson.lock", "version = 2\n");

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("lock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("version 2 is not supported"));
}
