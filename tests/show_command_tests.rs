//! Show command tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn sublock_cmd() -> Command {
    Command::cargo_bin("sublock").unwrap()
}

const LOCK_CONTENT: &str = "version = 1\n\n\
[[subproject]]\n\
name = \"foo\"\n\
type = \"git\"\n\
directory = \"foo\"\n\
url = \"https://example.org/foo.git\"\n\
revision = \"v1.2\"\n\
commit = \"abc123def456\"\n\n\
[[subproject]]\n\
name = \"zlib\"\n\
type = \"file\"\n\
directory = \"zlib-1.3\"\n\
source_url = \"https://example.org/zlib-1.3.tar.gz\"\n\
source_filename = \"zlib-1.3.tar.gz\"\n\
source_hash = \"5c62c097\"\n";

#[test]
fn test_show_without_lock_file_fails() {
    let tree = common::TestTree::new();

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lock file is missing"));
}

#[test]
fn test_show_lists_all_subprojects() {
    let tree = common::TestTree::new();
    tree.write_file("subprojects/meson.lock", LOCK_CONTENT);

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locked subprojects (2):"))
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains("zlib"))
        .stdout(predicate::str::contains("Type:"))
        .stdout(predicate::str::contains("Directory:"));
}

#[test]
fn test_show_single_subproject() {
    let tree = common::TestTree::new();
    tree.write_file("subprojects/meson.lock", LOCK_CONTENT);

    sublock_cmd()
        .current_dir(&tree.path)
        .args(["show", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains("v1.2"))
        .stdout(predicate::str::contains("abc123def456"))
        .stdout(predicate::str::contains("zlib").not());
}

#[test]
fn test_show_unknown_subproject_fails() {
    let tree = common::TestTree::new();
    tree.write_file("subprojects/meson.lock", LOCK_CONTENT);

    sublock_cmd()
        .current_dir(&tree.path)
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'missing' is not locked"));
}

#[test]
fn test_show_json_output() {
    let tree = common::TestTree::new();
    tree.write_file("subprojects/meson.lock", LOCK_CONTENT);

    let output = sublock_cmd()
        .current_dir(&tree.path)
        .args(["show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["version"], 1);
    let entries = json["subproject"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "foo");
    assert_eq!(entries[0]["type"], "git");
    assert_eq!(entries[0]["commit"], "abc123def456");
    assert_eq!(entries[1]["name"], "zlib");
    assert_eq!(entries[1]["source_hash"], "5c62c097");
}

#[test]
fn test_show_json_single_subproject() {
    let tree = common::TestTree::new();
    tree.write_file("subprojects/meson.lock", LOCK_CONTENT);

    let output = sublock_cmd()
        .current_dir(&tree.path)
        .args(["show", "zlib", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["name"], "zlib");
    assert_eq!(json["type"], "file");
}

#[test]
fn test_show_empty_lock_file() {
    let tree = common::TestTree::new();
    tree.write_file("subprojects/meson.lock", "version = 1\n");

    sublock_cmd()
        .current_dir(&tree.path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No subprojects locked."));
}
