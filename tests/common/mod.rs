//! Common test utilities for Sublock integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary build tree with a subprojects directory
pub struct TestTree {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the build tree root
    pub path: PathBuf,
}

impl TestTree {
    /// Create a build tree with an empty subprojects directory
    pub fn new() -> Self {
        let tree = Self::bare();
        std::fs::create_dir(tree.path.join("subprojects"))
            .expect("Failed to create subprojects directory");
        tree
    }

    /// Create a build tree without a subprojects directory
    #[allow(dead_code)]
    pub fn bare() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a wrap declaration into the subprojects directory
    #[allow(dead_code)]
    pub fn write_wrap(&self, name: &str, content: &str) {
        self.write_file(&format!("subprojects/{name}.wrap"), content);
    }

    /// Write a file in the build tree
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the build tree
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the build tree
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Remove a file from the build tree
    #[allow(dead_code)]
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }
}

/// Initialize a git repository with one commit, returning the commit hash
#[allow(dead_code)]
pub fn init_repo_with_commit(path: &Path) -> String {
    std::fs::create_dir_all(path).expect("Failed to create repository directory");
    let repo = git2::Repository::init(path).expect("Failed to init repository");
    let sig = git2::Signature::now("test", "test@example.org").expect("Failed to create signature");
    let tree_id = {
        let mut index = repo.index().expect("Failed to open index");
        index.write_tree().expect("Failed to write tree")
    };
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .expect("Failed to commit");
    oid.to_string()
}
