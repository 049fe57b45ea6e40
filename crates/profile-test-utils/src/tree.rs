//! [`TestProfileTree`] builder for profile inheritance scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding named profile directories.
///
/// # Example
///
/// ```rust,no_run
/// use profile_test_utils::TestProfileTree;
///
/// let tree = TestProfileTree::new();
/// tree.write("base", "use.mask", "X\n");
/// tree.write("child", "use.mask", "-X\n");
/// tree.parents("child", &["base"]);
/// tree.assert_file_contains("child/parent", "../base");
/// ```
pub struct TestProfileTree {
    temp_dir: TempDir,
}

impl Default for TestProfileTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProfileTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the profile `name` (relative to root), created if missing.
    pub fn profile(&self, name: &str) -> PathBuf {
        let dir = self.root().join(name);
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("Could not create profile {}: {e}", dir.display()));
        dir
    }

    /// Write `content` to `file` inside profile `name`.
    pub fn write(&self, name: &str, file: &str, content: &str) -> PathBuf {
        let path = self.profile(name).join(file);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
        path
    }

    /// Write a `parent` file for `name` pointing at the given profiles.
    ///
    /// Entries are written relative to `name`, so nested names work.
    pub fn parents(&self, name: &str, parents: &[&str]) -> PathBuf {
        let depth = Path::new(name).components().count();
        let up = "../".repeat(depth);
        let content: String = parents
            .iter()
            .map(|p| format!("{up}{p}\n"))
            .collect();
        self.write(name, "parent", &content)
    }

    /// Read a file relative to root.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Create an empty directory relative to root, e.g. a dump target.
    pub fn dir(&self, path: &str) -> PathBuf {
        let dir = self.root().join(path);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Names of the files directly inside `path` (relative to root), sorted.
    pub fn list(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root().join(path))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Panic unless `path` (relative to root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(full_path.exists(), "missing from tree: {}", full_path.display());
    }

    /// Panic if `path` (relative to root) exists, e.g. a dump that should
    /// not have been written.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(!full_path.exists(), "unexpected in tree: {}", full_path.display());
    }

    /// Panic unless the file at `path` contains `needle`.
    pub fn assert_file_contains(&self, path: &str, needle: &str) {
        let content = self.read(path);
        assert!(
            content.contains(needle),
            "{path} lacks {needle:?}; full content:\n{content}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_profile_parents_are_relative() {
        let tree = TestProfileTree::new();
        tree.parents("arch/amd64", &["base"]);
        tree.assert_file_contains("arch/amd64/parent", "../../base\n");
    }

    #[test]
    fn list_is_sorted() {
        let tree = TestProfileTree::new();
        tree.write("p", "use.mask", "");
        tree.write("p", "make.defaults", "");
        assert_eq!(tree.list("p"), vec!["make.defaults", "use.mask"]);
    }
}
