//! [`TestSite`] builder for site-manager test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::git;

/// Deploy command that succeeds wherever the fixtures themselves can run.
pub const FAKE_DEPLOY_CONFIG: &str = "[deploy]\ncommand = [\"git\", \"--version\"]\n";

/// A sandbox directory with the content root at `<sandbox>/site`.
///
/// Keeping the root one level down leaves room for files outside it, which
/// traversal tests need, and for a bare remote at `<sandbox>/remote.git`.
///
/// # Example
///
/// ```rust,no_run
/// use site_test_utils::site::TestSite;
///
/// let site = TestSite::new().with_git().with_remote();
/// site.write("src/content/blog/hello.md", "# Hello\n");
/// site.assert_file_exists("src/content/blog/hello.md");
/// ```
pub struct TestSite {
    sandbox: TempDir,
    root: PathBuf,
    remote: Option<PathBuf>,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create the sandbox and an empty content root.
    pub fn new() -> Self {
        let sandbox = TempDir::new().expect("TestSite::new: failed to create temp dir");
        let root = sandbox.path().join("site");
        fs::create_dir(&root).expect("TestSite::new: failed to create site root");
        Self {
            sandbox,
            root,
            remote: None,
        }
    }

    /// Make the root a git repository with an initial commit on `main`.
    pub fn with_git(self) -> Self {
        git::init_repo_with_commit(&self.root);
        self
    }

    /// Attach a bare `origin` remote. Requires [`TestSite::with_git`].
    pub fn with_remote(mut self) -> Self {
        let remote = self.sandbox.path().join("remote.git");
        git::attach_bare_remote(&self.root, &remote);
        self.remote = Some(remote);
        self
    }

    /// Write `.site-mcp.toml` at the root.
    pub fn with_config(self, toml: &str) -> Self {
        fs::write(self.root.join(".site-mcp.toml"), toml)
            .expect("TestSite::with_config: failed to write config");
        self
    }

    /// Configure a deploy command that always succeeds.
    pub fn with_fake_deploy(self) -> Self {
        self.with_config(FAKE_DEPLOY_CONFIG)
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The sandbox directory containing the root.
    pub fn sandbox(&self) -> &Path {
        self.sandbox.path()
    }

    /// The bare remote, if attached.
    pub fn remote(&self) -> Option<&Path> {
        self.remote.as_deref()
    }

    /// Write `content` at `path` relative to the root, creating parents.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
    }

    /// Write `content` at `path` relative to the sandbox, outside the root.
    pub fn write_outside(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.sandbox.path().join(path);
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
        full_path
    }

    /// Read the file at `path` relative to the root.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root.join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
