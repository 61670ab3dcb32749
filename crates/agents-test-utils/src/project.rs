//! [`TestProject`] fixture: a source checkout plus an isolated home directory.

use std::path::{Path, PathBuf};

use crate::tree::TestTree;

/// A temporary `source/` + `home/` pair laid out the way a sync run expects.
///
/// ```rust,no_run
/// use agents_test_utils::TestProject;
///
/// let project = TestProject::new()
///     .with_agents_md("# Rules")
///     .with_doc("style.md", "tabs")
///     .with_settings(r#"{"permissions": {"allow": ["read"]}}"#);
/// assert!(project.source().join("AGENTS.md").exists());
/// ```
pub struct TestProject {
    tree: TestTree,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Empty `source/agent-docs/` and `home/` directories.
    pub fn new() -> Self {
        let tree = TestTree::new();
        tree.mkdir("source/agent-docs");
        tree.mkdir("home");
        Self { tree }
    }

    pub fn with_agents_md(self, content: &str) -> Self {
        self.tree.write("source/AGENTS.md", content);
        self
    }

    /// Add a file under `source/agent-docs/`.
    pub fn with_doc(self, rel: &str, content: &str) -> Self {
        self.tree.write(&format!("source/agent-docs/{rel}"), content);
        self
    }

    /// Write `source/claude/settings.json`.
    pub fn with_settings(self, json: &str) -> Self {
        self.tree.write("source/claude/settings.json", json);
        self
    }

    /// Write a file relative to the home directory.
    pub fn with_home_file(self, rel: &str, content: &str) -> Self {
        self.tree.write(&format!("home/{rel}"), content);
        self
    }

    pub fn source(&self) -> PathBuf {
        self.tree.path("source")
    }

    pub fn home(&self) -> PathBuf {
        self.tree.path("home")
    }

    pub fn root(&self) -> &Path {
        self.tree.root()
    }

    /// Access the underlying tree for reads and assertions.
    pub fn tree(&self) -> &TestTree {
        &self.tree
    }
}
