//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Commit, Oid, Repository, Signature};

/// A test git repository builder for integration tests.
///
/// Fixtures are built with git2 while the code under test talks to the
/// repository through the system git binary, so these tests exercise the
/// real subprocess path end to end.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create a commit on HEAD with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        // Create or update a file to have something to commit
        let file_path = self.dir.path().join("test.txt");
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        std::fs::write(&file_path, content).expect("Failed to write test file");

        // Add the file to the index
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new("test.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        // Get parent commit if exists
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a commit off the given parent without moving HEAD.
    ///
    /// Used to simulate side-branch work that later gets merged in.
    pub fn commit_detached(&self, message: &str, parent: Oid) -> Oid {
        let sig = self.signature();
        let parent_commit = self
            .repo
            .find_commit(parent)
            .expect("Failed to find parent commit");
        let tree = parent_commit.tree().expect("Failed to get parent tree");

        self.repo
            .commit(None, &sig, &sig, message, &tree, &[&parent_commit])
            .expect("Failed to create detached commit")
    }

    /// Create a merge commit on HEAD with `side` as the second parent.
    pub fn merge(&self, message: &str, side: Oid) -> Oid {
        let sig = self.signature();
        let head = self
            .repo
            .head()
            .expect("Failed to get HEAD")
            .peel_to_commit()
            .expect("Failed to peel HEAD");
        let side_commit = self.repo.find_commit(side).expect("Failed to find side commit");
        let tree = head.tree().expect("Failed to get HEAD tree");

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&head, &side_commit])
            .expect("Failed to create merge commit")
    }

    /// Create a lightweight tag pointing to the given OID.
    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag_lightweight(name, &obj, false)
            .expect("Failed to create lightweight tag");
    }

    /// Create an annotated tag pointing to the given OID.
    ///
    /// Version tags in these tests are annotated, matching how release
    /// tags are normally created; `git describe` only considers annotated
    /// tags unless told otherwise.
    pub fn tag_annotated(&self, name: &str, oid: Oid, message: &str) {
        let sig = self.signature();
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag(name, &obj, &sig, message, false)
            .expect("Failed to create annotated tag");
    }
}
