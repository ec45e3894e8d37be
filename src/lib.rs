//! taglog - lists the commit subjects introduced by a release tag.
//!
//! # Overview
//!
//! Given a release tag, taglog finds the nearest preceding version tag on
//! the first-parent line of history and lists the subject of every commit
//! unique to the release. When no previous version tag exists (the first
//! release), the whole ancestry is listed instead. All repository queries
//! shell out to the system `git` binary.

pub mod error;
pub mod exec;
pub mod git;
pub mod notes;

// Re-export commonly used types
pub use error::GitError;
pub use exec::{GitCli, GitOutput, SystemGit, check_git_installed};
pub use notes::{TagChanges, changes_introduced_by_tag, collect_tag_changes};
