//! Error types for taglog using thiserror.

use thiserror::Error;

/// Errors from git subprocess operations.
///
/// A non-zero exit of the previous-tag lookup is never surfaced here; that
/// lookup folds it into an absent result. Everything else that goes wrong
/// with the git binary ends up as one of these variants.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found on PATH. Install git and make sure it is runnable")]
    GitNotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git process timed out after {0} seconds")]
    Timeout(u64),

    #[error("git exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}
