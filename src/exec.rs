//! Git subprocess spawning and output capture.

use std::env;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::GitError;

/// Default timeout for a single git invocation (1 minute).
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "TAGLOG_GIT_TIMEOUT";

/// Get the configured timeout duration.
///
/// Reads from TAGLOG_GIT_TIMEOUT environment variable if set,
/// otherwise uses the default of 60 seconds.
///
/// Logs a warning if the environment variable is set but contains
/// an invalid value (non-numeric, empty, or negative).
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Captured result of a finished git invocation.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Exit code, if the process terminated normally.
    pub status_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }

    /// Exit code for error reporting; -1 when the process was killed by a signal.
    pub fn code(&self) -> i32 {
        self.status_code.unwrap_or(-1)
    }
}

/// Trait for running the git binary and capturing its output.
///
/// This abstraction allows mocking the git subprocess in tests. The runner
/// only fails when the process cannot run at all (spawn failure, timeout);
/// interpreting a non-zero exit is the caller's job, since the previous-tag
/// lookup treats it as absence while the log readers treat it as fatal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitCli: Send + Sync {
    /// Run `git` with the given arguments and capture the result.
    async fn run(&self, args: &[String]) -> Result<GitOutput, GitError>;
}

/// `GitCli` backed by the system `git` binary, inheriting the user's
/// existing git config and environment.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    repo_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the current working directory.
    pub fn new() -> Self {
        Self { repo_dir: None }
    }

    /// Run git inside the given repository directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl GitCli for SystemGit {
    async fn run(&self, args: &[String]) -> Result<GitOutput, GitError> {
        let timeout_duration = get_timeout();
        let timeout_secs = timeout_duration.as_secs();

        debug!(?args, "running git");

        let mut cmd = Command::new("git");
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        let output = timeout(timeout_duration, cmd.output())
            .await
            .map_err(|_| GitError::Timeout(timeout_secs))?
            .map_err(GitError::SpawnFailed)?;

        Ok(GitOutput {
            status_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Check that the git binary is installed and runnable.
///
/// Uses the `which` crate for cross-platform executable detection, then
/// verifies the binary actually runs by probing `git --version`.
pub async fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::GitNotInstalled);
    }

    let version_check = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(GitError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(GitError::GitNotInstalled);
    }

    Ok(())
}
