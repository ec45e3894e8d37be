//! Commit subject listing over tag ranges.

use tracing::debug;

use crate::error::GitError;
use crate::exec::GitCli;

/// List the subject of every commit reachable from `to` but not from `from`.
///
/// Runs `git log --format=%s <from>..<to>`, the standard two-dot exclusion
/// range. This is inclusive of `to`'s own commit; the legacy `from..to^`
/// convention that skipped the boundary commit is deliberately not used.
///
/// Unlike the previous-tag lookup, a failing command here (for example a
/// tag that does not exist) is fatal and propagates to the caller.
pub async fn subjects_between<G: GitCli>(
    git: &G,
    from: &str,
    to: &str,
) -> Result<String, GitError> {
    let subjects = read_subjects(
        git,
        &[
            "log".into(),
            "--format=%s".into(),
            format!("{}..{}", from, to),
        ],
    )
    .await?;

    debug!(from = %from, to = %to, "collected commit subjects in range:\n{}", subjects);
    Ok(subjects)
}

/// List the subject of every commit reachable from `tag` (full ancestry).
///
/// Used when no previous version tag exists, i.e. for the first release.
pub async fn subjects_from<G: GitCli>(git: &G, tag: &str) -> Result<String, GitError> {
    let subjects = read_subjects(git, &["log".into(), "--format=%s".into(), tag.into()]).await?;

    debug!(tag = %tag, "collected commit subjects from tag:\n{}", subjects);
    Ok(subjects)
}

/// Run a `git log` invocation and return its trimmed stdout.
async fn read_subjects<G: GitCli>(git: &G, args: &[String]) -> Result<String, GitError> {
    let output = git.run(args).await?;

    if !output.success() {
        return Err(GitError::NonZeroExit {
            code: output.code(),
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(output.stdout.trim().to_string())
}
