//! Previous version tag resolution.

use tracing::debug;

use crate::error::GitError;
use crate::exec::GitCli;

/// Glob handed to `git describe --match` to restrict candidates to
/// version-looking tags (`v` followed by a digit, e.g. `v1`, `v2.0`).
pub const VERSION_TAG_GLOB: &str = "v[0-9]*";

/// Find the nearest version tag preceding `tag` on the first-parent line.
///
/// Runs `git describe --match v[0-9]* --abbrev=0 --first-parent <tag>^`,
/// i.e. the search starts at the tag's immediate parent and ignores commits
/// that are only reachable through merged side branches.
///
/// Returns `Ok(None)` when the search finds nothing. That covers the first
/// release of a project, a `tag` that names the root commit (which has no
/// parent to start from), and any other describe failure; the contract only
/// distinguishes success-with-a-name from everything else.
pub async fn previous_version_tag<G: GitCli>(
    git: &G,
    tag: &str,
) -> Result<Option<String>, GitError> {
    let output = git
        .run(&[
            "describe".into(),
            "--match".into(),
            VERSION_TAG_GLOB.into(),
            "--abbrev=0".into(),
            "--first-parent".into(),
            format!("{}^", tag),
        ])
        .await?;

    if !output.success() {
        debug!(
            tag = %tag,
            "no previous version tag reachable on the first-parent line"
        );
        return Ok(None);
    }

    let previous = output.stdout.trim().to_string();
    if previous.is_empty() {
        return Ok(None);
    }

    debug!(tag = %tag, previous = %previous, "resolved previous version tag");
    Ok(Some(previous))
}
