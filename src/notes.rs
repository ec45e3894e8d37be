//! Release note extraction: what did this tag introduce?

use serde::{Deserialize, Serialize};

use crate::error::GitError;
use crate::exec::GitCli;
use crate::git::log::{subjects_between, subjects_from};
use crate::git::tags::previous_version_tag;

/// The changes a release tag introduced, in structured form.
///
/// `subjects` is ordered most-recent-first, the natural order of history
/// traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagChanges {
    pub tag: String,
    pub previous_tag: Option<String>,
    pub subjects: Vec<String>,
}

/// Get the commit subjects introduced by `tag`, as a newline-joined block.
///
/// Resolves the previous version tag on the first-parent line; when one
/// exists the result covers the `previous..tag` exclusion range, otherwise
/// the tag's entire ancestry (the first release). The delegated reader's
/// output is returned unmodified.
///
/// This is the public entry point for consumers that want plain text.
pub async fn changes_introduced_by_tag<G: GitCli>(
    git: &G,
    tag: &str,
) -> Result<String, GitError> {
    match previous_version_tag(git, tag).await? {
        Some(previous) => subjects_between(git, &previous, tag).await,
        None => subjects_from(git, tag).await,
    }
}

/// Like [`changes_introduced_by_tag`], but keeps the resolved previous tag
/// and splits the block into one subject per entry.
pub async fn collect_tag_changes<G: GitCli>(
    git: &G,
    tag: &str,
) -> Result<TagChanges, GitError> {
    let previous_tag = previous_version_tag(git, tag).await?;

    let block = match &previous_tag {
        Some(previous) => subjects_between(git, previous, tag).await?,
        None => subjects_from(git, tag).await?,
    };

    let subjects = block.lines().map(str::to_string).collect();

    Ok(TagChanges {
        tag: tag.to_string(),
        previous_tag,
        subjects,
    })
}
