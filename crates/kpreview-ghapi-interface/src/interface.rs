use async_trait::async_trait;

use crate::{
    types::{GhCommitShort, GhIssueComment, GhPullRequestShort, GhReactionType},
    Result,
};

/// Forge API adapter interface.
///
/// Every operation is scoped to one repository, given as `owner`/`name`.
/// Failures are never retried.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List every comment of an issue, oldest first.
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhIssueComment>>;
    /// Post a comment on a pull request.
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<GhIssueComment>;
    /// Replace the body of a comment.
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64>;
    /// Delete a comment.
    async fn comments_delete(&self, owner: &str, name: &str, comment_id: u64) -> Result<()>;
    /// Add a reaction to a comment.
    async fn comment_reactions_add(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        reaction_type: GhReactionType,
    ) -> Result<()>;
    /// Get a pull request from its number.
    async fn pulls_get(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<GhPullRequestShort>;
    /// List one page of commits from a pull request.
    async fn pulls_commits_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GhCommitShort>>;
    /// List pull requests associated with a commit.
    async fn commits_pulls_list(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
    ) -> Result<Vec<GhPullRequestShort>>;
}
