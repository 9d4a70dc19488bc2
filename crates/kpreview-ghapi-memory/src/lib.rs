//! In-memory driver for the forge API.

use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use kpreview_ghapi_interface::{
    types::{GhCommitShort, GhIssueComment, GhPullRequestShort, GhReactionType, GhUser},
    ApiError, ApiService, Result,
};
use time::OffsetDateTime;

type IssueKey = (String, String, u64);

#[derive(Debug, Default)]
pub struct MemoryApiService {
    comments: RwLock<HashMap<IssueKey, Vec<GhIssueComment>>>,
    reactions: RwLock<HashMap<u64, Vec<GhReactionType>>>,
    pull_requests: RwLock<HashMap<IssueKey, GhPullRequestShort>>,
    commits: RwLock<HashMap<IssueKey, Vec<GhCommitShort>>>,
}

impl MemoryApiService {
    pub fn new() -> Self {
        Default::default()
    }

    /// Register a pull request and its commits, oldest first.
    pub fn add_pull_request(
        &self,
        owner: &str,
        name: &str,
        pull_request: GhPullRequestShort,
        commits: Vec<GhCommitShort>,
    ) {
        let key = Self::key(owner, name, pull_request.number);
        self.commits.write().unwrap().insert(key.clone(), commits);
        self.pull_requests.write().unwrap().insert(key, pull_request);
    }

    /// Add a comment authored by someone else.
    pub fn add_comment(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        user: GhUser,
        body: &str,
    ) -> GhIssueComment {
        let comment = GhIssueComment {
            id: self.next_comment_id(),
            user,
            created_at: OffsetDateTime::now_utc(),
            body: body.into(),
        };

        self.comments
            .write()
            .unwrap()
            .entry(Self::key(owner, name, issue_number))
            .or_default()
            .push(comment.clone());
        comment
    }

    pub fn reactions(&self, comment_id: u64) -> Vec<GhReactionType> {
        self.reactions
            .read()
            .unwrap()
            .get(&comment_id)
            .cloned()
            .unwrap_or_default()
    }

    fn key(owner: &str, name: &str, number: u64) -> IssueKey {
        (owner.into(), name.into(), number)
    }

    fn next_comment_id(&self) -> u64 {
        self.comments
            .read()
            .unwrap()
            .values()
            .flatten()
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    fn not_found(what: String) -> ApiError {
        ApiError::HttpError {
            status: Some(404),
            message: format!("{what} not found"),
        }
    }

    fn bot_user() -> GhUser {
        GhUser {
            login: "kpreview[bot]".into(),
            user_type: "Bot".into(),
        }
    }
}

#[async_trait]
impl ApiService for MemoryApiService {
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhIssueComment>> {
        Ok(self
            .comments
            .read()
            .unwrap()
            .get(&Self::key(owner, name, issue_number))
            .cloned()
            .unwrap_or_default())
    }

    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<GhIssueComment> {
        Ok(self.add_comment(owner, name, issue_number, Self::bot_user(), body))
    }

    async fn comments_update(
        &self,
        _owner: &str,
        _name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64> {
        let mut comments = self.comments.write().unwrap();
        let comment = comments
            .values_mut()
            .flatten()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| Self::not_found(format!("Comment {comment_id}")))?;
        comment.body = body.into();

        Ok(comment_id)
    }

    async fn comments_delete(&self, _owner: &str, _name: &str, comment_id: u64) -> Result<()> {
        let mut comments = self.comments.write().unwrap();
        let mut found = false;
        for issue_comments in comments.values_mut() {
            let count = issue_comments.len();
            issue_comments.retain(|c| c.id != comment_id);
            found |= issue_comments.len() != count;
        }

        if found {
            Ok(())
        } else {
            Err(Self::not_found(format!("Comment {comment_id}")))
        }
    }

    async fn comment_reactions_add(
        &self,
        _owner: &str,
        _name: &str,
        comment_id: u64,
        reaction_type: GhReactionType,
    ) -> Result<()> {
        self.reactions
            .write()
            .unwrap()
            .entry(comment_id)
            .or_default()
            .push(reaction_type);
        Ok(())
    }

    async fn pulls_get(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<GhPullRequestShort> {
        self.pull_requests
            .read()
            .unwrap()
            .get(&Self::key(owner, name, issue_number))
            .cloned()
            .ok_or_else(|| Self::not_found(format!("Pull request #{issue_number}")))
    }

    async fn pulls_commits_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GhCommitShort>> {
        let skip = (page.saturating_sub(1) * per_page) as usize;
        Ok(self
            .commits
            .read()
            .unwrap()
            .get(&Self::key(owner, name, issue_number))
            .map(|commits| {
                commits
                    .iter()
                    .skip(skip)
                    .take(per_page as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn commits_pulls_list(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
    ) -> Result<Vec<GhPullRequestShort>> {
        let pull_requests = self.pull_requests.read().unwrap();
        let commits = self.commits.read().unwrap();

        let mut values: Vec<_> = commits
            .iter()
            .filter(|((o, n, _), commits)| {
                o == owner && n == name && commits.iter().any(|c| c.sha == sha)
            })
            .filter_map(|(key, _)| pull_requests.get(key).cloned())
            .collect();
        values.sort_by_key(|pr| pr.number);
        Ok(values)
    }
}
