//! GitHub adapter

use async_trait::async_trait;
use kpreview_config::Config;
use kpreview_ghapi_interface::{
    types::{GhCommitShort, GhIssueComment, GhPullRequestShort, GhReactionType},
    ApiService, Result,
};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const COMMENTS_PER_PAGE: usize = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn send(request: RequestBuilder) -> Result<(), GitHubError> {
        request.send().await?.error_for_status()?;
        Ok(())
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, GitHubError> {
        Ok(request.send().await?.error_for_status()?.json().await?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn comments_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhIssueComment>> {
        let url = self.build_url(format!(
            "/repos/{owner}/{name}/issues/{issue_number}/comments"
        ));
        let mut comments = Vec::new();
        let mut page: usize = 1;

        loop {
            let page_comments: Vec<GhIssueComment> = Self::send_json(
                self.get_client()?
                    .get(&url)
                    .query(&[("per_page", COMMENTS_PER_PAGE), ("page", page)]),
            )
            .await?;
            let count = page_comments.len();
            comments.extend(page_comments);

            if count < COMMENTS_PER_PAGE {
                break;
            }

            page += 1;
        }

        Ok(comments)
    }

    #[tracing::instrument(skip(self, body))]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<GhIssueComment> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        Ok(Self::send_json(
            self.get_client()?
                .post(self.build_url(format!(
                    "/repos/{owner}/{name}/issues/{issue_number}/comments"
                )))
                .json(&Request { body }),
        )
        .await?)
    }

    #[tracing::instrument(skip(self, body), ret)]
    async fn comments_update(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        let response: Response = Self::send_json(
            self.get_client()?
                .patch(self.build_url(format!(
                    "/repos/{owner}/{name}/issues/comments/{comment_id}"
                )))
                .json(&Request { body }),
        )
        .await?;

        Ok(response.id)
    }

    #[tracing::instrument(skip(self))]
    async fn comments_delete(&self, owner: &str, name: &str, comment_id: u64) -> Result<()> {
        Ok(Self::send(self.get_client()?.delete(self.build_url(format!(
            "/repos/{owner}/{name}/issues/comments/{comment_id}"
        ))))
        .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn comment_reactions_add(
        &self,
        owner: &str,
        name: &str,
        comment_id: u64,
        reaction_type: GhReactionType,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request {
            content: GhReactionType,
        }

        Ok(Self::send(
            self.get_client()?
                .post(self.build_url(format!(
                    "/repos/{owner}/{name}/issues/comments/{comment_id}/reactions"
                )))
                .json(&Request {
                    content: reaction_type,
                }),
        )
        .await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<GhPullRequestShort> {
        Ok(Self::send_json(
            self.get_client()?
                .get(self.build_url(format!("/repos/{owner}/{name}/pulls/{issue_number}"))),
        )
        .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_commits_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GhCommitShort>> {
        Ok(Self::send_json(
            self.get_client()?
                .get(self.build_url(format!(
                    "/repos/{owner}/{name}/pulls/{issue_number}/commits"
                )))
                .query(&[("per_page", per_page), ("page", page)]),
        )
        .await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commits_pulls_list(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
    ) -> Result<Vec<GhPullRequestShort>> {
        Ok(Self::send_json(
            self.get_client()?
                .get(self.build_url(format!("/repos/{owner}/{name}/commits/{sha}/pulls"))),
        )
        .await?)
    }
}
