//! Pull request helpers.

use tracing::info;

use crate::{ApiError, ApiService, GhEvent, Result};

const COMMITS_PER_PAGE: u32 = 100;

/// Pull request API.
pub struct PullRequestApi;

impl PullRequestApi {
    /// Resolve the pull request number targeted by the triggering event.
    ///
    /// `sha` is the triggering commit, only used for push events.
    #[tracing::instrument(skip(api_service, event), fields(event = event.name()))]
    pub async fn resolve_current_pull_request_number(
        api_service: &dyn ApiService,
        owner: &str,
        name: &str,
        event: &GhEvent,
        sha: &str,
    ) -> Result<u64> {
        match event {
            GhEvent::Push(_) => {
                let pulls = api_service.commits_pulls_list(owner, name, sha).await?;
                pulls
                    .first()
                    .map(|pr| pr.number)
                    .ok_or_else(|| ApiError::NoAssociatedPullRequest { sha: sha.into() })
            }
            GhEvent::PullRequest(payload) | GhEvent::PullRequestTarget(payload) => payload
                .pull_request_number()
                .ok_or_else(|| ApiError::MissingContext {
                    what: "pull request number in event payload".into(),
                }),
            GhEvent::IssueComment(payload) => payload
                .issue
                .as_ref()
                .map(|issue| issue.number)
                .ok_or_else(|| ApiError::MissingContext {
                    what: "issue number in event payload".into(),
                }),
            GhEvent::Other(event) => Err(ApiError::UnsupportedEvent {
                event: event.clone(),
            }),
        }
    }

    /// Fetch the abbreviated SHA of the most recent commit of a pull request.
    ///
    /// Pages are fetched one by one until a short page is met.
    #[tracing::instrument(skip(api_service), ret)]
    pub async fn latest_commit_short_sha(
        api_service: &dyn ApiService,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<String> {
        let mut page = 1;
        let mut latest = None;

        loop {
            let commits = api_service
                .pulls_commits_list(owner, name, issue_number, page, COMMITS_PER_PAGE)
                .await?;
            let count = commits.len();
            if let Some(commit) = commits.into_iter().last() {
                latest = Some(commit);
            }

            if count < COMMITS_PER_PAGE as usize {
                break;
            }

            page += 1;
        }

        info!(pages = page, message = "Commit pages fetched");

        latest
            .map(|commit| commit.short_sha())
            .ok_or_else(|| ApiError::MissingContext {
                what: format!("commits on pull request #{issue_number}"),
            })
    }
}
