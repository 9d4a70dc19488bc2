use std::fmt::Display;

use crate::PullRequestHandle;

/// Kind of the triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    IssueComment,
    PullRequest,
    PullRequestTarget,
    Push,
    Other(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "issue_comment" => Self::IssueComment,
            "pull_request" => Self::PullRequest,
            "pull_request_target" => Self::PullRequestTarget,
            "push" => Self::Push,
            other => Self::Other(other.into()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::IssueComment => "issue_comment",
            Self::PullRequest => "pull_request",
            Self::PullRequestTarget => "pull_request_target",
            Self::Push => "push",
            Self::Other(other) => other,
        }
    }

    pub fn is_pull_request(&self) -> bool {
        matches!(self, Self::PullRequest | Self::PullRequestTarget)
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pull request lifecycle action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Reopened,
    Synchronize,
    Closed,
    Other(String),
}

impl PullRequestAction {
    pub fn from_name(name: &str) -> Self {
        match name {
            "opened" => Self::Opened,
            "reopened" => Self::Reopened,
            "synchronize" => Self::Synchronize,
            "closed" => Self::Closed,
            other => Self::Other(other.into()),
        }
    }
}

/// What happened on the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewTrigger {
    /// A comment was posted, edited or deleted.
    Comment {
        id: u64,
        body: String,
        author: String,
        author_is_bot: bool,
        /// Only newly created comments may carry commands.
        created: bool,
    },
    PullRequest(PullRequestAction),
    Other,
}

impl PreviewTrigger {
    pub fn is_comment(&self) -> bool {
        matches!(self, Self::Comment { .. })
    }

    pub fn is_bot(&self) -> bool {
        matches!(
            self,
            Self::Comment {
                author_is_bot: true,
                ..
            }
        )
    }
}

/// Read-only snapshot of the triggering pull request, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    pub event: EventKind,
    pub trigger: PreviewTrigger,
    pub actor: String,
    pub handle: PullRequestHandle,
    /// Seven first characters of the latest commit hash.
    pub short_sha: String,
    /// Run number supplied by the CI system.
    pub run_number: u64,
}

impl PullRequestContext {
    pub fn pr_number(&self) -> u64 {
        self.handle.number()
    }
}
