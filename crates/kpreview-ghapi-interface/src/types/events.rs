use serde::{Deserialize, Serialize};

use super::{GhIssueComment, GhPullRequestShort, GhUser};

/// GitHub Issue comment action.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GhIssueCommentAction {
    /// Created.
    #[default]
    Created,
    /// Edited.
    Edited,
    /// Deleted.
    Deleted,
}

/// GitHub Issue, as embedded in comment events.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhIssue {
    /// Number.
    pub number: u64,
}

/// GitHub Issue comment event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhIssueCommentEvent {
    /// Action.
    #[serde(default)]
    pub action: GhIssueCommentAction,
    /// Issue.
    pub issue: Option<GhIssue>,
    /// Comment.
    pub comment: GhIssueComment,
    /// Sender.
    #[serde(default)]
    pub sender: GhUser,
}

/// GitHub Pull request event.
///
/// The action is kept verbatim: only a handful of actions matter here.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestEvent {
    /// Action.
    #[serde(default)]
    pub action: String,
    /// Number.
    pub number: Option<u64>,
    /// Pull request.
    pub pull_request: Option<GhPullRequestShort>,
    /// Sender.
    #[serde(default)]
    pub sender: GhUser,
}

impl GhPullRequestEvent {
    /// Pull request number from the payload, if any.
    pub fn pull_request_number(&self) -> Option<u64> {
        self.pull_request
            .as_ref()
            .map(|pr| pr.number)
            .or(self.number)
    }
}

/// GitHub Push event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPushEvent {
    /// Reference.
    #[serde(rename = "ref", default)]
    pub reference: String,
    /// Head commit after the push.
    #[serde(default)]
    pub after: String,
}
