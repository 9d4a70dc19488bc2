//! Triggering event payloads.

use serde::de::DeserializeOwned;

use crate::{
    types::{GhIssueCommentEvent, GhPullRequestEvent, GhPushEvent},
    ApiError, Result,
};

/// Triggering event, parsed from its name and JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhEvent {
    /// Issue or pull request comment.
    IssueComment(GhIssueCommentEvent),
    /// Pull request lifecycle.
    PullRequest(GhPullRequestEvent),
    /// Pull request lifecycle, run in the base repository context.
    PullRequestTarget(GhPullRequestEvent),
    /// Push.
    Push(GhPushEvent),
    /// Anything else, payload ignored.
    Other(String),
}

impl GhEvent {
    /// Parse an event payload.
    pub fn parse(event_name: &str, payload: &str) -> Result<Self> {
        Ok(match event_name {
            "issue_comment" => Self::IssueComment(parse_payload(event_name, payload)?),
            "pull_request" => Self::PullRequest(parse_payload(event_name, payload)?),
            "pull_request_target" => Self::PullRequestTarget(parse_payload(event_name, payload)?),
            "push" => Self::Push(parse_payload(event_name, payload)?),
            other => Self::Other(other.into()),
        })
    }

    /// Event name.
    pub fn name(&self) -> &str {
        match self {
            Self::IssueComment(_) => "issue_comment",
            Self::PullRequest(_) => "pull_request",
            Self::PullRequestTarget(_) => "pull_request_target",
            Self::Push(_) => "push",
            Self::Other(name) => name,
        }
    }
}

fn parse_payload<T: DeserializeOwned>(event_name: &str, payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|e| ApiError::InvalidPayload {
        event: event_name.into(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::GhIssueCommentAction;

    #[test]
    fn parse_comment_event() {
        let payload = r#"{
            "action": "created",
            "issue": { "number": 42, "title": "Sample" },
            "comment": {
                "id": 1234,
                "user": { "login": "me", "type": "User" },
                "created_at": "2024-01-01T10:00:00Z",
                "body": "@github-actions add-preview"
            },
            "sender": { "login": "me", "type": "User" }
        }"#;

        let GhEvent::IssueComment(event) = GhEvent::parse("issue_comment", payload).unwrap()
        else {
            panic!("unexpected event");
        };
        assert_eq!(event.action, GhIssueCommentAction::Created);
        assert_eq!(event.issue.unwrap().number, 42);
        assert_eq!(event.comment.id, 1234);
        assert_eq!(event.comment.body, "@github-actions add-preview");
    }

    #[test]
    fn parse_pull_request_event() {
        let payload = r#"{
            "action": "synchronize",
            "number": 12,
            "pull_request": {
                "number": 12,
                "head": { "ref": "feature", "sha": "abcdef0123" },
                "base": { "ref": "main", "sha": "0123abcdef" }
            }
        }"#;

        let event = GhEvent::parse("pull_request_target", payload).unwrap();
        let GhEvent::PullRequestTarget(event) = event else {
            panic!("unexpected event");
        };
        assert_eq!(event.action, "synchronize");
        assert_eq!(event.pull_request_number(), Some(12));
    }

    #[test]
    fn parse_other_event() {
        assert_eq!(
            GhEvent::parse("workflow_dispatch", "{}").unwrap(),
            GhEvent::Other("workflow_dispatch".into())
        );
        assert!(matches!(
            GhEvent::parse("issue_comment", "{}"),
            Err(ApiError::InvalidPayload { .. })
        ));
    }
}
