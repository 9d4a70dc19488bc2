use std::fmt::Display;

use kpreview_models::{PreviewCommand, PreviewTrigger, PullRequestAction, PullRequestContext};
use tracing::{debug, info};

use crate::commands::CommandParser;

/// What the reconciler should do for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    Deploy,
    Remove,
    Welcome,
    Nothing,
}

impl PreviewAction {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::Remove => "remove",
            Self::Welcome => "welcome",
            Self::Nothing => "nothing",
        }
    }
}

impl Display for PreviewAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Decision taken from an event and the current preview flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileDecision {
    pub action: PreviewAction,
    /// Command found in the triggering comment.
    pub command: Option<PreviewCommand>,
}

impl ReconcileDecision {
    pub fn decide(
        pr_ctx: &PullRequestContext,
        comment_prefix: &str,
        preview_enabled: bool,
    ) -> Self {
        match &pr_ctx.trigger {
            PreviewTrigger::Comment {
                body,
                author,
                author_is_bot,
                created,
                ..
            } => {
                if *author_is_bot || !*created {
                    debug!(
                        author = %author,
                        created = created,
                        message = "Ignoring comment"
                    );
                    return Self::nothing();
                }

                match CommandParser::parse_command(comment_prefix, body) {
                    Some(command @ PreviewCommand::AddPreview) => Self {
                        action: PreviewAction::Deploy,
                        command: Some(command),
                    },
                    Some(command @ PreviewCommand::RemovePreview) => Self {
                        action: PreviewAction::Remove,
                        command: Some(command),
                    },
                    None => Self::nothing(),
                }
            }
            PreviewTrigger::PullRequest(action) => match action {
                PullRequestAction::Opened | PullRequestAction::Reopened => Self {
                    action: PreviewAction::Welcome,
                    command: None,
                },
                PullRequestAction::Synchronize if preview_enabled => Self {
                    action: PreviewAction::Deploy,
                    command: None,
                },
                PullRequestAction::Closed if preview_enabled => Self {
                    action: PreviewAction::Remove,
                    command: None,
                },
                PullRequestAction::Synchronize | PullRequestAction::Closed => {
                    info!(message = "Preview is not enabled, nothing to do");
                    Self::nothing()
                }
                PullRequestAction::Other(other) => {
                    info!(action = %other, message = "Unknown pull request action");
                    Self::nothing()
                }
            },
            PreviewTrigger::Other => {
                info!(event = %pr_ctx.event, message = "Unknown event");
                Self::nothing()
            }
        }
    }

    fn nothing() -> Self {
        Self {
            action: PreviewAction::Nothing,
            command: None,
        }
    }
}
