use kpreview_models::{DeployResult, PreviewCommand, PullRequestContext, RemovalResult};

use super::{PreviewAction, ReconcileDecision};

/// Diagnostics exposed in probe mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub is_bot: bool,
    pub is_comment: bool,
    pub is_preview_enabled: bool,
    pub is_valid_command: bool,
    pub is_add_preview_pending: bool,
    pub is_remove_preview_pending: bool,
    pub pull_request_id: u64,
}

impl ProbeReport {
    pub fn new(
        pr_ctx: &PullRequestContext,
        preview_enabled: bool,
        decision: &ReconcileDecision,
    ) -> Self {
        Self {
            is_bot: pr_ctx.trigger.is_bot(),
            is_comment: pr_ctx.trigger.is_comment(),
            is_preview_enabled: preview_enabled,
            is_valid_command: decision.command.is_some(),
            is_add_preview_pending: decision.action == PreviewAction::Deploy,
            is_remove_preview_pending: decision.action == PreviewAction::Remove,
            pull_request_id: pr_ctx.pr_number(),
        }
    }

    /// Output names and values, in a stable order.
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("isBot", self.is_bot.to_string()),
            ("isComment", self.is_comment.to_string()),
            ("isPreviewEnabled", self.is_preview_enabled.to_string()),
            ("isValidCommand", self.is_valid_command.to_string()),
            ("isAddPreviewPending", self.is_add_preview_pending.to_string()),
            (
                "isRemovePreviewPending",
                self.is_remove_preview_pending.to_string(),
            ),
            ("pullRequestId", self.pull_request_id.to_string()),
        ]
    }
}

/// Everything the reconciler did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub report: ProbeReport,
    pub action: PreviewAction,
    pub command: Option<PreviewCommand>,
    /// Set when a deployment ran.
    pub deploy: Option<DeployResult>,
    /// Set when a removal ran.
    pub removal: Option<RemovalResult>,
}

impl ReconcileOutcome {
    pub fn new(report: ProbeReport, decision: ReconcileDecision) -> Self {
        Self {
            report,
            action: decision.action,
            command: decision.command,
            deploy: None,
            removal: None,
        }
    }

    /// Whether the executed workflow, if any, succeeded.
    pub fn success(&self) -> bool {
        self.deploy.as_ref().map(|d| d.success).unwrap_or(true)
            && self.removal.as_ref().map(|r| r.success).unwrap_or(true)
    }
}
