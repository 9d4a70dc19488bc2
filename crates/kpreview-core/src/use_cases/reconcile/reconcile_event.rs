use async_trait::async_trait;
use kpreview_ghapi_interface::types::GhReactionType;
use kpreview_models::{MessageKind, PreviewCommand, PreviewTrigger, PullRequestContext};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{
    utils::{PreviewAction, ProbeReport, ReconcileDecision, ReconcileOutcome},
    DeployAndReportInterface, RemoveAndReportInterface,
};
use crate::{
    use_cases::status::{PostStatusCommentInterface, ReadPreviewEnabledInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReconcileEventInterface: Interface {
    /// Decide and run what the triggering event asks for.
    ///
    /// In probe mode, only the decision and the comment reaction happen.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<ReconcileOutcome>;
}

#[derive(Component)]
#[shaku(interface = ReconcileEventInterface)]
pub(crate) struct ReconcileEvent;

impl ReconcileEvent {
    fn reaction_for(command: PreviewCommand) -> GhReactionType {
        match command {
            PreviewCommand::AddPreview => GhReactionType::Rocket,
            PreviewCommand::RemovePreview => GhReactionType::PlusOne,
        }
    }
}

#[async_trait]
impl ReconcileEventInterface for ReconcileEvent {
    #[tracing::instrument(
        skip(self, ctx, pr_ctx),
        fields(
            pr_handle = %pr_ctx.handle,
            event = %pr_ctx.event,
            probe = ctx.config.probe
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<ReconcileOutcome> {
        let read_preview_enabled: &dyn ReadPreviewEnabledInterface =
            ctx.core_module.resolve_ref();
        let preview_enabled = read_preview_enabled.run(ctx, &pr_ctx.handle).await?;

        let decision =
            ReconcileDecision::decide(pr_ctx, &ctx.config.comment_prefix, preview_enabled);
        let mut outcome = ReconcileOutcome::new(
            ProbeReport::new(pr_ctx, preview_enabled, &decision),
            decision,
        );

        info!(
            pr_handle = %pr_ctx.handle,
            preview_enabled = preview_enabled,
            action = %decision.action,
            message = "Reconciling event"
        );

        if let (Some(command), PreviewTrigger::Comment { id, .. }) =
            (decision.command, &pr_ctx.trigger)
        {
            let handle = &pr_ctx.handle;
            ctx.api_service
                .comment_reactions_add(
                    handle.owner(),
                    handle.name(),
                    *id,
                    Self::reaction_for(command),
                )
                .await?;
        }

        if ctx.config.probe {
            info!(report = ?outcome.report, message = "Probe mode, stopping here");
            return Ok(outcome);
        }

        match decision.action {
            PreviewAction::Deploy => {
                let deploy_and_report: &dyn DeployAndReportInterface =
                    ctx.core_module.resolve_ref();
                outcome.deploy = Some(deploy_and_report.run(ctx, pr_ctx).await?);
            }
            PreviewAction::Remove => {
                let remove_and_report: &dyn RemoveAndReportInterface =
                    ctx.core_module.resolve_ref();
                outcome.removal = Some(remove_and_report.run(ctx, pr_ctx).await?);
            }
            PreviewAction::Welcome => {
                let post_status_comment: &dyn PostStatusCommentInterface =
                    ctx.core_module.resolve_ref();
                post_status_comment
                    .run(ctx, pr_ctx, MessageKind::Welcome, None)
                    .await?;
            }
            PreviewAction::Nothing => (),
        }

        Ok(outcome)
    }
}
