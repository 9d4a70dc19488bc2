use async_trait::async_trait;
use kpreview_models::{MessageKind, PullRequestContext, RemovalResult};
use shaku::{Component, HasComponent, Interface};
use tracing::error;

use crate::{
    use_cases::{removal::RemovePreviewInterface, status::PostStatusCommentInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RemoveAndReportInterface: Interface {
    /// Remove the preview, then mark it as removed in the status comment.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<RemovalResult>;
}

#[derive(Component)]
#[shaku(interface = RemoveAndReportInterface)]
pub(crate) struct RemoveAndReport;

#[async_trait]
impl RemoveAndReportInterface for RemoveAndReport {
    #[tracing::instrument(skip(self, ctx, pr_ctx), fields(pr_handle = %pr_ctx.handle))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<RemovalResult> {
        let post_status_comment: &dyn PostStatusCommentInterface = ctx.core_module.resolve_ref();
        let remove_preview: &dyn RemovePreviewInterface = ctx.core_module.resolve_ref();

        match remove_preview.run(ctx, pr_ctx).await {
            Ok(result) => {
                post_status_comment
                    .run(ctx, pr_ctx, MessageKind::Removed, None)
                    .await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(report_error) = post_status_comment
                    .run(ctx, pr_ctx, MessageKind::Fail, Some(e.to_string()))
                    .await
                {
                    error!(
                        error = %report_error,
                        message = "Could not report removal failure"
                    );
                }
                Err(e)
            }
        }
    }
}
