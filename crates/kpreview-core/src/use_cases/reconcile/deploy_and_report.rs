use async_trait::async_trait;
use kpreview_models::{DeployResult, MessageKind, PullRequestContext};
use shaku::{Component, HasComponent, Interface};
use tracing::error;

use crate::{
    use_cases::{deploy::DeployPreviewInterface, status::PostStatusCommentInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DeployAndReportInterface: Interface {
    /// Deploy the preview, keeping the status comment up to date.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<DeployResult>;
}

#[derive(Component)]
#[shaku(interface = DeployAndReportInterface)]
pub(crate) struct DeployAndReport;

#[async_trait]
impl DeployAndReportInterface for DeployAndReport {
    #[tracing::instrument(skip(self, ctx, pr_ctx), fields(pr_handle = %pr_ctx.handle))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<DeployResult> {
        let post_status_comment: &dyn PostStatusCommentInterface = ctx.core_module.resolve_ref();
        let deploy_preview: &dyn DeployPreviewInterface = ctx.core_module.resolve_ref();

        post_status_comment
            .run(ctx, pr_ctx, MessageKind::Brewing, None)
            .await?;

        match deploy_preview.run(ctx, pr_ctx).await {
            Ok(result) => {
                post_status_comment
                    .run(
                        ctx,
                        pr_ctx,
                        MessageKind::Success,
                        Some(result.preview_url.clone()),
                    )
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
                        message = "Could not report deployment failure"
                    );
                }
                Err(e)
            }
        }
    }
}
