use async_trait::async_trait;
use clap::Parser;
use kpreview_core::use_cases::status::PostStatusCommentInterface;
use kpreview_models::MessageKind;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::load_pull_request_context,
    Result,
};

/// Post a status message on the current pull request
#[derive(Parser)]
pub(crate) struct NotifyCommand {
    /// Message kind (welcome, brewing, success, fail, removed, cancelled)
    kind: MessageKind,

    /// Message content, e.g. the failure reason
    #[arg(long)]
    content: Option<String>,
}

#[async_trait]
impl Command for NotifyCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let core_ctx = ctx.as_core_context();
        let pr_ctx = load_pull_request_context(&core_ctx).await?;
        let post_status_comment: &dyn PostStatusCommentInterface = ctx.core_module.resolve_ref();
        post_status_comment
            .run(&core_ctx, &pr_ctx, self.kind, self.content)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kpreview_core::{
        use_cases::{
            context::{BuildPullRequestContextInterface, MockBuildPullRequestContextInterface},
            status::{MockPostStatusCommentInterface, PostStatusCommentInterface},
        },
        CoreModule,
    };
    use kpreview_models::MessageKind;

    use crate::testutils::{test_command, test_pr_context, CommandContextTest};

    #[tokio::test]
    async fn notify_cancelled() {
        let mut ctx = CommandContextTest::new();

        let build_pull_request_context = {
            let mut mock = MockBuildPullRequestContextInterface::new();
            mock.expect_run()
                .once()
                .return_once(|_, _| Ok(test_pr_context()));
            mock
        };
        let post_status_comment = {
            let mut mock = MockPostStatusCommentInterface::new();
            mock.expect_run()
                .once()
                .withf(|_, pr_ctx, kind, content| {
                    pr_ctx.pr_number() == 42
                        && *kind == MessageKind::Cancelled
                        && content.as_deref() == Some("Stopped by user")
                })
                .return_once(|_, _, _, _| Ok(1));
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn BuildPullRequestContextInterface>(Box::new(
                build_pull_request_context,
            ))
            .with_component_override::<dyn PostStatusCommentInterface>(Box::new(
                post_status_comment,
            ))
            .build();

        test_command(ctx, &["notify", "Cancelled", "--content", "Stopped by user"]).await;
    }
}
