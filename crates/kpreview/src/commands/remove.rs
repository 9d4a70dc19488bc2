use async_trait::async_trait;
use clap::Parser;
use kpreview_core::use_cases::reconcile::RemoveAndReportInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::{load_pull_request_context, removal_outputs, write_outputs},
    Result,
};

/// Remove the preview of the current pull request
#[derive(Parser)]
pub(crate) struct RemoveCommand;

#[async_trait]
impl Command for RemoveCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let result = {
            let core_ctx = ctx.as_core_context();
            let pr_ctx = load_pull_request_context(&core_ctx).await?;
            let remove_and_report: &dyn RemoveAndReportInterface = ctx.core_module.resolve_ref();
            remove_and_report.run(&core_ctx, &pr_ctx).await?
        };

        let mut outputs = removal_outputs(&result);
        outputs.push(("success", result.success.to_string()));
        write_outputs(&ctx, &outputs).await
    }
}

#[cfg(test)]
mod tests {
    use kpreview_core::{
        use_cases::{
            context::{BuildPullRequestContextInterface, MockBuildPullRequestContextInterface},
            reconcile::{MockRemoveAndReportInterface, RemoveAndReportInterface},
        },
        CoreModule,
    };
    use kpreview_models::{ItemOutcome, RemovalResult};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_pr_context, CommandContextTest};

    #[tokio::test]
    async fn partial_failure_still_succeeds() {
        let mut ctx = CommandContextTest::new();

        let build_pull_request_context = {
            let mut mock = MockBuildPullRequestContextInterface::new();
            mock.expect_run()
                .once()
                .return_once(|_, _| Ok(test_pr_context()));
            mock
        };
        let remove_and_report = {
            let mut mock = MockRemoveAndReportInterface::new();
            mock.expect_run().once().return_once(|_, _| {
                Ok(RemovalResult {
                    success: true,
                    release_name: "preview-shop-42-53b6b18".into(),
                    releases: vec![ItemOutcome::failed("preview-shop-42-53b6b18", "timeout")],
                    charts: vec![],
                })
            });
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn BuildPullRequestContextInterface>(Box::new(
                build_pull_request_context,
            ))
            .with_component_override::<dyn RemoveAndReportInterface>(Box::new(remove_and_report))
            .build();

        assert_eq!(
            test_command(ctx, &["remove"]).await,
            "helm-release-name=preview-shop-42-53b6b18\nsuccess=true\n"
        );
    }
}
