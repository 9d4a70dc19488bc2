use async_trait::async_trait;
use clap::Parser;
use kpreview_core::use_cases::reconcile::ReconcileEventInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::{deploy_outputs, load_pull_request_context, removal_outputs, write_outputs},
    Result,
};

/// Reconcile the preview with the triggering event
#[derive(Parser)]
pub(crate) struct RunCommand;

#[async_trait]
impl Command for RunCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let outcome = {
            let core_ctx = ctx.as_core_context();
            let pr_ctx = load_pull_request_context(&core_ctx).await?;
            let reconcile_event: &dyn ReconcileEventInterface = ctx.core_module.resolve_ref();
            reconcile_event.run(&core_ctx, &pr_ctx).await?
        };

        let mut outputs = outcome.report.outputs();
        if let Some(deploy) = &outcome.deploy {
            outputs.extend(deploy_outputs(deploy));
        }
        if let Some(removal) = &outcome.removal {
            outputs.extend(removal_outputs(removal));
        }
        outputs.push(("success", outcome.success().to_string()));

        write_outputs(&ctx, &outputs).await
    }
}

#[cfg(test)]
mod tests {
    use kpreview_core::{
        use_cases::{
            context::{BuildPullRequestContextInterface, MockBuildPullRequestContextInterface},
            reconcile::{
                MockReconcileEventInterface, PreviewAction, ProbeReport,
                ReconcileEventInterface, ReconcileOutcome,
            },
        },
        CoreModule,
    };
    use kpreview_models::DeployResult;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_pr_context, CommandContextTest};

    #[tokio::test]
    async fn run_writes_outputs() {
        let mut ctx = CommandContextTest::new();

        let build_pull_request_context = {
            let mut mock = MockBuildPullRequestContextInterface::new();
            mock.expect_run()
                .once()
                .return_once(|_, _| Ok(test_pr_context()));
            mock
        };
        let reconcile_event = {
            let mut mock = MockReconcileEventInterface::new();
            mock.expect_run()
                .once()
                .withf(|_, pr_ctx| pr_ctx.pr_number() == 42)
                .return_once(|_, _| {
                    Ok(ReconcileOutcome {
                        report: ProbeReport {
                            is_preview_enabled: true,
                            is_add_preview_pending: true,
                            pull_request_id: 42,
                            ..Default::default()
                        },
                        action: PreviewAction::Deploy,
                        command: None,
                        deploy: Some(DeployResult {
                            success: true,
                            preview_url: "shop-42-53b6b18.preview.example.com".into(),
                            release_name: "preview-shop-42-53b6b18".into(),
                            image_version: "2.4.7-preview.42.7".into(),
                        }),
                        removal: None,
                    })
                });
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn BuildPullRequestContextInterface>(Box::new(
                build_pull_request_context,
            ))
            .with_component_override::<dyn ReconcileEventInterface>(Box::new(reconcile_event))
            .build();

        assert_eq!(
            test_command(ctx, &["run"]).await,
            "isBot=false\n\
             isComment=false\n\
             isPreviewEnabled=true\n\
             isValidCommand=false\n\
             isAddPreviewPending=true\n\
             isRemovePreviewPending=false\n\
             pullRequestId=42\n\
             preview-url=shop-42-53b6b18.preview.example.com\n\
             docker-image-version=2.4.7-preview.42.7\n\
             helm-release-name=preview-shop-42-53b6b18\n\
             success=true\n"
        );
    }
}
