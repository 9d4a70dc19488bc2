use async_trait::async_trait;
use clap::Parser;
use kpreview_core::use_cases::reconcile::DeployAndReportInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    utils::{deploy_outputs, load_pull_request_context, write_outputs},
    Result,
};

/// Deploy the preview of the current pull request
#[derive(Parser)]
pub(crate) struct DeployCommand;

#[async_trait]
impl Command for DeployCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let result = {
            let core_ctx = ctx.as_core_context();
            let pr_ctx = load_pull_request_context(&core_ctx).await?;
            let deploy_and_report: &dyn DeployAndReportInterface = ctx.core_module.resolve_ref();
            deploy_and_report.run(&core_ctx, &pr_ctx).await?
        };

        let mut outputs = deploy_outputs(&result);
        outputs.push(("success", result.success.to_string()));
        write_outputs(&ctx, &outputs).await
    }
}
