use async_trait::async_trait;
use clap::Parser;
use kpreview_models::PreviewIdentity;

use crate::{
    commands::{Command, CommandContext},
    utils::load_pull_request_context,
    Result,
};

/// Show the preview identity of a pull request
#[derive(Parser)]
pub(crate) struct IdentityCommand {
    /// Pull request number, read from the triggering event when missing
    number: Option<u64>,
}

#[async_trait]
impl Command for IdentityCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let number = match self.number {
            Some(number) => number,
            None => load_pull_request_context(&ctx.as_core_context())
                .await?
                .pr_number(),
        };

        let identity = PreviewIdentity::derive(
            number,
            &ctx.config.hash_salt,
            &ctx.config.app_name,
            &ctx.config.base_url,
        )?;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "hash={}", identity.hash)?;
        writeln!(writer, "preview-slug={}", identity.preview_slug)?;
        writeln!(writer, "preview-url={}", identity.preview_host)?;
        writeln!(writer, "helm-release-name={}", identity.release_name)?;

        Ok(())
    }
}
