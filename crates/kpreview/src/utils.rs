use std::io::Write;

use anyhow::Context;
use kpreview_core::{use_cases::context::BuildPullRequestContextInterface, CoreContext};
use kpreview_ghapi_interface::GhEvent;
use kpreview_models::{DeployResult, PullRequestContext, RemovalResult};
use shaku::HasComponent;
use tracing::info;

use crate::{commands::CommandContext, Result};

/// Read the triggering event and snapshot its pull request.
pub(crate) async fn load_pull_request_context(
    ctx: &CoreContext<'_>,
) -> Result<PullRequestContext> {
    let github = &ctx.config.github;
    let payload = if github.event_path.is_empty() {
        "{}".to_string()
    } else {
        tokio::fs::read_to_string(&github.event_path)
            .await
            .with_context(|| format!("Could not read event payload at '{}'", github.event_path))?
    };

    let event = GhEvent::parse(&github.event_name, &payload)?;
    let build_pull_request_context: &dyn BuildPullRequestContextInterface =
        ctx.core_module.resolve_ref();

    Ok(build_pull_request_context.run(ctx, &event).await?)
}

pub(crate) fn deploy_outputs(result: &DeployResult) -> Vec<(&'static str, String)> {
    vec![
        ("preview-url", result.preview_url.clone()),
        ("docker-image-version", result.image_version.clone()),
        ("helm-release-name", result.release_name.clone()),
    ]
}

pub(crate) fn removal_outputs(result: &RemovalResult) -> Vec<(&'static str, String)> {
    vec![("helm-release-name", result.release_name.clone())]
}

/// Write step outputs, to the runner output file when available.
pub(crate) async fn write_outputs(
    ctx: &CommandContext,
    outputs: &[(&'static str, String)],
) -> Result<()> {
    let lines: String = outputs
        .iter()
        .map(|(name, value)| format!("{}={}\n", name, value))
        .collect();

    let output_path = &ctx.config.github.output_path;
    if output_path.is_empty() {
        ctx.writer.write().await.write_all(lines.as_bytes())?;
    } else {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)
            .with_context(|| format!("Could not open output file '{}'", output_path))?;
        file.write_all(lines.as_bytes())?;
        info!(count = outputs.len(), path = %output_path, message = "Outputs written");
    }

    Ok(())
}
