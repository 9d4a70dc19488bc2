use async_trait::async_trait;
use kpreview_models::{ItemOutcome, PreviewIdentity, PullRequestContext, RemovalResult};
use shaku::{Component, Interface};
use tracing::{error, info, warn};

use super::utils::{ChartVersionFilter, ReleaseListing};
use crate::{use_cases::deploy::ToolStep, CoreContext, Result};

const HELM: &str = "helm";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RemovePreviewInterface: Interface {
    /// Uninstall every release of a pull request and purge its artifacts.
    ///
    /// Individual failures are collected in the result, only a failing
    /// release listing aborts the removal.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<RemovalResult>;
}

#[derive(Component)]
#[shaku(interface = RemovePreviewInterface)]
pub(crate) struct RemovePreview;

impl RemovePreview {
    async fn remove_releases<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_number: u64,
    ) -> Result<Vec<ItemOutcome>> {
        let namespace = &ctx.config.helm.namespace;
        let prefix = PreviewIdentity::release_prefix(&ctx.config.app_name, pr_number);

        let listing = ToolStep::ReleaseList
            .run_removal(
                ctx.process_runner,
                HELM,
                ReleaseListing::list_args(namespace, &prefix),
            )
            .await?;
        let releases = ReleaseListing::parse(&listing.stdout, &prefix)?;
        info!(count = releases.len(), message = "Found preview releases");

        let mut outcomes = Vec::with_capacity(releases.len());
        for release in releases {
            let outcome = ToolStep::ReleaseUninstall
                .run(
                    ctx.process_runner,
                    HELM,
                    ReleaseListing::uninstall_args(namespace, &release),
                )
                .await;

            outcomes.push(match outcome {
                Ok(outcome) if outcome.success() => ItemOutcome::succeeded(release),
                Ok(outcome) => ItemOutcome::failed(release, outcome.stderr.trim()),
                Err(e) => ItemOutcome::failed(release, e.to_string()),
            });
        }

        Ok(outcomes)
    }

    async fn remove_charts<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_number: u64,
    ) -> Result<Vec<ItemOutcome>> {
        let chart_name = &ctx.config.app_name;
        let filter = ChartVersionFilter::new(chart_name, pr_number)?;

        let charts = match ctx.chart_repository.charts_list(chart_name).await {
            Ok(charts) => charts,
            Err(e) => {
                error!(
                    chart_name = %chart_name,
                    error = %e,
                    message = "Could not list charts"
                );
                return Ok(vec![ItemOutcome::failed(chart_name.clone(), e.to_string())]);
            }
        };

        let mut outcomes = vec![];
        for chart in charts.iter().filter(|c| filter.matches(c)) {
            let item = format!("{}@{}", chart.name, chart.version);
            info!(chart = %item, message = "Deleting chart");

            outcomes.push(
                match ctx
                    .chart_repository
                    .charts_delete(&chart.name, &chart.version)
                    .await
                {
                    Ok(()) => ItemOutcome::succeeded(item),
                    Err(e) => ItemOutcome::failed(item, e.to_string()),
                },
            );
        }

        Ok(outcomes)
    }
}

#[async_trait]
impl RemovePreviewInterface for RemovePreview {
    #[tracing::instrument(skip(self, ctx, pr_ctx), fields(pr_handle = %pr_ctx.handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<RemovalResult> {
        let pr_number = pr_ctx.pr_number();
        let identity = PreviewIdentity::derive(
            pr_number,
            &ctx.config.hash_salt,
            &ctx.config.app_name,
            &ctx.config.base_url,
        )?;

        let releases = self.remove_releases(ctx, pr_number).await?;

        let charts = if ctx.config.helm.remove_preview_charts {
            self.remove_charts(ctx, pr_number).await?
        } else {
            vec![]
        };

        if ctx.config.docker.remove_preview_images {
            warn!(message = "Preview image removal is not supported by the registry, skipping");
        }

        let result = RemovalResult {
            success: true,
            release_name: identity.release_name,
            releases,
            charts,
        };

        for failure in result.failures() {
            warn!(
                item = %failure.item,
                reason = %failure.message,
                message = "Could not remove item"
            );
        }

        Ok(result)
    }
}
