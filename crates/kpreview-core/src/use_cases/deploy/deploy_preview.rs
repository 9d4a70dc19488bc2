use async_trait::async_trait;
use kpreview_models::{DeployResult, PreviewIdentity, PullRequestContext};
use shaku::{Component, Interface};
use tracing::{info, warn};

use super::utils::{DeployPlan, ToolStep};
use crate::{CoreContext, Result};

const DOCKER: &str = "docker";
const HELM: &str = "helm";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DeployPreviewInterface: Interface {
    /// Build, publish and install the preview of a pull request.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<DeployResult>;
}

#[derive(Component)]
#[shaku(interface = DeployPreviewInterface)]
pub(crate) struct DeployPreview;

#[async_trait]
impl DeployPreviewInterface for DeployPreview {
    #[tracing::instrument(skip(self, ctx, pr_ctx), fields(pr_handle = %pr_ctx.handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
    ) -> Result<DeployResult> {
        let config = ctx.config;
        let runner = ctx.process_runner;
        let identity = PreviewIdentity::derive(
            pr_ctx.pr_number(),
            &config.hash_salt,
            &config.app_name,
            &config.base_url,
        )?;
        let plan = DeployPlan::new(config, identity, pr_ctx);

        ToolStep::RegistryLogin
            .run_deploy(runner, DOCKER, plan.registry_login_args(config))
            .await?;
        ToolStep::ImageBuild
            .run_deploy(runner, DOCKER, plan.image_build_args(config))
            .await?;
        ToolStep::ImagePush
            .run_deploy(runner, DOCKER, plan.image_push_args())
            .await?;

        let package = ToolStep::ChartPackage
            .run_deploy(runner, HELM, plan.chart_package_args())
            .await?;
        let chart_file = plan.chart_file(&package.stdout);

        if config.helm.publish_enabled() {
            ToolStep::ChartRepositoryAdd
                .run_deploy(runner, HELM, plan.chart_repository_add_args(config))
                .await?;

            // Already installed plugins make this step fail.
            let plugin = ToolStep::ChartPluginInstall
                .run(runner, HELM, plan.chart_plugin_install_args())
                .await?;
            if !plugin.success() {
                warn!(
                    exit_code = plugin.exit_code,
                    message = "Could not install chart push plugin, continuing"
                );
            }

            ToolStep::ChartPublish
                .run_deploy(runner, HELM, plan.chart_publish_args(config, &chart_file))
                .await?;
        } else {
            info!(message = "Chart repository not configured, chart will not be published");
        }

        ToolStep::ReleaseUpgrade
            .run_deploy(
                runner,
                HELM,
                plan.release_upgrade_args(config, &chart_file, pr_ctx.run_number),
            )
            .await?;

        info!(
            pr_handle = %pr_ctx.handle,
            release_name = %plan.identity.release_name,
            preview_url = %plan.identity.preview_host,
            message = "Preview deployed"
        );

        Ok(DeployResult {
            success: true,
            preview_url: plan.identity.preview_host,
            release_name: plan.identity.release_name,
            image_version: plan.image_version,
        })
    }
}
