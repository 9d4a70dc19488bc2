use std::fmt::Display;

use kpreview_process::{CommandOutcome, ProcessRunner};
use tracing::{error, info};

use crate::{DomainError, Result};

/// External tool invocation, sequenced by the deploy and removal workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStep {
    RegistryLogin,
    ImageBuild,
    ImagePush,
    ChartPackage,
    ChartRepositoryAdd,
    ChartPluginInstall,
    ChartPublish,
    ReleaseUpgrade,
    ReleaseList,
    ReleaseUninstall,
}

impl ToolStep {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::RegistryLogin => "registry-login",
            Self::ImageBuild => "image-build",
            Self::ImagePush => "image-push",
            Self::ChartPackage => "chart-package",
            Self::ChartRepositoryAdd => "chart-repository-add",
            Self::ChartPluginInstall => "chart-plugin-install",
            Self::ChartPublish => "chart-publish",
            Self::ReleaseUpgrade => "release-upgrade",
            Self::ReleaseList => "release-list",
            Self::ReleaseUninstall => "release-uninstall",
        }
    }

    /// Run the step, whatever its exit code.
    pub async fn run(
        self,
        process_runner: &dyn ProcessRunner,
        program: &str,
        args: Vec<String>,
    ) -> Result<CommandOutcome> {
        info!(step = self.to_str(), program = program, message = "Running step");
        let outcome = process_runner.run(program, &args).await?;

        if outcome.success() {
            info!(step = self.to_str(), message = "Step succeeded");
        } else {
            error!(
                step = self.to_str(),
                exit_code = outcome.exit_code,
                message = "Step failed"
            );
        }

        Ok(outcome)
    }

    /// Run a deploy step, failing on a non-zero exit code.
    pub async fn run_deploy(
        self,
        process_runner: &dyn ProcessRunner,
        program: &str,
        args: Vec<String>,
    ) -> Result<CommandOutcome> {
        let outcome = self.run(process_runner, program, args).await?;
        if outcome.success() {
            Ok(outcome)
        } else {
            Err(DomainError::DeployStepFailed {
                step: self.to_str().into(),
                exit_code: outcome.exit_code,
                stderr: outcome.stderr,
            })
        }
    }

    /// Run a removal step, failing on a non-zero exit code.
    pub async fn run_removal(
        self,
        process_runner: &dyn ProcessRunner,
        program: &str,
        args: Vec<String>,
    ) -> Result<CommandOutcome> {
        let outcome = self.run(process_runner, program, args).await?;
        if outcome.success() {
            Ok(outcome)
        } else {
            Err(DomainError::RemovalStepFailed {
                step: self.to_str().into(),
                exit_code: outcome.exit_code,
                stderr: outcome.stderr,
            })
        }
    }
}

impl Display for ToolStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
