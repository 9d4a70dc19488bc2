//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use kpreview_chartrepo::ChartRepositoryService;
use kpreview_config::Config;
use kpreview_core::{CoreContext, CoreModule};
use kpreview_ghapi_interface::ApiService;
use kpreview_process::ProcessRunner;
use tokio::sync::RwLock;

use self::{
    deploy::DeployCommand, identity::IdentityCommand, notify::NotifyCommand,
    remove::RemoveCommand, run::RunCommand,
};
use crate::{config_validator::ValidationScope, Result};

mod deploy;
mod identity;
mod notify;
mod remove;
mod run;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub process_runner: Box<dyn ProcessRunner + Send + Sync>,
    pub chart_repository: Box<dyn ChartRepositoryService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            process_runner: self.process_runner.as_ref(),
            chart_repository: self.chart_repository.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Run(RunCommand),
    Deploy(DeployCommand),
    Remove(RemoveCommand),
    Notify(NotifyCommand),
    Identity(IdentityCommand),
}

impl SubCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Run(_) => "run",
            Self::Deploy(_) => "deploy",
            Self::Remove(_) => "remove",
            Self::Notify(_) => "notify",
            Self::Identity(_) => "identity",
        }
    }

    pub fn scope(&self) -> ValidationScope {
        match self {
            Self::Run(_) | Self::Deploy(_) => ValidationScope::Full,
            Self::Remove(_) => ValidationScope::Removal,
            Self::Notify(_) => ValidationScope::Status,
            Self::Identity(_) => ValidationScope::Identity,
        }
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Run(sub) => sub.execute(ctx).await,
            Self::Deploy(sub) => sub.execute(ctx).await,
            Self::Remove(sub) => sub.execute(ctx).await,
            Self::Notify(sub) => sub.execute(ctx).await,
            Self::Identity(sub) => sub.execute(ctx).await,
        }
    }
}
