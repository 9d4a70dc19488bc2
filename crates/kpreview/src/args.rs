use std::sync::Arc;

use clap::Parser;
use kpreview_chartrepo::ChartMuseumService;
use kpreview_config::{ApiDriver, Config};
use kpreview_core::CoreModule;
use kpreview_ghapi_github::GithubApiService;
use kpreview_ghapi_interface::ApiService;
use kpreview_ghapi_memory::MemoryApiService;
use kpreview_process::TokioProcessRunner;
use kpreview_sentry::{capture_error, with_sentry_configuration};
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    config_validator::ValidationScope,
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    pub fn command_name(&self) -> &'static str {
        self.cmd.name()
    }

    pub fn scope(&self) -> ValidationScope {
        self.cmd.scope()
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
                if config.api.driver == ApiDriver::GitHub {
                    info!("Using GithubApiService API driver");
                    Box::new(GithubApiService::new(config.clone()))
                } else {
                    info!("Using MemoryApiService API driver");
                    Box::new(MemoryApiService::new())
                }
            };

            let ctx = CommandContext {
                config: config.clone(),
                api_service,
                process_runner: Box::new(TokioProcessRunner::new()),
                chart_repository: Box::new(ChartMuseumService::new(&config)),
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config, || async move {
                let result = Self::parse_args_async(args, ctx).await;
                if let Err(e) = &result {
                    let error: &(dyn std::error::Error + 'static) = e.as_ref();
                    capture_error(error);
                }
                result
            })
            .await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
