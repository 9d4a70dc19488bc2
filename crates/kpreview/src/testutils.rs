use std::{io::Write, sync::Arc};

use clap::Parser;
use kpreview_chartrepo::MockChartRepositoryService;
use kpreview_config::Config;
use kpreview_core::CoreModule;
use kpreview_ghapi_memory::MemoryApiService;
use kpreview_models::{EventKind, PreviewTrigger, PullRequestAction, PullRequestContext};
use kpreview_process::MockProcessRunner;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
    Result,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MemoryApiService,
    pub process_runner: MockProcessRunner,
    pub chart_repository: MockChartRepositoryService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: test_config(),
            core_module: CoreModule::builder().build(),
            api_service: MemoryApiService::new(),
            process_runner: MockProcessRunner::new(),
            chart_repository: MockChartRepositoryService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            process_runner: Box::new(self.process_runner),
            chart_repository: Box::new(self.chart_repository),
            writer,
        }
    }
}

/// Complete configuration, outputs going to the command writer.
pub(crate) fn test_config() -> Config {
    let mut config = Config::from_env_no_version();
    config.app_name = "shop".into();
    config.hash_salt = "abc".into();
    config.base_url = "preview.example.com".into();
    config.probe = false;
    config.api.github.token = "token".into();
    config.docker.image_name = "shop-web".into();
    config.docker.registry = "registry.example.com".into();
    config.docker.organization = "acme".into();
    config.docker.tag_major = "2.4".into();
    config.docker.file = "Dockerfile".into();
    config.docker.username = "docker-user".into();
    config.docker.password = "docker-pass".into();
    config.docker.pull_secret = "regcred".into();
    config.helm.namespace = "previews".into();
    config.helm.tag_major = "1.0".into();
    config.helm.chart = "./charts/shop".into();
    config.helm.repo_url = String::new();
    config.helm.organization = "acme".into();
    config.helm.repo_user = "helm-user".into();
    config.helm.repo_password = "helm-pass".into();
    config.helm.remove_preview_charts = false;
    config.github.event_name = String::new();
    config.github.event_path = String::new();
    config.github.repository = "me/test".into();
    config.github.output_path = String::new();
    config
}

pub(crate) fn test_pr_context() -> PullRequestContext {
    PullRequestContext {
        event: EventKind::PullRequest,
        trigger: PreviewTrigger::PullRequest(PullRequestAction::Synchronize),
        actor: "me".into(),
        handle: ("me", "test", 42).into(),
        short_sha: "abc1234".into(),
        run_number: 7,
    }
}

/// Run a command, returning its result and what it wrote.
pub(crate) async fn test_command_result(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> (Result<()>, String) {
    let buf = Arc::new(RwLock::new(Vec::new()));

    let result = {
        let command_args = {
            let mut tmp_args = vec!["kpreview"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => {
                CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await
            }
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    };

    let vec = buf.read().await.to_vec();
    (result, std::str::from_utf8(&vec).unwrap().to_string())
}

/// Run a successful command, returning what it wrote.
pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let (result, output) = test_command_result(ctx, command_args).await;
    result.unwrap();
    output
}
