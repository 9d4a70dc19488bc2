use kpreview_chartrepo::ChartRepositoryService;
use kpreview_config::Config;
use kpreview_ghapi_interface::ApiService;
use kpreview_process::ProcessRunner;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub process_runner: &'a (dyn ProcessRunner + 'a),
    pub chart_repository: &'a (dyn ChartRepositoryService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use kpreview_chartrepo::MockChartRepositoryService;
    use kpreview_config::Config;
    use kpreview_ghapi_interface::MockApiService;
    use kpreview_models::{EventKind, PreviewTrigger, PullRequestAction, PullRequestContext};
    use kpreview_process::MockProcessRunner;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub process_runner: MockProcessRunner,
        pub chart_repository: MockChartRepositoryService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: test_config(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                process_runner: MockProcessRunner::new(),
                chart_repository: MockChartRepositoryService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                process_runner: &self.process_runner,
                chart_repository: &self.chart_repository,
            }
        }
    }

    /// Fully populated configuration, independent from the environment.
    #[allow(dead_code)]
    pub fn test_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.app_name = "shop".into();
        config.comment_prefix = "@github-actions".into();
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
        config.docker.remove_preview_images = false;
        config.helm.namespace = "previews".into();
        config.helm.tag_major = "1.0".into();
        config.helm.chart = "./charts/shop".into();
        config.helm.repo_url = String::new();
        config.helm.organization = "acme".into();
        config.helm.repo_user = "helm-user".into();
        config.helm.repo_password = "helm-pass".into();
        config.helm.remove_preview_charts = false;
        config.helm.cluster_issuer = String::new();
        config.helm.tls_secret_name = String::new();
        config.helm.values = String::new();
        config.helm.wait = false;
        config.helm.keys.namespace = "namespace".into();
        config.helm.keys.image = "image".into();
        config.helm.keys.pull_secret = "pullsecret".into();
        config.helm.keys.url = "url".into();
        config.helm.keys.app_name = "appname".into();
        config.helm.keys.container_suffix = "containersuffix".into();
        config.helm.keys.cluster_issuer = "clusterIssuer".into();
        config.helm.keys.tls_secret_name = "tlsSecretName".into();
        config.github.repository = "me/test".into();
        config.github.sha = "0123456789abcdef".into();
        config.github.actor = "me".into();
        config.github.run_number = 7;
        config.github.workspace = ".".into();
        config
    }

    /// Pull request #42 on `me/test`, synchronized.
    #[allow(dead_code)]
    pub fn test_pr_context() -> PullRequestContext {
        PullRequestContext {
            event: EventKind::PullRequest,
            trigger: PreviewTrigger::PullRequest(PullRequestAction::Synchronize),
            actor: "me".into(),
            handle: ("me", "test", 42).into(),
            short_sha: "abc1234".into(),
            run_number: 7,
        }
    }
}
