use std::path::Path;

use kpreview_config::Config;
use kpreview_models::{PreviewIdentity, PreviewTag, PullRequestContext};

const HELM_PUSH_PLUGIN_URL: &str = "https://github.com/chartmuseum/helm-push";
const CHART_SAVED_MARKER: &str = "saved it to:";

/// Arguments of every deploy tool invocation, derived from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub identity: PreviewIdentity,
    /// `<registry>/<organization>/<image>:<version>`.
    pub image: String,
    pub image_version: String,
    pub chart_version: String,
    workspace: String,
    chart: String,
}

impl DeployPlan {
    pub fn new(config: &Config, identity: PreviewIdentity, pr_ctx: &PullRequestContext) -> Self {
        let pr_number = pr_ctx.pr_number();
        let image_version =
            PreviewTag::version(&config.docker.tag_major, pr_number, pr_ctx.run_number);
        let chart_version =
            PreviewTag::version(&config.helm.tag_major, pr_number, pr_ctx.run_number);
        let image = format!(
            "{}/{}/{}:{}",
            config.docker.registry,
            config.docker.organization,
            config.docker.image_name,
            image_version
        );

        Self {
            identity,
            image,
            image_version,
            chart_version,
            workspace: if config.github.workspace.is_empty() {
                ".".into()
            } else {
                config.github.workspace.clone()
            },
            chart: config.helm.chart.clone(),
        }
    }

    pub fn registry_login_args(&self, config: &Config) -> Vec<String> {
        vec![
            "login".into(),
            "--username".into(),
            config.docker.username.clone(),
            "--password".into(),
            config.docker.password.clone(),
            config.docker.registry.clone(),
        ]
    }

    pub fn image_build_args(&self, config: &Config) -> Vec<String> {
        vec![
            "build".into(),
            self.workspace.clone(),
            "-t".into(),
            self.image.clone(),
            "-f".into(),
            config.docker.file.clone(),
        ]
    }

    pub fn image_push_args(&self) -> Vec<String> {
        vec!["push".into(), self.image.clone()]
    }

    pub fn chart_package_args(&self) -> Vec<String> {
        vec![
            "package".into(),
            self.chart.clone(),
            "--version".into(),
            self.chart_version.clone(),
            "--app-version".into(),
            self.image_version.clone(),
        ]
    }

    /// Packaged archive path, read from `helm package` output when available.
    pub fn chart_file(&self, package_stdout: &str) -> String {
        package_stdout
            .lines()
            .find_map(|line| {
                line.split_once(CHART_SAVED_MARKER)
                    .map(|(_, path)| path.trim().to_string())
            })
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| format!("{}-{}.tgz", self.chart_name(), self.chart_version))
    }

    pub fn chart_repository_add_args(&self, config: &Config) -> Vec<String> {
        vec![
            "repo".into(),
            "add".into(),
            config.helm.organization.clone(),
            config.helm.repo_url.clone(),
            "--username".into(),
            config.helm.repo_user.clone(),
            "--password".into(),
            config.helm.repo_password.clone(),
        ]
    }

    pub fn chart_plugin_install_args(&self) -> Vec<String> {
        vec![
            "plugin".into(),
            "install".into(),
            HELM_PUSH_PLUGIN_URL.into(),
        ]
    }

    pub fn chart_publish_args(&self, config: &Config, chart_file: &str) -> Vec<String> {
        vec![
            "cm-push".into(),
            chart_file.into(),
            config.helm.organization.clone(),
        ]
    }

    pub fn release_upgrade_args(
        &self,
        config: &Config,
        chart_file: &str,
        run_number: u64,
    ) -> Vec<String> {
        let keys = &config.helm.keys;
        let mut values = vec![
            (keys.namespace.clone(), config.helm.namespace.clone()),
            (keys.image.clone(), self.image.clone()),
            (keys.pull_secret.clone(), config.docker.pull_secret.clone()),
            (keys.url.clone(), self.identity.preview_host.clone()),
            (keys.app_name.clone(), self.identity.preview_slug.clone()),
            (keys.container_suffix.clone(), run_number.to_string()),
        ];
        if !config.helm.cluster_issuer.is_empty() {
            values.push((
                keys.cluster_issuer.clone(),
                config.helm.cluster_issuer.clone(),
            ));
        }
        if !config.helm.tls_secret_name.is_empty() {
            values.push((
                keys.tls_secret_name.clone(),
                config.helm.tls_secret_name.clone(),
            ));
        }

        let mut args = vec![
            "upgrade".into(),
            self.identity.release_name.clone(),
            chart_file.into(),
            "--install".into(),
            "--namespace".into(),
            config.helm.namespace.clone(),
        ];
        for (key, value) in values {
            args.push("--set".into());
            args.push(format!("{key}={value}"));
        }
        for extra in Self::extra_values(&config.helm.values) {
            args.push("--set".into());
            args.push(extra);
        }
        if config.helm.wait {
            args.push("--wait".into());
        }

        args
    }

    /// Additional `key=value` pairs, comma separated.
    fn extra_values(values: &str) -> Vec<String> {
        values
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    fn chart_name(&self) -> String {
        Path::new(self.chart.trim_end_matches('/'))
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.chart.clone())
    }
}
