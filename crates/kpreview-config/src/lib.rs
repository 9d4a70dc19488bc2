//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout.
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct DockerConfig {
    /// Image name, without registry and organization.
    pub image_name: String,
    /// Registry host.
    pub registry: String,
    /// Registry organization.
    pub organization: String,
    /// Tag major component.
    pub tag_major: String,
    /// Build file path.
    pub file: String,
    /// Registry username.
    pub username: String,
    /// Registry password.
    pub password: String,
    /// Pull secret name, passed to the release.
    pub pull_secret: String,
    /// Remove preview images on removal.
    pub remove_preview_images: bool,
}

/// Names of the chart values overridden on upgrade.
#[derive(Debug, Clone)]
pub struct HelmKeysConfig {
    pub namespace: String,
    pub image: String,
    pub pull_secret: String,
    pub url: String,
    pub app_name: String,
    pub container_suffix: String,
    pub cluster_issuer: String,
    pub tls_secret_name: String,
}

#[derive(Debug, Clone)]
pub struct HelmConfig {
    /// Target namespace.
    pub namespace: String,
    /// Chart version major component.
    pub tag_major: String,
    /// Chart directory path.
    pub chart: String,
    /// Chart repository URL. Publishing is skipped when empty.
    pub repo_url: String,
    /// Chart repository alias.
    pub organization: String,
    /// Chart repository username.
    pub repo_user: String,
    /// Chart repository password.
    pub repo_password: String,
    /// Remove preview charts from the repository on removal.
    pub remove_preview_charts: bool,
    /// Cluster issuer, optional.
    pub cluster_issuer: String,
    /// TLS secret name, optional.
    pub tls_secret_name: String,
    /// Extra comma-separated `key=value` overrides.
    pub values: String,
    /// Wait for the release to be ready.
    pub wait: bool,
    /// Value keys.
    pub keys: HelmKeysConfig,
}

impl HelmConfig {
    /// Is chart publishing enabled?
    pub fn publish_enabled(&self) -> bool {
        !self.repo_url.is_empty()
    }
}

/// Context exported by the CI runner.
#[derive(Debug, Clone)]
pub struct GitHubContextConfig {
    /// Triggering event name.
    pub event_name: String,
    /// Path to the JSON event payload.
    pub event_path: String,
    /// Repository path, as `owner/name`.
    pub repository: String,
    /// Triggering commit.
    pub sha: String,
    /// Triggering actor.
    pub actor: String,
    /// Workflow run number.
    pub run_number: u64,
    /// Workspace directory.
    pub workspace: String,
    /// Output variables file.
    pub output_path: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Preview configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name, used in every derived identifier.
    pub app_name: String,
    /// Mention token expected at the start of a command comment.
    pub comment_prefix: String,
    /// Salt used for identifier hashing.
    pub hash_salt: String,
    /// Base URL of preview hosts.
    pub base_url: String,
    /// Probe mode.
    pub probe: bool,
    /// API options.
    pub api: ApiConfig,
    /// Docker options.
    pub docker: DockerConfig,
    /// Helm options.
    pub helm: HelmConfig,
    /// CI context.
    pub github: GitHubContextConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            app_name: input_to_str("app-name", ""),
            comment_prefix: input_to_str("comment-prefix", "@github-actions"),
            hash_salt: input_to_str("hash-salt", ""),
            base_url: input_to_str("base-url", ""),
            probe: input_to_bool("probe", false),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("KPREVIEW_API_DRIVER", "github"))
                    .unwrap_or(ApiDriver::GitHub),
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("KPREVIEW_API_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("GITHUB_API_URL", "https://api.github.com"),
                    token: input_to_str("token", ""),
                },
            },
            docker: DockerConfig {
                image_name: input_to_str("docker-image-name", ""),
                registry: input_to_str("docker-registry", ""),
                organization: input_to_str("docker-organization", ""),
                tag_major: input_to_str("docker-tag-major", ""),
                file: input_to_str("docker-file", ""),
                username: input_to_str("docker-username", ""),
                password: input_to_str("docker-password", ""),
                pull_secret: input_to_str("docker-pullsecret", ""),
                remove_preview_images: input_to_bool("docker-remove-preview-images", false),
            },
            helm: HelmConfig {
                namespace: input_to_str("helm-namespace", ""),
                tag_major: input_to_str("helm-tag-major", ""),
                chart: input_to_str("helm-chart", ""),
                repo_url: input_to_str("helm-repo-url", ""),
                organization: input_to_str("helm-organization", ""),
                repo_user: input_to_str("helm-repo-user", ""),
                repo_password: input_to_str("helm-repo-password", ""),
                remove_preview_charts: input_to_bool("helm-remove-preview-charts", false),
                cluster_issuer: input_to_str("cluster-issuer", ""),
                tls_secret_name: input_to_str("tls-secret-name", ""),
                values: input_to_str("helm-values", ""),
                wait: input_to_bool("wait", false),
                keys: HelmKeysConfig {
                    namespace: input_to_str("helm-key-namespace", "namespace"),
                    image: input_to_str("helm-key-image", "image"),
                    pull_secret: input_to_str("helm-key-pullsecret", "pullsecret"),
                    url: input_to_str("helm-key-url", "url"),
                    app_name: input_to_str("helm-key-appname", "appname"),
                    container_suffix: input_to_str(
                        "helm-key-containersuffix",
                        "containersuffix",
                    ),
                    cluster_issuer: input_to_str("helm-key-cluster-issuer", "clusterIssuer"),
                    tls_secret_name: input_to_str("helm-key-tls-secret-name", "tlsSecretName"),
                },
            },
            github: GitHubContextConfig {
                event_name: env_to_str("GITHUB_EVENT_NAME", ""),
                event_path: env_to_str("GITHUB_EVENT_PATH", ""),
                repository: env_to_str("GITHUB_REPOSITORY", ""),
                sha: env_to_str("GITHUB_SHA", ""),
                actor: env_to_str("GITHUB_ACTOR", ""),
                run_number: env_to_u64("GITHUB_RUN_NUMBER", 0),
                workspace: env_to_str("GITHUB_WORKSPACE", "."),
                output_path: env_to_str("GITHUB_OUTPUT", ""),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("KPREVIEW_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("KPREVIEW_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("KPREVIEW_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

/// Environment variable names for an action input, in lookup order.
pub fn input_env_names(name: &str) -> [String; 2] {
    let upper = name.to_uppercase();
    [
        format!("INPUT_{}", upper),
        format!("INPUT_{}", upper.replace('-', "_")),
    ]
}

fn input_to_str(name: &str, default: &str) -> String {
    input_env_names(name)
        .iter()
        .find_map(|var| env::var(var).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn input_to_bool(name: &str, default: bool) -> bool {
    parse_bool_string(&input_to_str(name, if default { "true" } else { "false" }))
}

/// Parse a "bool string" input: only `true` (any case) is enabled.
pub fn parse_bool_string(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bool_strings() {
        assert!(parse_bool_string("true"));
        assert!(parse_bool_string("TRUE"));
        assert!(parse_bool_string(" True "));
        assert!(!parse_bool_string("yes"));
        assert!(!parse_bool_string("1"));
        assert!(!parse_bool_string(""));
    }

    #[test]
    fn input_names() {
        assert_eq!(
            input_env_names("helm-key-url"),
            [
                "INPUT_HELM-KEY-URL".to_string(),
                "INPUT_HELM_KEY_URL".to_string()
            ]
        );
    }

    #[test]
    fn helm_publish_enabled() {
        let mut config = Config::from_env_no_version();
        config.helm.repo_url = String::new();
        assert!(!config.helm.publish_enabled());

        config.helm.repo_url = "https://charts.example.com".into();
        assert!(config.helm.publish_enabled());
    }
}
