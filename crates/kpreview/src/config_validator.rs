//! Validation utilities.

use kpreview_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid configuration:\n{}", errors)]
    MissingOptions { errors: String },
}

/// Options a command depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationScope {
    /// May deploy and remove.
    Full,
    Removal,
    Status,
    Identity,
}

/// Check every required option at once, before any side effect.
pub fn validate_configuration(
    config: &Config,
    command: &str,
    scope: ValidationScope,
) -> Result<(), ValidationError> {
    let mut required: Vec<(&str, &str)> = vec![
        ("app-name", config.app_name.as_str()),
        ("hash-salt", config.hash_salt.as_str()),
        ("base-url", config.base_url.as_str()),
    ];

    if scope != ValidationScope::Identity {
        if config.api.driver == ApiDriver::GitHub {
            required.push(("token", config.api.github.token.as_str()));
        }
        required.push(("helm-namespace", config.helm.namespace.as_str()));
    }

    if scope == ValidationScope::Full {
        required.extend([
            ("docker-image-name", config.docker.image_name.as_str()),
            ("docker-registry", config.docker.registry.as_str()),
            ("docker-organization", config.docker.organization.as_str()),
            ("docker-tag-major", config.docker.tag_major.as_str()),
            ("docker-file", config.docker.file.as_str()),
            ("docker-username", config.docker.username.as_str()),
            ("docker-password", config.docker.password.as_str()),
            ("docker-pullsecret", config.docker.pull_secret.as_str()),
            ("helm-tag-major", config.helm.tag_major.as_str()),
            ("helm-chart", config.helm.chart.as_str()),
            ("helm-organization", config.helm.organization.as_str()),
        ]);

        if config.helm.publish_enabled() {
            required.extend([
                ("helm-repo-user", config.helm.repo_user.as_str()),
                ("helm-repo-password", config.helm.repo_password.as_str()),
            ]);
        }
    }

    if matches!(scope, ValidationScope::Full | ValidationScope::Removal)
        && config.helm.remove_preview_charts
    {
        required.extend([
            ("helm-repo-url", config.helm.repo_url.as_str()),
            ("helm-repo-user", config.helm.repo_user.as_str()),
            ("helm-repo-password", config.helm.repo_password.as_str()),
        ]);
    }

    let mut missing: Vec<&str> = vec![];
    for (name, value) in required {
        if value.trim().is_empty() && !missing.contains(&name) {
            missing.push(name);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingOptions {
            errors: missing
                .into_iter()
                .map(|name| format!("  - Option {} is required for command {}", name, command))
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::test_config;

    #[test]
    fn valid_configuration() {
        let config = test_config();
        assert!(validate_configuration(&config, "run", ValidationScope::Full).is_ok());
    }

    #[test]
    fn every_missing_option_is_listed() {
        let mut config = test_config();
        config.hash_salt = String::new();
        config.app_name = "  ".into();

        let message = validate_configuration(&config, "run", ValidationScope::Full)
            .unwrap_err()
            .to_string();
        assert!(message.contains("Option app-name is required for command run"));
        assert!(message.contains("Option hash-salt is required for command run"));
    }

    #[test]
    fn scoped_requirements() {
        let mut config = test_config();
        config.docker.registry = String::new();
        config.api.github.token = String::new();

        assert!(validate_configuration(&config, "identity", ValidationScope::Identity).is_ok());

        let message = validate_configuration(&config, "remove", ValidationScope::Removal)
            .unwrap_err()
            .to_string();
        assert!(message.contains("Option token is required"));
        assert!(!message.contains("docker-registry"));
    }

    #[test]
    fn chart_repository_credentials() {
        let mut config = test_config();
        config.helm.remove_preview_charts = true;
        config.helm.repo_user = String::new();

        let message = validate_configuration(&config, "remove", ValidationScope::Removal)
            .unwrap_err()
            .to_string();
        assert!(message.contains("Option helm-repo-url is required"));
        assert!(message.contains("Option helm-repo-user is required"));

        let mut config = test_config();
        config.helm.repo_url = "https://charts.example.com".into();
        config.helm.repo_user = String::new();
        let message = validate_configuration(&config, "deploy", ValidationScope::Full)
            .unwrap_err()
            .to_string();
        assert_eq!(message.matches("helm-repo-password").count(), 0);
        assert!(message.contains("Option helm-repo-user is required for command deploy"));
    }
}
