//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use kpreview_config::Config;
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let builder = get_anonymous_client_builder(config)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", config.api.github.token))?,
    );

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("kpreview/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn arrange_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.api.github.token = "abcdef".into();
        config.api.github.root_url = "https://api.example.com/".into();
        config
    }

    #[test]
    fn test_build_github_url() {
        let config = arrange_config();
        assert_eq!(
            build_github_url(&config, "/repos/me/test"),
            "https://api.example.com/repos/me/test"
        );
    }

    #[test]
    fn test_get_authenticated_client_builder() {
        let config = arrange_config();
        get_authenticated_client_builder(&config)
            .unwrap()
            .build()
            .unwrap();
    }

    #[test]
    fn test_invalid_token() {
        let mut config = arrange_config();
        config.api.github.token = "abc\ndef".into();
        assert!(matches!(
            get_authenticated_client_builder(&config),
            Err(GitHubError::InvalidHeader { .. })
        ));
    }
}
