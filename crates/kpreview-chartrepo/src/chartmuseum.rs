use std::time::Duration;

use async_trait::async_trait;
use kpreview_config::Config;
use reqwest::{Client, ClientBuilder, RequestBuilder};

use crate::{ChartRepositoryService, ChartVersion, Result};

/// ChartMuseum client, authenticated with basic auth.
#[derive(Clone)]
pub struct ChartMuseumService {
    root_url: String,
    username: String,
    password: String,
    connect_timeout: u64,
    version: String,
}

impl ChartMuseumService {
    pub fn new(config: &Config) -> Self {
        Self {
            root_url: config.helm.repo_url.trim_end_matches('/').into(),
            username: config.helm.repo_user.clone(),
            password: config.helm.repo_password.clone(),
            connect_timeout: config.api.github.connect_timeout,
            version: config.version.clone(),
        }
    }

    fn get_client(&self) -> Result<Client> {
        Ok(ClientBuilder::new()
            .connect_timeout(Duration::from_millis(self.connect_timeout))
            .user_agent(format!("kpreview/{}", self.version))
            .build()?)
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.username, Some(&self.password))
    }

    fn build_url(&self, path: String) -> String {
        format!("{}{}", self.root_url, path)
    }
}

#[async_trait]
impl ChartRepositoryService for ChartMuseumService {
    #[tracing::instrument(skip(self))]
    async fn charts_list(&self, chart_name: &str) -> Result<Vec<ChartVersion>> {
        Ok(self
            .authenticate(
                self.get_client()?
                    .get(self.build_url(format!("/api/charts/{chart_name}"))),
            )
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn charts_delete(&self, chart_name: &str, version: &str) -> Result<()> {
        self.authenticate(
            self.get_client()?
                .delete(self.build_url(format!("/api/charts/{chart_name}/{version}"))),
        )
        .send()
        .await?
        .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn urls() {
        let mut config = Config::from_env_no_version();
        config.helm.repo_url = "https://charts.example.com/".into();

        let service = ChartMuseumService::new(&config);
        assert_eq!(
            service.build_url("/api/charts/shop".into()),
            "https://charts.example.com/api/charts/shop"
        );
        service.get_client().unwrap();
    }

    #[test]
    fn chart_list_payload() {
        let charts: Vec<ChartVersion> = serde_json::from_str(
            r#"[
                {"name": "shop", "version": "1.4-preview.42.3", "appVersion": "2.4-preview.42.3", "urls": []},
                {"name": "shop", "version": "1.2"}
            ]"#,
        )
        .unwrap();

        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].app_version, "2.4-preview.42.3");
        assert_eq!(charts[1].app_version, "");
    }
}
