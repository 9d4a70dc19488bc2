use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Published chart version.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ChartVersion {
    pub name: String,
    pub version: String,
    #[serde(rename = "appVersion", default)]
    pub app_version: String,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ChartRepositoryService: Send + Sync {
    /// List every published version of a chart.
    async fn charts_list(&self, chart_name: &str) -> Result<Vec<ChartVersion>>;
    /// Delete one chart version.
    async fn charts_delete(&self, chart_name: &str, version: &str) -> Result<()>;
}
