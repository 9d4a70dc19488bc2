use kpreview_chartrepo::ChartVersion;
use kpreview_models::PREVIEW_TAG_PREFIX;
use regex::Regex;
use serde::Deserialize;

use crate::Result;

#[derive(Debug, Deserialize)]
struct ReleaseEntry {
    name: String,
}

/// Release names found in `helm list --output json`.
pub struct ReleaseListing;

impl ReleaseListing {
    pub fn list_args(namespace: &str, prefix: &str) -> Vec<String> {
        vec![
            "list".into(),
            "--namespace".into(),
            namespace.into(),
            "--filter".into(),
            format!("^{}", regex::escape(prefix)),
            "--output".into(),
            "json".into(),
        ]
    }

    pub fn uninstall_args(namespace: &str, release_name: &str) -> Vec<String> {
        vec![
            "uninstall".into(),
            release_name.into(),
            "--namespace".into(),
            namespace.into(),
        ]
    }

    /// Parse the listing, keeping names starting with `prefix`.
    pub fn parse(output: &str, prefix: &str) -> Result<Vec<String>> {
        let output = output.trim();
        if output.is_empty() {
            return Ok(vec![]);
        }

        let entries: Vec<ReleaseEntry> = serde_json::from_str(output)?;
        Ok(entries
            .into_iter()
            .map(|entry| entry.name)
            .filter(|name| name.starts_with(prefix))
            .collect())
    }
}

/// Matches chart versions published for one pull request.
pub struct ChartVersionFilter {
    chart_name: String,
    pattern: Regex,
}

impl ChartVersionFilter {
    pub fn new(chart_name: &str, pr_number: u64) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"{}\.{}\.",
            regex::escape(PREVIEW_TAG_PREFIX),
            pr_number
        ))?;

        Ok(Self {
            chart_name: chart_name.into(),
            pattern,
        })
    }

    pub fn matches(&self, chart: &ChartVersion) -> bool {
        chart.name == self.chart_name && self.pattern.is_match(&chart.version)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_releases() {
        let output = r#"[
            {"name": "preview-shop-42-53b6b18", "namespace": "previews", "app_version": "2.4.7"},
            {"name": "preview-shop-420-aaaaaaa", "namespace": "previews"},
            {"name": "other", "namespace": "previews"}
        ]"#;

        assert_eq!(
            ReleaseListing::parse(output, "preview-shop-42-").unwrap(),
            vec!["preview-shop-42-53b6b18"]
        );
        assert!(ReleaseListing::parse("  \n", "preview-shop-42-")
            .unwrap()
            .is_empty());
        assert!(ReleaseListing::parse("not json", "preview-shop-42-").is_err());
    }

    #[test]
    fn list_args_anchor_prefix() {
        assert_eq!(
            ReleaseListing::list_args("previews", "preview-shop-42-"),
            vec![
                "list",
                "--namespace",
                "previews",
                "--filter",
                r"^preview\-shop\-42\-",
                "--output",
                "json"
            ]
        );
    }

    #[test]
    fn chart_versions() {
        let filter = ChartVersionFilter::new("shop", 42).unwrap();
        let chart = |name: &str, version: &str| ChartVersion {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        };

        assert!(filter.matches(&chart("shop", "1.0.7-preview.42.7")));
        assert!(!filter.matches(&chart("shop", "1.0.7-preview.420.7")));
        assert!(!filter.matches(&chart("shop", "1.0.7")));
        assert!(!filter.matches(&chart("other", "1.0.7-preview.42.7")));
    }
}
