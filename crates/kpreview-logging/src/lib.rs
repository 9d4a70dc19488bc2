//! Tracing setup for the command line.
//!
//! Everything is written to standard error: standard output carries the
//! step outputs when `GITHUB_OUTPUT` is not available.

use kpreview_config::Config;
use kpreview_sentry::sentry;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,kpreview=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("Could not forward `log` records to tracing: {source}")]
    LogTracer {
        source: tracing::log::SetLoggerError,
    },
    #[error("Logging is already configured: {source}")]
    AlreadyConfigured {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Indented span tree, for humans reading CI logs.
    Tree,
    /// One bunyan JSON object per line.
    Bunyan,
}

impl LogFormat {
    pub fn from_config(config: &Config) -> Self {
        if config.logging.use_bunyan {
            Self::Bunyan
        } else {
            Self::Tree
        }
    }
}

/// Parse a filter directive, falling back to [`DEFAULT_FILTER`].
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let filter = directive
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER);

    EnvFilter::try_new(filter).map_err(|e| LoggingError::InvalidFilter {
        filter: filter.into(),
        source: e,
    })
}

/// Install the global subscriber.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::LogTracer { source: e })?;

    let directive = std::env::var("RUST_LOG").ok();
    let filter = build_filter(directive.as_deref())?;
    let format = LogFormat::from_config(config);

    let tree_layer = (format == LogFormat::Tree).then(|| {
        HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true)
    });
    let (json_layer, bunyan_layer) = match format {
        LogFormat::Bunyan => (
            Some(JsonStorageLayer),
            Some(BunyanFormattingLayer::new(
                format!("kpreview-{}", config.version),
                std::io::stderr,
            )),
        ),
        LogFormat::Tree => (None, None),
    };
    let sentry_layer =
        (!config.sentry.url.is_empty()).then(|| sentry::integrations::tracing::layer());

    let subscriber = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(tree_layer)
        .with(filter)
        .with(json_layer)
        .with(bunyan_layer)
        .with(sentry_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::AlreadyConfigured { source: e })
}
