use std::{error::Error, future::Future, str::FromStr};

use kpreview_config::Config;
use sentry::{integrations::debug_images::DebugImagesIntegration, types::Dsn, ClientOptions};
use tracing::{info, warn};

/// Configure Sentry integration by wrapping a function.
pub async fn with_sentry_configuration<T, Fut, R>(config: &Config, func: T) -> R
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = R>,
{
    let _guard = {
        if config.sentry.url.is_empty() {
            None
        } else {
            match Dsn::from_str(&config.sentry.url) {
                Ok(dsn) => {
                    info!("Sentry integration enabled.");

                    let mut options =
                        ClientOptions::new().add_integration(DebugImagesIntegration::default());

                    options.dsn = Some(dsn);
                    options.default_integrations = true;
                    options.in_app_exclude.push("sentry");
                    options.in_app_exclude.push("tokio");
                    options.release = Some(config.version.to_string().into());
                    options.attach_stacktrace = true;
                    options.traces_sample_rate = config.sentry.traces_sample_rate;
                    options.debug = false;

                    Some(sentry::init(options))
                }
                Err(e) => {
                    warn!(error = %e, "Invalid Sentry URL, integration disabled.");
                    None
                }
            }
        }
    };

    func().await
}

/// Send an error to Sentry, if enabled.
pub fn capture_error<E: Error + ?Sized>(error: &E) {
    sentry::capture_error(error);
}
