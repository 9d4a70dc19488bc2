//! Error reporting.

mod client;

pub use client::{capture_error, with_sentry_configuration};
pub use sentry;
