//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forge API call failed (status {}): {}", display_status(.status), .message)]
    HttpError {
        status: Option<u16>,
        message: String,
    },

    #[error("No pull request is associated with commit '{}'", sha)]
    NoAssociatedPullRequest { sha: String },

    #[error("Missing context: {}", what)]
    MissingContext { what: String },

    #[error("Unsupported event '{}'", event)]
    UnsupportedEvent { event: String },

    #[error("Invalid payload for event '{}'", event)]
    InvalidPayload {
        event: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

fn display_status(status: &Option<u16>) -> String {
    status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".into())
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
