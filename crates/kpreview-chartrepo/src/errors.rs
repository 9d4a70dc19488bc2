use thiserror::Error;

/// Chart repository error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ChartRepositoryError {
    #[error("Chart repository call failed (status {}): {}", display_status(.status), .message)]
    HttpError {
        status: Option<u16>,
        message: String,
    },
}

impl From<reqwest::Error> for ChartRepositoryError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpError {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

fn display_status(status: &Option<u16>) -> String {
    status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".into())
}

pub type Result<T, E = ChartRepositoryError> = core::result::Result<T, E>;
