use kpreview_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid header value")]
    InvalidHeader { source: http::header::InvalidHeaderValue },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<http::header::InvalidHeaderValue> for GitHubError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        GitHubError::InvalidHeader { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::HttpError { source } => ApiError::HttpError {
                status: source.status().map(|s| s.as_u16()),
                message: source.to_string(),
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
