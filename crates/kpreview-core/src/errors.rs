//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`kpreview_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: kpreview_ghapi_interface::ApiError,
    },

    /// Wraps [`kpreview_process::ProcessError`].
    #[error("Process error: {source}")]
    ProcessError {
        source: kpreview_process::ProcessError,
    },

    /// Wraps [`kpreview_chartrepo::ChartRepositoryError`].
    #[error("Chart repository error: {source}")]
    ChartRepositoryError {
        source: kpreview_chartrepo::ChartRepositoryError,
    },

    #[error("Invalid input: {source}")]
    InvalidInput {
        source: kpreview_models::PreviewIdentityError,
    },

    #[error("Invalid repository: {source}")]
    RepositoryPathError {
        source: kpreview_models::RepositoryPathError,
    },

    /// Wraps [`regex::Error`].
    #[error("Error while compiling regex: {source}")]
    RegexError { source: regex::Error },

    #[error("Could not read release list: {source}")]
    InvalidReleaseList { source: serde_json::Error },

    #[error("Deploy step '{}' failed with exit code {}\n{}", step, exit_code, tail_lines(.stderr))]
    DeployStepFailed {
        step: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Removal step '{}' failed with exit code {}\n{}", step, exit_code, tail_lines(.stderr))]
    RemovalStepFailed {
        step: String,
        exit_code: i32,
        stderr: String,
    },
}

const DISPLAYED_STDERR_LINES: usize = 20;

fn tail_lines(output: &str) -> String {
    let lines: Vec<&str> = output.trim_end().lines().collect();
    let start = lines.len().saturating_sub(DISPLAYED_STDERR_LINES);
    lines[start..].join("\n")
}

impl From<kpreview_ghapi_interface::ApiError> for DomainError {
    fn from(e: kpreview_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<kpreview_process::ProcessError> for DomainError {
    fn from(e: kpreview_process::ProcessError) -> Self {
        Self::ProcessError { source: e }
    }
}

impl From<kpreview_chartrepo::ChartRepositoryError> for DomainError {
    fn from(e: kpreview_chartrepo::ChartRepositoryError) -> Self {
        Self::ChartRepositoryError { source: e }
    }
}

impl From<kpreview_models::PreviewIdentityError> for DomainError {
    fn from(e: kpreview_models::PreviewIdentityError) -> Self {
        Self::InvalidInput { source: e }
    }
}

impl From<kpreview_models::RepositoryPathError> for DomainError {
    fn from(e: kpreview_models::RepositoryPathError) -> Self {
        Self::RepositoryPathError { source: e }
    }
}

impl From<regex::Error> for DomainError {
    fn from(e: regex::Error) -> Self {
        Self::RegexError { source: e }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidReleaseList { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_failure_shows_last_lines() {
        let stderr = (0..30)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let error = DomainError::DeployStepFailed {
            step: "image-build".into(),
            exit_code: 1,
            stderr,
        };

        let message = error.to_string();
        assert!(message.starts_with("Deploy step 'image-build' failed with exit code 1\nline 10"));
        assert!(message.ends_with("line 29"));
        assert!(!message.contains("line 9\n"));
    }
}
