use thiserror::Error;

/// Process error.
///
/// Non-zero exit codes are not errors: they are reported in `CommandOutcome`.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Could not spawn '{}'", program)]
    SpawnError {
        program: String,
        source: std::io::Error,
    },

    #[error("Could not wait for '{}'", program)]
    WaitError {
        program: String,
        source: std::io::Error,
    },
}

pub type Result<T, E = ProcessError> = core::result::Result<T, E>;
