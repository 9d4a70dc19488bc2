//! External process runner.

#![warn(clippy::all)]

mod errors;
mod interface;
mod outcome;
mod tokio_runner;

pub use errors::{ProcessError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockProcessRunner;
pub use interface::ProcessRunner;
pub use outcome::CommandOutcome;
pub use tokio_runner::{redact_args, TokioProcessRunner};
