use async_trait::async_trait;

use crate::{CommandOutcome, Result};

/// Runs external programs to completion.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run a program and wait for it to exit, whatever its exit code.
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutcome>;
}
