use serde::{Deserialize, Serialize};

/// GitHub Commit, as listed on a pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitShort {
    /// SHA.
    pub sha: String,
}

impl GhCommitShort {
    /// Abbreviated SHA.
    pub fn short_sha(&self) -> String {
        self.sha.chars().take(7).collect()
    }
}
