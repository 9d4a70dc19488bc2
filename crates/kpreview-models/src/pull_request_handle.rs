use std::fmt::Display;

use crate::RepositoryPath;

/// Pull request a preview belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestHandle {
    repository: RepositoryPath,
    number: u64,
}

impl PullRequestHandle {
    pub fn new(repository: RepositoryPath, number: u64) -> Self {
        Self { repository, number }
    }

    pub fn owner(&self) -> &str {
        self.repository.owner()
    }

    pub fn name(&self) -> &str {
        self.repository.name()
    }

    /// Pull request number, also the issue number for comments.
    pub fn number(&self) -> u64 {
        self.number
    }
}

impl Display for PullRequestHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

impl From<(&str, &str, u64)> for PullRequestHandle {
    fn from((owner, name, number): (&str, &str, u64)) -> Self {
        Self::new((owner, name).into(), number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let handle = PullRequestHandle::from(("me", "test", 42));
        assert_eq!(handle.owner(), "me");
        assert_eq!(handle.name(), "test");
        assert_eq!(handle.to_string(), "me/test#42");
    }
}
