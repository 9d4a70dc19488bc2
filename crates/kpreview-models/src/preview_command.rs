use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown preview command '{0}'")]
pub struct PreviewCommandError(String);

/// Command accepted in pull request comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewCommand {
    AddPreview,
    RemovePreview,
}

impl PreviewCommand {
    pub fn all() -> [Self; 2] {
        [Self::AddPreview, Self::RemovePreview]
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Self::AddPreview => "add-preview",
            Self::RemovePreview => "remove-preview",
        }
    }
}

impl Display for PreviewCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for PreviewCommand {
    type Err = PreviewCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|command| command.to_str() == s)
            .ok_or_else(|| PreviewCommandError(s.into()))
    }
}
