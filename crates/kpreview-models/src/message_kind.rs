use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown message kind '{0}'")]
pub struct MessageKindError(String);

/// Status message posted in the sticky comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Welcome,
    Brewing,
    Success,
    Fail,
    Removed,
    Cancelled,
}

impl MessageKind {
    pub fn all() -> [Self; 6] {
        [
            Self::Welcome,
            Self::Brewing,
            Self::Success,
            Self::Fail,
            Self::Removed,
            Self::Cancelled,
        ]
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Brewing => "brewing",
            Self::Success => "success",
            Self::Fail => "fail",
            Self::Removed => "removed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Value of the preview flag recorded alongside this message.
    pub fn preview_enabled(self) -> bool {
        !matches!(self, Self::Welcome | Self::Removed)
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for MessageKind {
    type Err = MessageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|kind| kind.to_str() == lowered)
            .ok_or_else(|| MessageKindError(s.into()))
    }
}
