use serde::{Deserialize, Serialize};

/// Reaction used to acknowledge a preview command.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GhReactionType {
    /// 👍, on `remove-preview`.
    #[serde(rename = "+1")]
    PlusOne,
    /// 🚀, on `add-preview`.
    #[serde(rename = "rocket")]
    Rocket,
}
