use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
    /// Account type, `User` or `Bot`.
    #[serde(rename = "type", default)]
    pub user_type: String,
}

impl GhUser {
    /// Is the account an automation account?
    pub fn is_bot(&self) -> bool {
        self.user_type == "Bot" || self.login.ends_with("[bot]")
    }
}
