/// Outcome of a deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployResult {
    pub success: bool,
    pub preview_url: String,
    pub release_name: String,
    pub image_version: String,
}

/// Outcome of a single best-effort removal item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    /// Release name, or chart `name@version`.
    pub item: String,
    pub success: bool,
    /// Failure reason, empty on success.
    pub message: String,
}

impl ItemOutcome {
    pub fn succeeded<T: Into<String>>(item: T) -> Self {
        Self {
            item: item.into(),
            success: true,
            message: String::new(),
        }
    }

    pub fn failed<T: Into<String>, M: Into<String>>(item: T, message: M) -> Self {
        Self {
            item: item.into(),
            success: false,
            message: message.into(),
        }
    }
}

/// Outcome of a removal.
///
/// `success` stays true when individual items fail: removal is best effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalResult {
    pub success: bool,
    pub release_name: String,
    pub releases: Vec<ItemOutcome>,
    pub charts: Vec<ItemOutcome>,
}

impl RemovalResult {
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.releases
            .iter()
            .chain(self.charts.iter())
            .filter(|outcome| !outcome.success)
    }
}
