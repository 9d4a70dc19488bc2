pub(crate) mod deploy_preview;
pub(crate) mod utils;

pub use deploy_preview::DeployPreviewInterface;
pub use utils::{DeployPlan, ToolStep};

#[cfg(any(test, feature = "testkit"))]
pub use self::deploy_preview::MockDeployPreviewInterface;
