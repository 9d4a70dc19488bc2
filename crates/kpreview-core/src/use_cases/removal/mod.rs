pub(crate) mod remove_preview;
pub(crate) mod utils;

pub use remove_preview::RemovePreviewInterface;
pub use utils::{ChartVersionFilter, ReleaseListing};

#[cfg(any(test, feature = "testkit"))]
pub use self::remove_preview::MockRemovePreviewInterface;
