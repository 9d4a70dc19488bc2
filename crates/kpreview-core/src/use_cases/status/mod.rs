pub(crate) mod post_status_comment;
pub(crate) mod read_preview_enabled;
pub(crate) mod utils;

pub use post_status_comment::PostStatusCommentInterface;
pub use read_preview_enabled::ReadPreviewEnabledInterface;
pub use utils::{StatusMarker, StatusMessageGenerator};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    post_status_comment::MockPostStatusCommentInterface,
    read_preview_enabled::MockReadPreviewEnabledInterface,
};
