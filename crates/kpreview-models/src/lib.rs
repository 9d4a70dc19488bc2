//! Domain models.

#![warn(clippy::all)]

mod context;
mod message_kind;
mod preview_command;
mod preview_identity;
mod pull_request_handle;
mod repository_path;
mod results;

pub use context::{EventKind, PreviewTrigger, PullRequestAction, PullRequestContext};
pub use message_kind::{MessageKind, MessageKindError};
pub use preview_command::{PreviewCommand, PreviewCommandError};
pub use preview_identity::{PreviewIdentity, PreviewIdentityError, PreviewTag, PREVIEW_TAG_PREFIX};
pub use pull_request_handle::PullRequestHandle;
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use results::{DeployResult, ItemOutcome, RemovalResult};
