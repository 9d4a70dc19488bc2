mod comment;
mod commit;
mod events;
mod pull_request;
mod reaction_type;
mod user;

pub use comment::GhIssueComment;
pub use commit::GhCommitShort;
pub use events::{
    GhIssue, GhIssueCommentAction, GhIssueCommentEvent, GhPullRequestEvent, GhPushEvent,
};
pub use pull_request::{GhBranchShort, GhPullRequestShort};
pub use reaction_type::GhReactionType;
pub use user::GhUser;
