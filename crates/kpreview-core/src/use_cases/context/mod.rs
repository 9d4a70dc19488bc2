pub(crate) mod build_pull_request_context;

pub use build_pull_request_context::BuildPullRequestContextInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::build_pull_request_context::MockBuildPullRequestContextInterface;
