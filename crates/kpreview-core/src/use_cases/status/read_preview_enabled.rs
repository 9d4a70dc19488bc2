use async_trait::async_trait;
use kpreview_models::PullRequestHandle;
use shaku::{Component, Interface};

use super::utils::StatusMarker;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReadPreviewEnabledInterface: Interface {
    /// Read the preview flag from the status comment, `false` when there is none.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_handle: &'a PullRequestHandle)
        -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = ReadPreviewEnabledInterface)]
pub(crate) struct ReadPreviewEnabled;

#[async_trait]
impl ReadPreviewEnabledInterface for ReadPreviewEnabled {
    #[tracing::instrument(skip(self, ctx, pr_handle), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &'a PullRequestHandle,
    ) -> Result<bool> {
        let comments = ctx
            .api_service
            .comments_list(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        Ok(StatusMarker::find_latest(&comments)
            .map(|comment| StatusMarker::parse_flag(&comment.body))
            .unwrap_or(false))
    }
}
