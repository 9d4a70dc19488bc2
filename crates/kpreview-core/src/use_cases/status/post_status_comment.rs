use async_trait::async_trait;
use kpreview_models::{MessageKind, PreviewIdentity, PullRequestContext};
use shaku::{Component, Interface};
use tracing::info;

use super::utils::{StatusMarker, StatusMessageGenerator};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostStatusCommentInterface: Interface {
    /// Create or replace the status comment, returning its ID.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
        kind: MessageKind,
        content: Option<String>,
    ) -> Result<u64>;
}

#[derive(Component)]
#[shaku(interface = PostStatusCommentInterface)]
pub(crate) struct PostStatusComment;

#[async_trait]
impl PostStatusCommentInterface for PostStatusComment {
    #[tracing::instrument(skip(self, ctx, pr_ctx, content), fields(pr_handle = %pr_ctx.handle))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_ctx: &'a PullRequestContext,
        kind: MessageKind,
        content: Option<String>,
    ) -> Result<u64> {
        let handle = &pr_ctx.handle;
        let content = match (kind, content) {
            (MessageKind::Success, None) => Some(
                PreviewIdentity::derive(
                    handle.number(),
                    &ctx.config.hash_salt,
                    &ctx.config.app_name,
                    &ctx.config.base_url,
                )?
                .preview_host,
            ),
            (_, content) => content,
        };

        let body = StatusMessageGenerator {
            comment_prefix: &ctx.config.comment_prefix,
            short_sha: &pr_ctx.short_sha,
        }
        .generate(kind, content.as_deref());

        let comments = ctx
            .api_service
            .comments_list(handle.owner(), handle.name(), handle.number())
            .await?;

        let comment_id = match StatusMarker::find_latest(&comments) {
            Some(comment) => {
                ctx.api_service
                    .comments_update(handle.owner(), handle.name(), comment.id, &body)
                    .await?;
                comment.id
            }
            None => {
                ctx.api_service
                    .comments_post(handle.owner(), handle.name(), handle.number(), &body)
                    .await?
                    .id
            }
        };

        info!(
            pr_handle = %handle,
            comment_id = comment_id,
            kind = %kind,
            message = "Status comment posted"
        );

        Ok(comment_id)
    }
}

#[cfg(test)]
mod tests {
    use kpreview_chartrepo::MockChartRepositoryService;
    use kpreview_ghapi_interface::{types::GhIssueComment, ApiService, MockApiService};
    use kpreview_ghapi_memory::MemoryApiService;
    use kpreview_process::MockProcessRunner;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::{test_config, test_pr_context, CoreContextTest},
        CoreModule,
    };

    #[tokio::test]
    async fn create_when_missing() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_comments_list()
                .once()
                .withf(|owner, name, number| owner == "me" && name == "test" && number == &42)
                .return_once(|_, _, _| {
                    Ok(vec![GhIssueComment {
                        id: 1,
                        body: "Nice!".into(),
                        ..Default::default()
                    }])
                });
            svc.expect_comments_post()
                .once()
                .withf(|owner, name, number, body| {
                    owner == "me"
                        && name == "test"
                        && number == &42
                        && body.contains("(abc1234) is currently building")
                        && StatusMarker::parse_flag(body)
                })
                .return_once(|_, _, _, _| {
                    Ok(GhIssueComment {
                        id: 2,
                        ..Default::default()
                    })
                });
            svc
        };

        let id = PostStatusComment
            .run(
                &ctx.as_context(),
                &test_pr_context(),
                MessageKind::Brewing,
                None,
            )
            .await
            .unwrap();
        assert_eq!(id, 2);
    }

    #[tokio::test]
    async fn replace_existing() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_comments_list().once().return_once(|_, _, _| {
                Ok(vec![GhIssueComment {
                    id: 5,
                    body: format!("old\n{}", StatusMarker::header()),
                    ..Default::default()
                }])
            });
            svc.expect_comments_update()
                .once()
                .withf(|_, _, id, body| {
                    id == &5
                        && body.contains("<https://shop-42-53b6b18.preview.example.com>")
                        && !body.contains("old")
                })
                .return_once(|_, _, id, _| Ok(id));
            svc
        };

        let id = PostStatusComment
            .run(
                &ctx.as_context(),
                &test_pr_context(),
                MessageKind::Success,
                None,
            )
            .await
            .unwrap();
        assert_eq!(id, 5);
    }

    #[tokio::test]
    async fn posting_twice_keeps_one_comment() {
        let config = test_config();
        let core_module = CoreModule::builder().build();
        let api_service = MemoryApiService::new();
        let process_runner = MockProcessRunner::new();
        let chart_repository = MockChartRepositoryService::new();
        let ctx = CoreContext {
            config: &config,
            core_module: &core_module,
            api_service: &api_service,
            process_runner: &process_runner,
            chart_repository: &chart_repository,
        };

        let first = test_pr_context();
        let second = PullRequestContext {
            short_sha: "def5678".into(),
            ..test_pr_context()
        };

        PostStatusComment
            .run(&ctx, &first, MessageKind::Brewing, None)
            .await
            .unwrap();
        PostStatusComment
            .run(&ctx, &second, MessageKind::Brewing, None)
            .await
            .unwrap();

        let comments = api_service.comments_list("me", "test", 42).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(
            comments[0].body,
            StatusMessageGenerator {
                comment_prefix: "@github-actions",
                short_sha: "def5678",
            }
            .generate(MessageKind::Brewing, None)
        );
    }
}
