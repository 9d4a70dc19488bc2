use async_trait::async_trait;
use kpreview_ghapi_interface::{pulls::PullRequestApi, types::GhIssueCommentAction, GhEvent};
use kpreview_models::{
    EventKind, PreviewTrigger, PullRequestAction, PullRequestContext, PullRequestHandle,
    RepositoryPath,
};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildPullRequestContextInterface: Interface {
    /// Snapshot the pull request targeted by the triggering event.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: &'a GhEvent)
        -> Result<PullRequestContext>;
}

#[derive(Component)]
#[shaku(interface = BuildPullRequestContextInterface)]
pub(crate) struct BuildPullRequestContext;

#[async_trait]
impl BuildPullRequestContextInterface for BuildPullRequestContext {
    #[tracing::instrument(skip(self, ctx, event), fields(event = event.name()), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &'a GhEvent,
    ) -> Result<PullRequestContext> {
        let repository: RepositoryPath = ctx.config.github.repository.parse()?;
        let (owner, name) = repository.components();

        let number = PullRequestApi::resolve_current_pull_request_number(
            ctx.api_service,
            owner,
            name,
            event,
            &ctx.config.github.sha,
        )
        .await?;
        let short_sha =
            PullRequestApi::latest_commit_short_sha(ctx.api_service, owner, name, number).await?;

        info!(
            repository_path = %repository,
            pull_request_number = number,
            short_sha = short_sha,
            message = "Pull request resolved"
        );

        Ok(PullRequestContext {
            event: EventKind::from_name(event.name()),
            trigger: Self::trigger(event),
            actor: ctx.config.github.actor.clone(),
            handle: PullRequestHandle::new(repository, number),
            short_sha,
            run_number: ctx.config.github.run_number,
        })
    }
}

impl BuildPullRequestContext {
    fn trigger(event: &GhEvent) -> PreviewTrigger {
        match event {
            GhEvent::IssueComment(payload) => PreviewTrigger::Comment {
                id: payload.comment.id,
                body: payload.comment.body.clone(),
                author: payload.comment.user.login.clone(),
                author_is_bot: payload.comment.user.is_bot() || payload.sender.is_bot(),
                created: payload.action == GhIssueCommentAction::Created,
            },
            GhEvent::PullRequest(payload) | GhEvent::PullRequestTarget(payload) => {
                PreviewTrigger::PullRequest(PullRequestAction::from_name(&payload.action))
            }
            GhEvent::Push(_) | GhEvent::Other(_) => PreviewTrigger::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use kpreview_ghapi_interface::{
        types::{GhCommitShort, GhIssue, GhIssueComment, GhIssueCommentEvent, GhUser},
        MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn comment_event() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_pulls_commits_list()
                .once()
                .withf(|owner, name, number, page, _| {
                    owner == "me" && name == "test" && number == &42 && page == &1
                })
                .return_once(|_, _, _, _, _| {
                    Ok(vec![
                        GhCommitShort {
                            sha: "1111111aaaa".into(),
                        },
                        GhCommitShort {
                            sha: "abc1234ffff".into(),
                        },
                    ])
                });
            svc
        };

        let event = GhEvent::IssueComment(GhIssueCommentEvent {
            action: GhIssueCommentAction::Created,
            issue: Some(GhIssue { number: 42 }),
            comment: GhIssueComment {
                id: 99,
                user: GhUser {
                    login: "someone".into(),
                    user_type: "User".into(),
                },
                body: "@github-actions add-preview".into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let pr_ctx = BuildPullRequestContext
            .run(&ctx.as_context(), &event)
            .await
            .unwrap();

        assert_eq!(
            pr_ctx,
            PullRequestContext {
                event: EventKind::IssueComment,
                trigger: PreviewTrigger::Comment {
                    id: 99,
                    body: "@github-actions add-preview".into(),
                    author: "someone".into(),
                    author_is_bot: false,
                    created: true,
                },
                actor: "me".into(),
                handle: ("me", "test", 42).into(),
                short_sha: "abc1234".into(),
                run_number: 7,
            }
        );
    }

    #[tokio::test]
    async fn unsupported_event() {
        let ctx = CoreContextTest::new();

        let result = BuildPullRequestContext
            .run(&ctx.as_context(), &GhEvent::Other("schedule".into()))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn invalid_repository() {
        let mut ctx = CoreContextTest::new();
        ctx.config.github.repository = "nope".into();

        let result = BuildPullRequestContext
            .run(&ctx.as_context(), &GhEvent::Other("schedule".into()))
            .await;
        assert!(matches!(
            result,
            Err(crate::DomainError::RepositoryPathError { .. })
        ));
    }
}
