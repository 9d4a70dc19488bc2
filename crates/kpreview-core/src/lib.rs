//! Preview environment logic.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod commands;
mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    context::build_pull_request_context::BuildPullRequestContext,
    deploy::deploy_preview::DeployPreview,
    reconcile::{
        deploy_and_report::DeployAndReport, reconcile_event::ReconcileEvent,
        remove_and_report::RemoveAndReport,
    },
    removal::remove_preview::RemovePreview,
    status::{post_status_comment::PostStatusComment, read_preview_enabled::ReadPreviewEnabled},
};

module! {
    pub CoreModule {
        components = [
            BuildPullRequestContext, PostStatusComment, ReadPreviewEnabled,
            DeployPreview, RemovePreview, DeployAndReport, RemoveAndReport,
            ReconcileEvent
        ],
        providers = []
    }
}
