pub(crate) mod deploy_and_report;
pub(crate) mod reconcile_event;
pub(crate) mod remove_and_report;
pub(crate) mod utils;

pub use deploy_and_report::DeployAndReportInterface;
pub use reconcile_event::ReconcileEventInterface;
pub use remove_and_report::RemoveAndReportInterface;
pub use utils::{PreviewAction, ProbeReport, ReconcileDecision, ReconcileOutcome};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    deploy_and_report::MockDeployAndReportInterface,
    reconcile_event::MockReconcileEventInterface,
    remove_and_report::MockRemoveAndReportInterface,
};
