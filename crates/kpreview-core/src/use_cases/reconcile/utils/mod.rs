mod decision;
mod report;

pub use decision::{PreviewAction, ReconcileDecision};
pub use report::{ProbeReport, ReconcileOutcome};
