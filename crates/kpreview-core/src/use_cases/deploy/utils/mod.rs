mod plan;
mod steps;

pub use plan::DeployPlan;
pub use steps::ToolStep;
