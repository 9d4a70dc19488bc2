pub mod context;
pub mod deploy;
pub mod reconcile;
pub mod removal;
pub mod status;
