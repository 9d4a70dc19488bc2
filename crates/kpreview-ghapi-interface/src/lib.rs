//! Forge API interface.

#![warn(clippy::all)]

mod errors;
mod events;
mod interface;
pub mod pulls;
pub mod types;

pub use errors::{ApiError, Result};
pub use events::GhEvent;
pub use interface::ApiService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
