//! Chart repository client.
//!
//! Talks to a ChartMuseum-compatible HTTP API.

#![warn(clippy::all)]

mod chartmuseum;
mod errors;
mod interface;

pub use chartmuseum::ChartMuseumService;
pub use errors::{ChartRepositoryError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockChartRepositoryService;
pub use interface::{ChartRepositoryService, ChartVersion};
