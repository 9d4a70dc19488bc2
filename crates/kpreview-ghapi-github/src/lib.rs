//! GitHub REST driver for the forge API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod github;

pub use github::GithubApiService;
