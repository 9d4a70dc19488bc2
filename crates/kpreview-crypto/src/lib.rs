//! Crypto module.

mod digest;
mod errors;

pub use self::{
    digest::ShortDigest,
    errors::{CryptoError, Result},
};
