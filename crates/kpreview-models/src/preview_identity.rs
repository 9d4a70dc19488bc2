//! Preview identifiers.

use kpreview_crypto::ShortDigest;
use thiserror::Error;

/// Marker shared by every preview image tag and chart version.
pub const PREVIEW_TAG_PREFIX: &str = "-preview";

const HASH_LENGTH: usize = 7;

/// Identity error.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreviewIdentityError {
    #[error("Invalid input: pull request number must be a positive integer")]
    InvalidPullRequestNumber,
    #[error("Invalid input: hash salt cannot be empty")]
    EmptySalt,
}

/// Identifiers tying together a pull request, its release and its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewIdentity {
    /// Truncated salted digest of the pull request number.
    pub hash: String,
    /// `<app>-<number>-<hash>`.
    pub preview_slug: String,
    /// `<slug>.<base url>`.
    pub preview_host: String,
    /// `preview-<app>-<number>-<hash>`.
    pub release_name: String,
}

impl PreviewIdentity {
    /// Derive the identity of a pull request.
    ///
    /// Pure: the same inputs always give the same identity.
    pub fn derive(
        pr_number: u64,
        salt: &str,
        app_name: &str,
        base_url: &str,
    ) -> Result<Self, PreviewIdentityError> {
        let hash = Self::hash(pr_number, salt)?;
        let preview_slug = format!("{}-{}-{}", app_name, pr_number, hash);
        let preview_host = format!("{}.{}", preview_slug, base_url);
        let release_name = format!("preview-{}-{}-{}", app_name, pr_number, hash);

        Ok(Self {
            hash,
            preview_slug,
            preview_host,
            release_name,
        })
    }

    /// Salted hash of a pull request number.
    pub fn hash(pr_number: u64, salt: &str) -> Result<String, PreviewIdentityError> {
        if pr_number == 0 {
            return Err(PreviewIdentityError::InvalidPullRequestNumber);
        }
        if salt.is_empty() {
            return Err(PreviewIdentityError::EmptySalt);
        }

        ShortDigest::sha256_prefix(&format!("{}{}", pr_number, salt), HASH_LENGTH)
            .map_err(|_| PreviewIdentityError::EmptySalt)
    }

    /// Prefix shared by every release of a pull request.
    pub fn release_prefix(app_name: &str, pr_number: u64) -> String {
        format!("preview-{}-{}-", app_name, pr_number)
    }
}

/// Version tags of preview artifacts.
pub struct PreviewTag;

impl PreviewTag {
    /// `-preview.<number>.<run>`.
    pub fn suffix(pr_number: u64, run_number: u64) -> String {
        format!("{}.{}.{}", PREVIEW_TAG_PREFIX, pr_number, run_number)
    }

    /// `<major>.<run><suffix>`.
    pub fn version(major: &str, pr_number: u64, run_number: u64) -> String {
        format!(
            "{}.{}{}",
            major,
            run_number,
            Self::suffix(pr_number, run_number)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn derive_end_to_end() {
        let identity =
            PreviewIdentity::derive(42, "abc", "shop", "preview.example.com").unwrap();

        assert_eq!(
            identity,
            PreviewIdentity {
                hash: "53b6b18".into(),
                preview_slug: "shop-42-53b6b18".into(),
                preview_host: "shop-42-53b6b18.preview.example.com".into(),
                release_name: "preview-shop-42-53b6b18".into(),
            }
        );
    }

    #[test]
    fn derive_is_deterministic() {
        for number in 1..100 {
            assert_eq!(
                PreviewIdentity::derive(number, "salt", "app", "example.com").unwrap(),
                PreviewIdentity::derive(number, "salt", "app", "example.com").unwrap()
            );
        }
    }

    #[test]
    fn hashes_do_not_collide() {
        let hashes: HashSet<String> = (1..=2000)
            .map(|number| PreviewIdentity::hash(number, "salt").unwrap())
            .collect();

        assert_eq!(hashes.len(), 2000);
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(
            PreviewIdentity::derive(0, "abc", "shop", "example.com"),
            Err(PreviewIdentityError::InvalidPullRequestNumber)
        );
        assert_eq!(
            PreviewIdentity::derive(1, "", "shop", "example.com"),
            Err(PreviewIdentityError::EmptySalt)
        );
    }

    #[test]
    fn tags() {
        assert_eq!(PreviewTag::suffix(42, 7), "-preview.42.7");
        assert_eq!(PreviewTag::version("1.0", 42, 7), "1.0.7-preview.42.7");
        assert_eq!(PreviewIdentity::release_prefix("shop", 42), "preview-shop-42-");
    }
}
