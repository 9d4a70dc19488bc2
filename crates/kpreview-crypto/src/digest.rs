use sha2::{Digest, Sha256};

use super::errors::CryptoError;

const SHA256_HEX_LENGTH: usize = 64;

/// Truncated SHA-256 hex digest.
pub struct ShortDigest;

impl ShortDigest {
    /// Full lowercase hex SHA-256 digest of `input`.
    pub fn sha256_hex(input: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// First `length` hex characters of the SHA-256 digest of `input`.
    pub fn sha256_prefix(input: &str, length: usize) -> Result<String, CryptoError> {
        if length == 0 || length > SHA256_HEX_LENGTH {
            return Err(CryptoError::InvalidDigestLength {
                length,
                max: SHA256_HEX_LENGTH,
            });
        }

        let mut digest = Self::sha256_hex(input);
        digest.truncate(length);
        Ok(digest)
    }
}
