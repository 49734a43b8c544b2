//! Password hashing service
//!
//! Thin wrapper over bcrypt. Each call to `hash` generates a fresh salt
//! which bcrypt embeds in the digest, so verification needs no separate
//! salt storage, and the comparison inside `verify` is constant-time.

use crate::errors::{DomainError, DomainResult};

/// One-way salted password hasher
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost
    ///
    /// Tests use the minimum cost to keep hashing fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Produce a salted one-way digest of the plaintext
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a plaintext against a stored digest
    ///
    /// Never raises: a malformed digest simply fails verification.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        let digest = hasher.hash("pw1").unwrap();

        assert!(hasher.verify("pw1", &digest));
        assert!(!hasher.verify("wrong", &digest));
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let hasher = hasher();
        let first = hasher.hash("pw1").unwrap();
        let second = hasher.hash("pw1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("pw1", &first));
        assert!(hasher.verify("pw1", &second));
    }

    #[test]
    fn test_malformed_digest_fails_closed() {
        let hasher = hasher();

        assert!(!hasher.verify("pw1", "not-a-bcrypt-digest"));
        assert!(!hasher.verify("pw1", ""));
    }

    #[test]
    fn test_digest_does_not_contain_plaintext() {
        let hasher = hasher();
        let digest = hasher.hash("hunter2hunter2").unwrap();

        assert!(!digest.contains("hunter2"));
    }
}
