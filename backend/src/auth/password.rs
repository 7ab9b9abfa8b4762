//! Password hashing using bcrypt
//!
//! Digests are self-describing: the salt and cost are embedded in the
//! output, so verification needs nothing beyond the digest itself.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. The `_async` variants run the work
//! on the blocking thread pool so it never stalls the async runtime.

use anyhow::Result;

/// bcrypt work factor. Stored digests embed the cost they were created
/// with, so raising this only affects new registrations.
const HASH_COST: u32 = 10;

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with a freshly generated salt (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, HASH_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored digest (blocking operation)
    ///
    /// The comparison is constant-time. A digest that cannot be parsed
    /// verifies as `false`; the caller cannot distinguish it from a wrong
    /// password.
    pub fn verify(password: &str, digest: &str) -> bool {
        bcrypt::verify(password, digest).unwrap_or(false)
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, digest: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &digest))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "pw123";
        let digest = PasswordService::hash(password).unwrap();

        assert!(PasswordService::verify(password, &digest));
        assert!(!PasswordService::verify("wrong_password", &digest));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "pw123";
        let first = PasswordService::hash(password).unwrap();
        let second = PasswordService::hash(password).unwrap();

        // Salts are random, so the digests differ
        assert_ne!(first, second);

        // But both verify
        assert!(PasswordService::verify(password, &first));
        assert!(PasswordService::verify(password, &second));
    }

    #[test]
    fn test_digest_embeds_cost() {
        let digest = PasswordService::hash("pw123").unwrap();
        assert!(digest.starts_with("$2b$10$"));
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        assert!(!PasswordService::verify("pw123", "not-a-bcrypt-digest"));
        assert!(!PasswordService::verify("pw123", ""));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = "pw123".to_string();
        let digest = PasswordService::hash_async(password.clone()).await.unwrap();

        assert!(PasswordService::verify_async(password, digest.clone())
            .await
            .unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), digest)
            .await
            .unwrap());
    }
}
