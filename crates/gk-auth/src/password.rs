//! Credential verifier over salted bcrypt hashes.
//!
//! Used for both password storage and refresh-token-at-rest storage.
//! bcrypt is CPU-bound at the configured work factor, so both operations
//! run on the blocking thread pool.

use crate::{AuthError, Result as AuthErrorResult};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// One-way transform at the configured work factor.
    pub async fn hash(&self, secret: &str) -> AuthErrorResult<String> {
        let cost = self.cost;
        let secret = secret.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::hash(secret, cost))
            .await
            .map_err(|e| AuthError::hash(e.to_string()))?
            .map_err(|e| AuthError::hash(e.to_string()))
    }

    /// Compare a plaintext secret against a stored hash.
    /// Returns false on a malformed hash instead of erroring.
    pub async fn verify(&self, secret: &str, hash: &str) -> bool {
        let secret = secret.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(secret, &hash).unwrap_or(false))
            .await
            .unwrap_or(false)
    }
}
