//! Session manager - issues token pairs, rotates refresh tokens, ends
//! sessions.
//!
//! The refresh token is stored hashed, one slot per account: every
//! successful refresh rotates the slot, invalidating the previous token.

use crate::{AuthError, AuthResponse, AuthTokens, PasswordHasher, Result as AuthErrorResult, TokenIssuer};

use gk_core::AuthenticatedUser;
use gk_db::UserRepository;

use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Clone)]
pub struct SessionManager {
    users: UserRepository,
    passwords: PasswordHasher,
    tokens: TokenIssuer,
}

impl SessionManager {
    pub fn new(users: UserRepository, passwords: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Issue a fresh token pair for a resolved identity and persist the
    /// hashed refresh token into the account's single slot.
    pub async fn login(&self, user: &AuthenticatedUser) -> AuthErrorResult<AuthResponse> {
        let (access_token, refresh_token) = tokio::try_join!(
            async { self.tokens.issue_access(user) },
            async { self.tokens.issue_refresh(user) },
        )?;

        self.persist_refresh_token(user.id, &refresh_token).await?;

        Ok(AuthResponse {
            user: user.clone(),
            tokens: AuthTokens {
                access_token,
                access_token_expires_in: self.tokens.access_ttl().as_secs(),
                refresh_token,
                refresh_token_expires_in: self.tokens.refresh_ttl().as_secs(),
            },
        })
    }

    /// Rotate a refresh token: verify the presented token, compare it to
    /// the stored slot, then issue and persist a fresh pair.
    ///
    /// Failures stay distinguishable on this path. The bearer already
    /// holds a signed token, so hiding which check failed buys nothing.
    pub async fn refresh(&self, refresh_token: &str) -> AuthErrorResult<AuthResponse> {
        let claims = self.tokens.verify_refresh(refresh_token)?;
        let user_id = claims.subject_id()?;

        let Some(user) = self.users.find_by_id(user_id).await? else {
            return Err(AuthError::token_not_found());
        };
        let Some(stored_hash) = &user.refresh_token_hash else {
            return Err(AuthError::token_not_found());
        };

        if !self
            .passwords
            .verify(&digest_token(refresh_token), stored_hash)
            .await
        {
            return Err(AuthError::invalid_token());
        }

        if let Some(expires_at) = user.refresh_token_expires_at {
            if expires_at <= Utc::now() {
                return Err(AuthError::token_expired());
            }
        }

        if !user.is_active {
            return Err(AuthError::inactive_account());
        }

        self.login(&AuthenticatedUser::from(&user)).await
    }

    /// End a session by clearing the refresh slot. Idempotent.
    pub async fn logout(&self, user_id: Uuid) -> AuthErrorResult<()> {
        self.users.clear_refresh_token(user_id).await?;
        Ok(())
    }

    /// Hash the refresh token and store it with its expiry. The expiry is
    /// read back out of the signed token so the stored deadline matches
    /// the claim exactly.
    async fn persist_refresh_token(&self, user_id: Uuid, token: &str) -> AuthErrorResult<()> {
        let hash = self.passwords.hash(&digest_token(token)).await?;
        let expires_at = TokenIssuer::peek_expiry(token).unwrap_or_else(|| {
            Utc::now() + Duration::seconds(self.tokens.refresh_ttl().as_secs() as i64)
        });

        self.users
            .set_refresh_token(user_id, &hash, expires_at)
            .await?;

        Ok(())
    }
}

/// bcrypt reads only the first 72 bytes of its input, and two refresh
/// JWTs for the same account share a header-plus-claims prefix well past
/// that. The token is reduced to a fixed 64-byte digest first so the
/// stored hash matches exactly one token.
fn digest_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
