//! Token issuer/verifier for the two bearer-token classes.
//!
//! Access and refresh tokens are signed with independent secrets and
//! lifetimes, so a compromised refresh secret cannot forge access tokens
//! and vice versa. Secrets and lifetimes arrive as an explicit config
//! struct built once at startup; nothing here reads ambient global state.

use crate::{AuthError, Claims, Result as AuthErrorResult};

use gk_core::{AuthenticatedUser, ErrorLocation, Ttl};

use std::panic::Location;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Values the token engine consumes; mechanism for loading them lives
/// in the config crate.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub access_secret: String,
    pub access_ttl: Ttl,
    pub refresh_secret: String,
    pub refresh_ttl: Ttl,
}

#[derive(Clone)]
pub struct TokenIssuer {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Ttl,
    refresh_ttl: Ttl,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_ttl: config.access_ttl.clone(),
            refresh_ttl: config.refresh_ttl.clone(),
            validation,
        }
    }

    pub fn access_ttl(&self) -> &Ttl {
        &self.access_ttl
    }

    pub fn refresh_ttl(&self) -> &Ttl {
        &self.refresh_ttl
    }

    #[track_caller]
    pub fn issue_access(&self, user: &AuthenticatedUser) -> AuthErrorResult<String> {
        self.issue(user, &self.access_encoding, &self.access_ttl)
    }

    #[track_caller]
    pub fn issue_refresh(&self, user: &AuthenticatedUser) -> AuthErrorResult<String> {
        self.issue(user, &self.refresh_encoding, &self.refresh_ttl)
    }

    #[track_caller]
    fn issue(
        &self,
        user: &AuthenticatedUser,
        key: &EncodingKey,
        ttl: &Ttl,
    ) -> AuthErrorResult<String> {
        let claims = Claims::new(user, ttl);

        encode(&Header::new(Algorithm::HS256), &claims, key).map_err(|source| AuthError::Jwt {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn verify_access(&self, token: &str) -> AuthErrorResult<Claims> {
        self.verify(token, &self.access_decoding)
    }

    #[track_caller]
    pub fn verify_refresh(&self, token: &str) -> AuthErrorResult<Claims> {
        self.verify(token, &self.refresh_decoding)
    }

    /// Verify signature and expiry. The caller-visible failure is a single
    /// generic kind; the log line keeps the distinction for operators.
    #[track_caller]
    fn verify(&self, token: &str, key: &DecodingKey) -> AuthErrorResult<Claims> {
        decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => log::debug!("Token rejected: expired"),
                    _ => log::debug!("Token rejected: {}", e),
                }
                AuthError::invalid_token()
            })
    }

    /// Extract the expiry claim without verifying the signature.
    ///
    /// Bookkeeping only (the stored copy of a refresh token's expiry);
    /// never an input to an authorization decision.
    pub fn peek_expiry(token: &str) -> Option<DateTime<Utc>> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;

        let decoded = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;

        DateTime::from_timestamp(decoded.claims.exp, 0)
    }
}
