use crate::{AuthError, Result as AuthErrorResult};

use gk_core::{AuthenticatedUser, Ttl, UserRole};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in both access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: UserRole,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Token id; keeps two tokens issued in the same second distinct,
    /// which rotation depends on
    pub jti: String,
}

impl Claims {
    pub fn new(user: &AuthenticatedUser, ttl: &Ttl) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp: now + ttl.as_secs() as i64,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parse the subject claim back into a user id.
    /// A malformed subject means the token was not issued by us.
    #[track_caller]
    pub fn subject_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::invalid_token())
    }
}
