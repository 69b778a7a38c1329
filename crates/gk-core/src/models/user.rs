//! User entity - the single canonical identity record.
//!
//! One record may be reachable through several login paths: a local
//! email/password credential and/or one linked key per OAuth provider.
//! The refresh-token slot (`refresh_token_hash` + `refresh_token_expires_at`)
//! holds at most one live session; both fields are always written or
//! cleared together.

use crate::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Lower-cased at every write and lookup; unique when present
    pub email: Option<String>,
    /// Salted bcrypt hash; `None` means no local login configured
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub snapchat_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    /// Inactive accounts are rejected at every authentication entry point
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    /// bcrypt hash of the live refresh token, never the plaintext
    pub refresh_token_hash: Option<String>,
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a blank active user with the default role.
    /// The email is normalized here so uniqueness checks stay meaningful.
    pub fn new(email: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.map(|e| e.trim().to_lowercase()),
            password_hash: None,
            google_id: None,
            snapchat_id: None,
            first_name: None,
            last_name: None,
            avatar_url: None,
            role: UserRole::default(),
            is_active: true,
            last_login_at: None,
            refresh_token_hash: None,
            refresh_token_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a local email/password login is configured
    pub fn has_local_credential(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Normalize an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
