//! User repository - the narrow store interface the auth core reads and
//! writes through.
//!
//! All mutations are explicit update sets; nothing is saved in place from a
//! previously fetched record. The refresh-token slot (`refresh_token_hash` +
//! `refresh_token_expires_at`) is always written or cleared as a pair within
//! a single statement, so a rotation can never be observed half-applied.

use crate::{DbError, Result as DbErrorResult};

use gk_core::models::user::normalize_email;
use gk_core::{OAuthProvider, User, UserRole};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, password_hash, google_id, snapchat_id, \
     first_name, last_name, avatar_url, role, is_active, last_login_at, \
     refresh_token_hash, refresh_token_expires_at, created_at, updated_at";

/// Explicit field set for a profile update.
///
/// `Some` overwrites, `None` leaves the stored value untouched. Callers that
/// must only fill blanks decide that before building the update.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub snapchat_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let role = user.role.as_str();
        let last_login_at = user.last_login_at.map(|dt| dt.timestamp());
        let refresh_expires_at = user.refresh_token_expires_at.map(|dt| dt.timestamp());
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, google_id, snapchat_id,
                    first_name, last_name, avatar_url, role, is_active,
                    last_login_at, refresh_token_hash, refresh_token_expires_at,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.google_id)
        .bind(&user.snapchat_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.avatar_url)
        .bind(role)
        .bind(user.is_active)
        .bind(last_login_at)
        .bind(&user.refresh_token_hash)
        .bind(refresh_expires_at)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Lookup by email; the argument is normalized so lookups agree with
    /// the normalization applied at every write.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    pub async fn find_by_provider(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> DbErrorResult<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE {} = ?",
            USER_COLUMNS,
            provider_column(provider)
        );
        let row = sqlx::query(&sql)
            .bind(provider_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Apply an explicit update set. `None` fields keep their stored value.
    pub async fn update_profile(&self, id: Uuid, update: &UserUpdate) -> DbErrorResult<()> {
        let email = update.email.as_deref().map(normalize_email);
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                UPDATE users SET
                    email = COALESCE(?, email),
                    password_hash = COALESCE(?, password_hash),
                    google_id = COALESCE(?, google_id),
                    snapchat_id = COALESCE(?, snapchat_id),
                    first_name = COALESCE(?, first_name),
                    last_name = COALESCE(?, last_name),
                    avatar_url = COALESCE(?, avatar_url),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(email)
        .bind(&update.password_hash)
        .bind(&update.google_id)
        .bind(&update.snapchat_id)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.avatar_url)
        .bind(updated_at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Stamp the last-login timestamp.
    pub async fn record_login(&self, id: Uuid) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        sqlx::query("UPDATE users SET last_login_at = ?, updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(now)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Overwrite the refresh-token slot. Hash and expiry land in one UPDATE,
    /// which also invalidates whatever token was stored before (rotation).
    pub async fn set_refresh_token(
        &self,
        id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users SET
                    refresh_token_hash = ?,
                    refresh_token_expires_at = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(token_hash)
        .bind(expires_at.timestamp())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Clear the refresh-token slot. Clearing an already-empty slot is a
    /// no-op, not an error.
    pub async fn clear_refresh_token(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users SET
                    refresh_token_hash = NULL,
                    refresh_token_expires_at = NULL,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn provider_column(provider: OAuthProvider) -> &'static str {
    match provider {
        OAuthProvider::Google => "google_id",
        OAuthProvider::Snapchat => "snapchat_id",
    }
}

fn row_to_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let last_login_at: Option<i64> = row.try_get("last_login_at")?;
    let refresh_expires_at: Option<i64> = row.try_get("refresh_token_expires_at")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        google_id: row.try_get("google_id")?,
        snapchat_id: row.try_get("snapchat_id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        avatar_url: row.try_get("avatar_url")?,
        role: UserRole::from_str(&role).map_err(|e| DbError::Initialization {
            message: format!("Invalid role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        is_active: row.try_get("is_active")?,
        last_login_at: last_login_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        refresh_token_hash: row.try_get("refresh_token_hash")?,
        refresh_token_expires_at: refresh_expires_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
