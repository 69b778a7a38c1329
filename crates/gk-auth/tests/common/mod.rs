#![allow(dead_code)]

//! Test infrastructure for the resolver and session tests

use gk_auth::{IdentityResolver, PasswordHasher, SessionManager, TokenConfig, TokenIssuer};
use gk_core::Ttl;
use gk_db::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../gk-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

// Minimum bcrypt work factor keeps these tests fast.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(4)
}

pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(&TokenConfig {
        access_secret: "access-secret-for-tests-at-least-32b".to_string(),
        access_ttl: Ttl::from("1h"),
        refresh_secret: "refresh-secret-for-tests-at-least-32".to_string(),
        refresh_ttl: Ttl::from("7d"),
    })
}

pub async fn test_resolver() -> (IdentityResolver, UserRepository) {
    let repo = UserRepository::new(create_test_pool().await);
    (
        IdentityResolver::new(repo.clone(), test_hasher()),
        repo,
    )
}

pub async fn test_session() -> (SessionManager, IdentityResolver, UserRepository) {
    let repo = UserRepository::new(create_test_pool().await);
    let session = SessionManager::new(repo.clone(), test_hasher(), test_issuer());
    let resolver = IdentityResolver::new(repo.clone(), test_hasher());
    (session, resolver, repo)
}
