use gk_auth::{
    IdentityResolver, PasswordHasher, ProviderRegistry, SessionManager, TokenConfig, TokenIssuer,
};
use gk_db::UserRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, cloned per request
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub resolver: IdentityResolver,
    pub session: SessionManager,
    pub tokens: TokenIssuer,
    pub providers: Arc<ProviderRegistry>,
}

impl AppState {
    /// Wire the auth engine from its configuration values.
    pub fn new(pool: SqlitePool, auth: &gk_config::AuthConfig) -> Self {
        let users = UserRepository::new(pool.clone());
        let passwords = PasswordHasher::new(auth.bcrypt_cost);
        let tokens = TokenIssuer::new(&TokenConfig {
            access_secret: auth.access_secret.clone(),
            access_ttl: auth.access_ttl.clone(),
            refresh_secret: auth.refresh_secret.clone(),
            refresh_ttl: auth.refresh_ttl.clone(),
        });

        Self {
            pool,
            users: users.clone(),
            resolver: IdentityResolver::new(users.clone(), passwords),
            session: SessionManager::new(users, passwords, tokens.clone()),
            tokens,
            providers: Arc::new(ProviderRegistry::with_defaults()),
        }
    }
}
