use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_SECRET, DEFAULT_ACCESS_TTL, DEFAULT_BCRYPT_COST,
    DEFAULT_REFRESH_SECRET, DEFAULT_REFRESH_TTL, MAX_BCRYPT_COST, MIN_BCRYPT_COST,
};

use gk_core::Ttl;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub access_secret: String,
    /// Access token lifetime, seconds or shorthand ("15m", "1h")
    pub access_ttl: Ttl,
    pub refresh_secret: String,
    /// Refresh token lifetime, seconds or shorthand ("7d")
    pub refresh_ttl: Ttl,
    /// bcrypt work factor for passwords and refresh tokens at rest
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEFAULT_ACCESS_SECRET),
            access_ttl: Ttl::from(DEFAULT_ACCESS_TTL),
            refresh_secret: String::from(DEFAULT_REFRESH_SECRET),
            refresh_ttl: Ttl::from(DEFAULT_REFRESH_TTL),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::auth("auth.access_secret must not be empty"));
        }

        if self.refresh_secret.is_empty() {
            return Err(ConfigError::auth("auth.refresh_secret must not be empty"));
        }

        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::auth(
                "auth.access_secret and auth.refresh_secret must differ",
            ));
        }

        if self.bcrypt_cost < MIN_BCRYPT_COST || self.bcrypt_cost > MAX_BCRYPT_COST {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }

    /// True when either secret still carries its development placeholder.
    pub fn uses_default_secrets(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }
}
