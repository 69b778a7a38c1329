use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
};

use gk_core::Ttl;

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for GK_CONFIG_DIR env var, else use ./.gk/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GK_CONFIG_DIR env var > ./.gk/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("GK_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".gk"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: access_ttl={}s, refresh_ttl={}s, bcrypt_cost={}",
            self.auth.access_ttl.as_secs(),
            self.auth.refresh_ttl.as_secs(),
            self.auth.bcrypt_cost
        );
        info!("  logging: {} (dir: {})", *self.logging.level, self.logging.dir);

        if self.auth.uses_default_secrets() {
            warn!("auth secrets are development placeholders; set GK_AUTH_ACCESS_SECRET and GK_AUTH_REFRESH_SECRET");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GK_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GK_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("GK_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_string("GK_AUTH_ACCESS_SECRET", &mut self.auth.access_secret);
        Self::apply_env_ttl("GK_AUTH_ACCESS_TTL", &mut self.auth.access_ttl);
        Self::apply_env_string("GK_AUTH_REFRESH_SECRET", &mut self.auth.refresh_secret);
        Self::apply_env_ttl("GK_AUTH_REFRESH_TTL", &mut self.auth.refresh_ttl);
        Self::apply_env_parse("GK_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);

        // Logging
        Self::apply_env_parse("GK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("GK_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("GK_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("GK_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Ttl values
    fn apply_env_ttl(var_name: &str, target: &mut Ttl) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Ttl::from(val.as_str());
        }
    }
}
