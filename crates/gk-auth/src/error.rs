use gk_core::ErrorLocation;
use gk_db::DbError;

use std::panic::Location;

use thiserror::Error;

/// Authentication failure taxonomy.
///
/// The first six variants are terminal, caller-visible outcomes. The
/// remaining variants are infrastructure failures and must surface as
/// "the system is down", never as "you are not authorized".
#[derive(Error, Debug)]
pub enum AuthError {
    /// Wrong email/password combination or unknown email; the two cases
    /// are indistinguishable to the caller
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Account is inactive {location}")]
    InactiveAccount { location: ErrorLocation },

    #[error("Email is already registered: {email} {location}")]
    EmailAlreadyRegistered {
        email: String,
        location: ErrorLocation,
    },

    /// Refresh token failed signature/expiry verification, or did not
    /// match the stored hash
    #[error("Invalid refresh token {location}")]
    InvalidToken { location: ErrorLocation },

    /// No refresh session exists for the resolved identity
    #[error("Refresh token not found {location}")]
    TokenNotFound { location: ErrorLocation },

    /// Stored expiry elapsed (defense-in-depth next to the token's own
    /// embedded expiry)
    #[error("Refresh token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid provider payload: {message} {location}")]
    InvalidProviderPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Db {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Credential hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    Jwt {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn inactive_account() -> Self {
        Self::InactiveAccount {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_already_registered<S: Into<String>>(email: S) -> Self {
        Self::EmailAlreadyRegistered {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_token() -> Self {
        Self::InvalidToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token_not_found() -> Self {
        Self::TokenNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token_expired() -> Self {
        Self::TokenExpired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_provider_payload<S: Into<String>>(message: S) -> Self {
        Self::InvalidProviderPayload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hash<S: Into<String>>(message: S) -> Self {
        Self::Hash {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for failures that mean "the system is broken" rather than
    /// "the request was not authorized"
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Db { .. } | Self::Hash { .. } | Self::Jwt { .. })
    }

    /// True when the underlying store rejected a duplicate email or
    /// provider key
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Db { source, .. } if source.is_unique_violation())
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
