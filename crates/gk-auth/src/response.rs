use gk_core::AuthenticatedUser;

use serde::{Deserialize, Serialize};

/// Token pair returned by every successful authentication flow.
/// The `expires_in` fields echo the configured lifetimes in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub access_token_expires_in: u64,
    pub refresh_token: String,
    pub refresh_token_expires_in: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: AuthenticatedUser,
    pub tokens: AuthTokens,
}
