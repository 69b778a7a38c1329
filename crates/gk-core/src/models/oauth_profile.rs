use serde::{Deserialize, Serialize};

/// Normalized profile extracted from a provider's raw response.
///
/// The transport-level redirect/callback mechanics live outside the core;
/// by the time a profile reaches the resolver it is already in this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthProfile {
    /// Stable identifier issued by the provider, linked to at most one user
    pub provider_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}
