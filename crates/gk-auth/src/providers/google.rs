//! Google profile adapter.
//!
//! Expects the passport-style profile shape: `id`, `emails[0].value`,
//! `name.givenName` / `name.familyName`, `photos[0].value`.

use crate::providers::{ProviderAdapter, pointer_str};
use crate::{AuthError, Result as AuthErrorResult};

use gk_core::{OAuthProfile, OAuthProvider};

pub struct GoogleAdapter;

impl ProviderAdapter for GoogleAdapter {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Google
    }

    fn extract_profile(&self, raw: &serde_json::Value) -> AuthErrorResult<OAuthProfile> {
        let Some(provider_id) = pointer_str(raw, "/id") else {
            return Err(AuthError::invalid_provider_payload(
                "google profile is missing its id",
            ));
        };

        Ok(OAuthProfile {
            provider_id,
            email: pointer_str(raw, "/emails/0/value"),
            first_name: pointer_str(raw, "/name/givenName"),
            last_name: pointer_str(raw, "/name/familyName"),
            avatar_url: pointer_str(raw, "/photos/0/value"),
        })
    }
}
