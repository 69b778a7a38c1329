//! Snapchat profile adapter.
//!
//! Snapchat exposes a single `displayName` rather than split name fields;
//! the adapter splits it on the first space. The bitmoji avatar lives in
//! the raw `_json` payload.

use crate::providers::{ProviderAdapter, pointer_str};
use crate::{AuthError, Result as AuthErrorResult};

use gk_core::{OAuthProfile, OAuthProvider};

pub struct SnapchatAdapter;

impl ProviderAdapter for SnapchatAdapter {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Snapchat
    }

    fn extract_profile(&self, raw: &serde_json::Value) -> AuthErrorResult<OAuthProfile> {
        let Some(provider_id) = pointer_str(raw, "/id") else {
            return Err(AuthError::invalid_provider_payload(
                "snapchat profile is missing its id",
            ));
        };

        let display_name = pointer_str(raw, "/displayName")
            .or_else(|| pointer_str(raw, "/_json/data/displayName"));
        let (first_name, last_name) = split_display_name(display_name.as_deref());

        Ok(OAuthProfile {
            provider_id,
            email: pointer_str(raw, "/emails/0/value"),
            first_name,
            last_name,
            avatar_url: pointer_str(raw, "/photos/0/value")
                .or_else(|| pointer_str(raw, "/_json/data/bitmoji/avatar")),
        })
    }
}

fn split_display_name(display_name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(name) = display_name else {
        return (None, None);
    };

    match name.split_once(' ') {
        Some((first, rest)) => (Some(first.to_string()), Some(rest.to_string())),
        None => (Some(name.to_string()), None),
    }
}
