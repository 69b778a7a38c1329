//! OAuth provider adapters.
//!
//! Each adapter normalizes one provider's profile payload into the
//! provider-neutral [`OAuthProfile`]. The registry owns one adapter per
//! supported provider.

pub mod google;
pub mod snapchat;

pub use google::GoogleAdapter;
pub use snapchat::SnapchatAdapter;

use crate::Result as AuthErrorResult;

use gk_core::{OAuthProfile, OAuthProvider};

use std::collections::HashMap;

pub trait ProviderAdapter: Send + Sync {
    fn provider(&self) -> OAuthProvider;

    /// Extract a normalized profile from the provider's raw payload.
    /// A payload missing the provider key is rejected; everything else
    /// is optional.
    fn extract_profile(&self, raw: &serde_json::Value) -> AuthErrorResult<OAuthProfile>;
}

pub struct ProviderRegistry {
    adapters: HashMap<OAuthProvider, Box<dyn ProviderAdapter>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GoogleAdapter));
        registry.register(Box::new(SnapchatAdapter));
        registry
    }

    pub fn register(&mut self, adapter: Box<dyn ProviderAdapter>) {
        self.adapters.insert(adapter.provider(), adapter);
    }

    pub fn get(&self, provider: OAuthProvider) -> Option<&dyn ProviderAdapter> {
        self.adapters.get(&provider).map(|adapter| &**adapter)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// A non-empty string at the given JSON pointer, if present.
pub(crate) fn pointer_str(raw: &serde_json::Value, pointer: &str) -> Option<String> {
    raw.pointer(pointer)
        .and_then(|value| value.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
