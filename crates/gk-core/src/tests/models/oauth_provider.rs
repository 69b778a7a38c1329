use crate::OAuthProvider;

use std::str::FromStr;

#[test]
fn test_oauth_provider_round_trip() {
    assert_eq!(OAuthProvider::Google.as_str(), "google");
    assert_eq!(OAuthProvider::Snapchat.as_str(), "snapchat");
    assert_eq!(
        OAuthProvider::from_str("google").unwrap(),
        OAuthProvider::Google
    );
    assert_eq!(
        OAuthProvider::from_str("snapchat").unwrap(),
        OAuthProvider::Snapchat
    );
}

#[test]
fn test_oauth_provider_unknown_is_rejected() {
    assert!(OAuthProvider::from_str("github").is_err());
}
