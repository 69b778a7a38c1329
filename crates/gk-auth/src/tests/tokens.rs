use crate::{AuthError, TokenConfig, TokenIssuer};

use gk_core::{AuthenticatedUser, Ttl, UserRole};

use chrono::Utc;
use uuid::Uuid;

fn test_config() -> TokenConfig {
    TokenConfig {
        access_secret: "access-secret-for-tests-at-least-32b".to_string(),
        access_ttl: Ttl::from("1h"),
        refresh_secret: "refresh-secret-for-tests-at-least-32".to_string(),
        refresh_ttl: Ttl::from("7d"),
    }
}

fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        email: Some("kit@example.com".to_string()),
        first_name: Some("Kit".to_string()),
        last_name: None,
        avatar_url: None,
        role: UserRole::Student,
        is_active: true,
    }
}

#[test]
fn given_an_access_token_when_verified_then_claims_round_trip() {
    let issuer = TokenIssuer::new(&test_config());
    let user = test_user();

    let token = issuer.issue_access(&user).unwrap();
    let claims = issuer.verify_access(&token).unwrap();

    assert_eq!(claims.subject_id().unwrap(), user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, UserRole::Student);
    assert!(claims.exp > claims.iat);
}

#[test]
fn given_a_refresh_token_when_verified_as_access_then_it_is_rejected() {
    let issuer = TokenIssuer::new(&test_config());
    let user = test_user();

    let refresh = issuer.issue_refresh(&user).unwrap();

    // Independent secrets: each class only verifies against its own key.
    let result = issuer.verify_access(&refresh);

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}

#[test]
fn given_an_access_token_when_verified_as_refresh_then_it_is_rejected() {
    let issuer = TokenIssuer::new(&test_config());
    let user = test_user();

    let access = issuer.issue_access(&user).unwrap();

    let result = issuer.verify_refresh(&access);

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}

#[test]
fn given_garbage_when_verified_then_it_is_rejected() {
    let issuer = TokenIssuer::new(&test_config());

    let result = issuer.verify_access("not.a.jwt");

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}

#[test]
fn given_a_token_from_another_issuer_when_verified_then_it_is_rejected() {
    let issuer = TokenIssuer::new(&test_config());
    let other = TokenIssuer::new(&TokenConfig {
        access_secret: "a-completely-different-access-secret".to_string(),
        ..test_config()
    });
    let user = test_user();

    let token = other.issue_access(&user).unwrap();

    let result = issuer.verify_access(&token);

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}

#[test]
fn given_a_refresh_token_when_expiry_is_peeked_then_it_matches_the_ttl() {
    let issuer = TokenIssuer::new(&test_config());
    let user = test_user();

    let token = issuer.issue_refresh(&user).unwrap();
    let expiry = TokenIssuer::peek_expiry(&token).unwrap();

    let expected = Utc::now() + chrono::Duration::days(7);
    let drift = (expiry - expected).num_seconds().abs();

    assert!(drift < 5, "expiry drifted {drift}s from the configured ttl");
}

#[test]
fn given_garbage_when_expiry_is_peeked_then_nothing_comes_back() {
    assert!(TokenIssuer::peek_expiry("not.a.jwt").is_none());
}
