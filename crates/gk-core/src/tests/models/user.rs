use crate::models::user::normalize_email;
use crate::{AuthenticatedUser, User, UserRole};

#[test]
fn test_new_user_defaults() {
    let user = User::new(Some("User@Example.com".to_string()));

    assert_eq!(user.email.as_deref(), Some("user@example.com"));
    assert_eq!(user.role, UserRole::Student);
    assert!(user.is_active);
    assert!(user.password_hash.is_none());
    assert!(user.refresh_token_hash.is_none());
    assert!(user.refresh_token_expires_at.is_none());
    assert!(!user.has_local_credential());
}

#[test]
fn test_normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
}

#[test]
fn test_authenticated_user_view_omits_credential_state() {
    let mut user = User::new(Some("a@b.com".to_string()));
    user.password_hash = Some("$2b$12$hash".to_string());
    user.first_name = Some("Dana".to_string());

    let view = AuthenticatedUser::from(&user);

    assert_eq!(view.id, user.id);
    assert_eq!(view.email.as_deref(), Some("a@b.com"));
    assert_eq!(view.first_name.as_deref(), Some("Dana"));
    assert_eq!(view.role, UserRole::Student);
    assert!(view.is_active);

    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("refreshTokenHash").is_none());
}
