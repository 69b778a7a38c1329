//! Integration tests for identity resolution against a real store
mod common;

use common::test_resolver;

use gk_auth::{AuthError, Registration};
use gk_core::{OAuthProfile, OAuthProvider, User, UserRole};
use gk_db::UserRepository;

use uuid::Uuid;

fn registration(email: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: "hunter2hunter2".to_string(),
        first_name: Some("Dana".to_string()),
        last_name: None,
        avatar_url: None,
    }
}

fn google_profile(provider_id: &str, email: Option<&str>) -> OAuthProfile {
    OAuthProfile {
        provider_id: provider_id.to_string(),
        email: email.map(str::to_string),
        first_name: Some("Dana".to_string()),
        last_name: Some("Scully".to_string()),
        avatar_url: Some("https://img.example/dana.png".to_string()),
    }
}

async fn deactivate(repo: &UserRepository, id: Uuid) {
    sqlx::query("UPDATE users SET is_active = 0 WHERE id = ?1")
        .bind(id.to_string())
        .execute(repo.pool())
        .await
        .unwrap();
}

#[tokio::test]
async fn register_creates_an_active_student_account() {
    let (resolver, repo) = test_resolver().await;

    let view = resolver
        .register_local(&registration("dana@example.com"))
        .await
        .unwrap();

    assert_eq!(view.email.as_deref(), Some("dana@example.com"));
    assert_eq!(view.role, UserRole::Student);
    assert!(view.is_active);

    let stored = repo.find_by_id(view.id).await.unwrap().unwrap();
    assert!(stored.has_local_credential());
    assert!(stored.last_login_at.is_some());
}

#[tokio::test]
async fn register_rejects_an_email_that_already_has_a_credential() {
    let (resolver, _repo) = test_resolver().await;
    resolver
        .register_local(&registration("dana@example.com"))
        .await
        .unwrap();

    let result = resolver
        .register_local(&registration("Dana@Example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AuthError::EmailAlreadyRegistered { .. })
    ));
}

#[tokio::test]
async fn register_attaches_a_password_to_an_oauth_only_account() {
    let (resolver, repo) = test_resolver().await;
    let mut existing = User::new(Some("dana@example.com".to_string()));
    existing.google_id = Some("google-1".to_string());
    repo.create(&existing).await.unwrap();

    let view = resolver
        .register_local(&registration("dana@example.com"))
        .await
        .unwrap();

    // Same record, now with a local credential alongside the provider link.
    assert_eq!(view.id, existing.id);
    let stored = repo.find_by_id(existing.id).await.unwrap().unwrap();
    assert!(stored.has_local_credential());
    assert_eq!(stored.google_id.as_deref(), Some("google-1"));
}

#[tokio::test]
async fn login_succeeds_with_the_registered_credential() {
    let (resolver, _repo) = test_resolver().await;
    resolver
        .register_local(&registration("dana@example.com"))
        .await
        .unwrap();

    let view = resolver
        .resolve_local("Dana@Example.com", "hunter2hunter2")
        .await
        .unwrap();

    assert_eq!(view.email.as_deref(), Some("dana@example.com"));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (resolver, _repo) = test_resolver().await;
    resolver
        .register_local(&registration("dana@example.com"))
        .await
        .unwrap();

    let wrong_password = resolver
        .resolve_local("dana@example.com", "wrong-password")
        .await;
    let unknown_email = resolver
        .resolve_local("nobody@example.com", "hunter2hunter2")
        .await;

    assert!(matches!(
        wrong_password,
        Err(AuthError::InvalidCredentials { .. })
    ));
    assert!(matches!(
        unknown_email,
        Err(AuthError::InvalidCredentials { .. })
    ));
}

#[tokio::test]
async fn login_rejects_an_inactive_account_after_the_credential_matches() {
    let (resolver, repo) = test_resolver().await;
    let view = resolver
        .register_local(&registration("dana@example.com"))
        .await
        .unwrap();
    deactivate(&repo, view.id).await;

    let result = resolver
        .resolve_local("dana@example.com", "hunter2hunter2")
        .await;

    assert!(matches!(result, Err(AuthError::InactiveAccount { .. })));
}

#[tokio::test]
async fn oauth_first_contact_creates_a_linked_account() {
    let (resolver, repo) = test_resolver().await;

    let view = resolver
        .resolve_oauth(
            OAuthProvider::Google,
            &google_profile("google-1", Some("dana@example.com")),
        )
        .await
        .unwrap();

    let stored = repo.find_by_id(view.id).await.unwrap().unwrap();
    assert_eq!(stored.google_id.as_deref(), Some("google-1"));
    assert_eq!(stored.email.as_deref(), Some("dana@example.com"));
    assert_eq!(stored.first_name.as_deref(), Some("Dana"));
    assert!(!stored.has_local_credential());
    assert!(stored.last_login_at.is_some());
}

#[tokio::test]
async fn oauth_provider_hit_fills_blanks_without_overwriting() {
    let (resolver, repo) = test_resolver().await;
    let mut existing = User::new(Some("dana@example.com".to_string()));
    existing.google_id = Some("google-1".to_string());
    existing.first_name = Some("D.".to_string());
    repo.create(&existing).await.unwrap();

    let view = resolver
        .resolve_oauth(
            OAuthProvider::Google,
            &google_profile("google-1", Some("other@example.com")),
        )
        .await
        .unwrap();

    assert_eq!(view.id, existing.id);
    let stored = repo.find_by_id(existing.id).await.unwrap().unwrap();
    // Populated fields stand; only blanks take the incoming values.
    assert_eq!(stored.email.as_deref(), Some("dana@example.com"));
    assert_eq!(stored.first_name.as_deref(), Some("D."));
    assert_eq!(stored.last_name.as_deref(), Some("Scully"));
    assert_eq!(
        stored.avatar_url.as_deref(),
        Some("https://img.example/dana.png")
    );
}

#[tokio::test]
async fn oauth_email_match_links_the_provider_to_the_existing_account() {
    let (resolver, repo) = test_resolver().await;
    let view = resolver
        .register_local(&registration("dana@example.com"))
        .await
        .unwrap();

    let resolved = resolver
        .resolve_oauth(
            OAuthProvider::Google,
            &google_profile("google-1", Some("Dana@Example.com")),
        )
        .await
        .unwrap();

    assert_eq!(resolved.id, view.id);
    let stored = repo.find_by_id(view.id).await.unwrap().unwrap();
    assert_eq!(stored.google_id.as_deref(), Some("google-1"));
    assert!(stored.has_local_credential());

    // A later provider-only assertion (no email) still resolves here.
    let provider_only = resolver
        .resolve_oauth(OAuthProvider::Google, &google_profile("google-1", None))
        .await
        .unwrap();
    assert_eq!(provider_only.id, view.id);
}

#[tokio::test]
async fn oauth_rejects_an_inactive_account() {
    let (resolver, repo) = test_resolver().await;
    let first = resolver
        .resolve_oauth(OAuthProvider::Google, &google_profile("google-1", None))
        .await
        .unwrap();
    deactivate(&repo, first.id).await;

    let result = resolver
        .resolve_oauth(OAuthProvider::Google, &google_profile("google-1", None))
        .await;

    assert!(matches!(result, Err(AuthError::InactiveAccount { .. })));
}

#[tokio::test]
async fn oauth_without_an_email_never_collides_with_other_accounts() {
    let (resolver, _repo) = test_resolver().await;
    let first = resolver
        .resolve_oauth(OAuthProvider::Google, &google_profile("google-1", None))
        .await
        .unwrap();
    let second = resolver
        .resolve_oauth(OAuthProvider::Snapchat, &google_profile("snap-1", None))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn concurrent_registrations_for_one_email_leave_a_single_account() {
    let (resolver, repo) = test_resolver().await;

    // Both lookups run before either insert; the loser's create hits the
    // unique email index and must come back as a duplicate, not a 500.
    let reg_a = registration("dana@example.com");
    let reg_b = registration("dana@example.com");
    let (a, b) = tokio::join!(
        resolver.register_local(&reg_a),
        resolver.register_local(&reg_b),
    );

    let (winner, loser) = match (a, b) {
        (Ok(view), other) => (view, other),
        (other, Ok(view)) => (view, other),
        (a, b) => panic!("both registrations failed: {a:?} / {b:?}"),
    };
    assert!(matches!(
        loser,
        Err(AuthError::EmailAlreadyRegistered { .. })
    ));

    let stored = repo.find_by_email("dana@example.com").await.unwrap();
    assert_eq!(stored.unwrap().id, winner.id);
}

#[tokio::test]
async fn concurrent_oauth_resolutions_converge_on_one_account() {
    let (resolver, repo) = test_resolver().await;
    let profile = google_profile("google-1", Some("dana@example.com"));

    // Whichever create loses the race adopts the winner's record.
    let (a, b) = tokio::join!(
        resolver.resolve_oauth(OAuthProvider::Google, &profile),
        resolver.resolve_oauth(OAuthProvider::Google, &profile),
    );

    let a = a.unwrap();
    let b = b.unwrap();
    assert_eq!(a.id, b.id);

    let stored = repo
        .find_by_provider(OAuthProvider::Google, "google-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, a.id);
}
