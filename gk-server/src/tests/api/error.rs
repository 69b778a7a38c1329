use crate::ApiError;

use gk_auth::AuthError;

use axum::http::StatusCode;
use axum::response::IntoResponse;

fn status_for(e: AuthError) -> StatusCode {
    ApiError::from(e).into_response().status()
}

#[test]
fn invalid_credentials_maps_to_401() {
    assert_eq!(
        status_for(AuthError::invalid_credentials()),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn token_errors_map_to_401() {
    assert_eq!(
        status_for(AuthError::invalid_token()),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        status_for(AuthError::token_not_found()),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        status_for(AuthError::token_expired()),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn inactive_account_maps_to_403() {
    assert_eq!(
        status_for(AuthError::inactive_account()),
        StatusCode::FORBIDDEN
    );
}

#[test]
fn email_already_registered_maps_to_409() {
    assert_eq!(
        status_for(AuthError::email_already_registered("a@b.com")),
        StatusCode::CONFLICT
    );
}

#[test]
fn provider_payload_errors_map_to_400() {
    assert_eq!(
        status_for(AuthError::invalid_provider_payload("missing id")),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn infrastructure_errors_map_to_500() {
    assert_eq!(
        status_for(AuthError::hash("thread pool gone")),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
