//! Authentication REST API handlers
//!
//! Register, login, OAuth callback, token refresh, logout, and the
//! current-user endpoint.

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CurrentUser, LoginRequest, MeResponse, RefreshRequest, RegisterRequest,
};

use gk_auth::{AuthResponse, Registration};
use gk_core::OAuthProvider;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// POST /api/v1/auth/register
///
/// Create a local email/password account, or attach a password to an
/// OAuth-only account with the same email.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    let registration = Registration {
        email: request.email,
        password: request.password,
        first_name: request.first_name,
        last_name: request.last_name,
        avatar_url: request.avatar_url,
    };

    let user = state.resolver.register_local(&registration).await?;
    let response = state.session.login(&user).await?;

    log::info!("Registered account {}", user.id);

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Verify a local credential and issue a token pair.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .resolver
        .resolve_local(&request.email, &request.password)
        .await?;
    let response = state.session.login(&user).await?;

    log::info!("Login for account {}", user.id);

    Ok(Json(response))
}

/// POST /api/v1/auth/oauth/{provider}
///
/// Resolve a provider profile payload to an account and issue a token
/// pair. The payload shape is provider-specific.
pub async fn oauth_callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> ApiResult<Json<AuthResponse>> {
    let provider = OAuthProvider::from_str(&provider)
        .map_err(|_| ApiError::bad_request(format!("Unknown provider: {}", provider)))?;

    let adapter = state
        .providers
        .get(provider)
        .ok_or_else(|| ApiError::bad_request(format!("Unknown provider: {}", provider)))?;

    let profile = adapter.extract_profile(&payload)?;
    let user = state.resolver.resolve_oauth(provider, &profile).await?;
    let response = state.session.login(&user).await?;

    log::info!("OAuth login via {} for account {}", provider, user.id);

    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Rotate a refresh token into a fresh token pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = state.session.refresh(&request.refresh_token).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Clear the caller's refresh token slot.
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<StatusCode> {
    state.session.logout(user.id).await?;

    log::info!("Logout for account {}", user.id);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// Return the account behind the presented access token.
pub async fn me(CurrentUser(user): CurrentUser) -> ApiResult<Json<MeResponse>> {
    Ok(Json(MeResponse { user }))
}

fn validate_email(email: &str) -> ApiResult<()> {
    let trimmed = email.trim();

    let valid = trimmed.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });

    if !valid {
        return Err(ApiError::validation(
            format!("Invalid email address: {}", email),
            Some("email"),
        ));
    }

    Ok(())
}

fn validate_password(password: &str) -> ApiResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            Some("password"),
        ));
    }

    Ok(())
}
