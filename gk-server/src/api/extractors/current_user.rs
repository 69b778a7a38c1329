//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use gk_core::AuthenticatedUser;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts the authenticated user from a Bearer access token.
///
/// Verifies the token, loads the backing account, and rejects tokens
/// whose account has vanished or been deactivated since issuance.
pub struct CurrentUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(parts)
                .ok_or_else(|| ApiError::unauthorized("MISSING_TOKEN", "Missing access token."))?;

            let claims = state
                .tokens
                .verify_access(&token)
                .map_err(|_| ApiError::unauthorized("INVALID_TOKEN", "Invalid access token."))?;
            let user_id = claims
                .subject_id()
                .map_err(|_| ApiError::unauthorized("INVALID_TOKEN", "Invalid access token."))?;

            let user = state
                .users
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ApiError::unauthorized("INVALID_TOKEN", "Invalid access token."))?;

            if !user.is_active {
                return Err(ApiError::forbidden("Account is inactive."));
            }

            Ok(CurrentUser(AuthenticatedUser::from(&user)))
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
