pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, me, oauth_callback, refresh, register},
        login_request::LoginRequest,
        me_response::MeResponse,
        refresh_request::RefreshRequest,
        register_request::RegisterRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
