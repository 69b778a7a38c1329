pub mod auth;
pub mod login_request;
pub mod me_response;
pub mod refresh_request;
pub mod register_request;
