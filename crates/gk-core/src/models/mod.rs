pub mod authenticated_user;
pub mod oauth_profile;
pub mod oauth_provider;
pub mod user;
pub mod user_role;
