mod oauth_provider;
mod user;
mod user_role;
