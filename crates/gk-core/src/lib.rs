pub mod error;
pub mod models;
pub mod ttl;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::authenticated_user::AuthenticatedUser;
pub use models::oauth_profile::OAuthProfile;
pub use models::oauth_provider::OAuthProvider;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use ttl::Ttl;

#[cfg(test)]
mod tests;
