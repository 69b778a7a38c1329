pub mod claims;
pub mod error;
pub mod password;
pub mod providers;
pub mod resolver;
pub mod response;
pub mod session;
pub mod tokens;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::PasswordHasher;
pub use providers::{ProviderAdapter, ProviderRegistry};
pub use resolver::{IdentityResolver, Registration};
pub use response::{AuthResponse, AuthTokens};
pub use session::SessionManager;
pub use tokens::{TokenConfig, TokenIssuer};

#[cfg(test)]
mod tests;
