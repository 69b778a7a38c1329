use gk_core::AuthenticatedUser;

use serde::Serialize;

/// Current-user response
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: AuthenticatedUser,
}
