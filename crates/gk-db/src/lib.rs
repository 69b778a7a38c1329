pub mod error;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use pool::connect;
pub use repositories::user_repository::{UserRepository, UserUpdate};
