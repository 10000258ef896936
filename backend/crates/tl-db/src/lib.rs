pub mod error;
pub mod password;
pub mod pool;
pub mod repositories;

pub use error::{DbError, Result};
pub use pool::{create_pool, run_migrations};
pub use repositories::post_repository::PostRepository;
pub use repositories::user_repository::UserRepository;
