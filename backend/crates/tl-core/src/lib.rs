pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::post_event::PostEvent;
pub use models::post_form::{FieldErrors, MAX_POST_LENGTH, MIN_POST_LENGTH, PostForm};
pub use models::post_id::PostId;
