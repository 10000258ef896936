pub mod app_state;
pub mod error;
pub mod handlers;
pub mod health;
pub mod html;
pub mod logger;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use app_state::AppState;
pub use error::{PageError, Result as ServerErrorResult, ServerError};
pub use html::html_renderer::HtmlRenderer;
pub use routes::build_router;
pub use session::{CurrentUser, SessionStore};
