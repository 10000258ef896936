use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// Startup and wiring failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tl_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] tl_db::DbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

/// Failures surfaced to a browser
#[derive(Error, Debug)]
pub enum PageError {
    /// Storage cannot serve requests right now (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl PageError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, message) = match self {
            PageError::Unavailable { message, .. } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        (
            status,
            Html(format!("<p class=\"error\">{}</p>", crate::html::escape(&message))),
        )
            .into_response()
    }
}
