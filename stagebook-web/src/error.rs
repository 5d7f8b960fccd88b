//! Error pages for stagebook-web
//!
//! Handlers return `Result<_, PageError>`. Lookup misses become the 404 page,
//! malformed requests the 400 page, and everything else the 500 page. Internal
//! details are logged, never rendered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::views;

#[derive(Debug, Error)]
pub enum PageError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Malformed request (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// stagebook-common error (500)
    #[error("Common error: {0}")]
    Common(stagebook_common::Error),
}

impl From<stagebook_common::Error> for PageError {
    fn from(err: stagebook_common::Error) -> Self {
        match err {
            stagebook_common::Error::NotFound(msg) => PageError::NotFound(msg),
            stagebook_common::Error::InvalidInput(msg) => PageError::BadRequest(msg),
            other => PageError::Common(other),
        }
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError::Common(stagebook_common::Error::Database(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PageError::NotFound(msg) => {
                warn!("404: {}", msg);
                (StatusCode::NOT_FOUND, views::errors::not_found())
            }
            PageError::BadRequest(msg) => {
                warn!("400: {}", msg);
                (StatusCode::BAD_REQUEST, views::errors::bad_request(msg))
            }
            PageError::Common(_) => {
                error!("500: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::errors::server_error(),
                )
            }
        };

        (status, body).into_response()
    }
}
