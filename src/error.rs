//! Error types for the trivia API
//!
//! Every failure is reported to clients through the same JSON envelope:
//! `{"success": false, "error": <status code>, "message": <text>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;

// == Trivia Error Enum ==
/// Unified error type for the trivia API.
#[derive(Error, Debug)]
pub enum TriviaError {
    /// Malformed or missing input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Well-formed input that cannot be processed
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Unexpected store or runtime fault
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::NotFound(_) => StatusCode::NOT_FOUND,
            TriviaError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message. Details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            TriviaError::BadRequest(_) => "Bad request",
            TriviaError::NotFound(_) => "Not found",
            TriviaError::Unprocessable(_) => "Unable to process request",
            TriviaError::Internal(_) => "Internal server error",
        }
    }
}

impl From<rusqlite::Error> for TriviaError {
    fn from(err: rusqlite::Error) -> Self {
        TriviaError::Internal(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let body = Json(ErrorResponse::new(status.as_u16(), self.public_message()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the trivia API.
pub type Result<T> = std::result::Result<T, TriviaError>;
