//! JSON error responses for the HTTP surface

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::NotegenError;

/// Message shown to callers for any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors surfaced to HTTP callers
#[derive(Debug)]
pub enum ApiError {
    /// Missing or empty required fields (400)
    BadRequest(String),

    /// Anything other than POST on the note route (405)
    MethodNotAllowed,

    /// Unexpected fault (500); the detail is logged, never returned
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl From<NotegenError> for ApiError {
    fn from(err: NotegenError) -> Self {
        match err {
            NotegenError::InvalidRequest(msg) => Self::BadRequest(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            Self::Internal(detail) => {
                error!(detail = %detail, "Request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
