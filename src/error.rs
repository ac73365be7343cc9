//! JSON API error responses.
//!
//! One error type for every handler: a status code plus a `{"msg": ...}`
//! body. A wrong quiz answer is never an error - it is a normal 200 with
//! `is_correct: false` (or the documented 400 on the legacy validate
//! path).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DbLockError;
use crate::store::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Submit attempted on a completed session - a client error, not a
    /// server one.
    pub fn session_complete() -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: "Quiz session already complete".to_string(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(status = %self.status, "{}", self.message);
        }
        let body = ErrorBody { msg: self.message };
        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::LanguageNotFound(_) | StoreError::WordNotFound(_) => {
                Self::not_found(err.to_string())
            }
            StoreError::Unavailable(_) => Self::unavailable(err.to_string()),
        }
    }
}

impl From<DbLockError> for ApiError {
    fn from(err: DbLockError) -> Self {
        Self::unavailable(err.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        Self::internal(err.to_string())
    }
}
