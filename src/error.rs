//! # Centralized Error Handling
//!
//! Every handler failure is an [`AppError`]. Conversion into an HTTP response
//! happens in one place, producing a JSON body with a single `error` field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::services::{store::StoreError, token::TokenError};
use crate::utils::upload::UploadRejection;

/// Central application error type.
///
/// Client errors carry their response message. Store errors are logged when
/// converted into a response and reported to the client without detail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("authentication failure: {0}")]
    AuthenticationFailure(&'static str),

    #[error("store error")]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(e) = &self {
            error!(?e, "Store error occurred");
        }

        let (status, message) = match self {
            AppError::MissingInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidFormat(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::AuthenticationFailure(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<UploadRejection> for AppError {
    fn from(rejection: UploadRejection) -> Self {
        let message = rejection.to_string();
        match rejection {
            UploadRejection::MissingFile => AppError::MissingInput(message),
            UploadRejection::InvalidFilename | UploadRejection::NotAnImage => {
                AppError::InvalidFormat(message)
            }
            UploadRejection::TooLarge => AppError::PayloadTooLarge(message),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(_: TokenError) -> Self {
        AppError::AuthenticationFailure("Invalid token")
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
