//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type wrapping domain-specific errors
//! and implementing `IntoResponse` so handlers can return
//! `Result<_, AppError>`. Every error renders the standard JSON envelope
//! with `status: "false"`; internal details are logged server-side and
//! replaced with a generic message in the response body.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, validation::ValidationError};
use crate::mailer::MailError;
use crate::model::api::Envelope;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error, mapped to 401.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request validation failure, mapped to 422 with field messages.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Row store failure; aborts and rolls back the unit of work.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Blob store failure.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Outbound mail handoff failure.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Malformed multipart request body.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found, mapped to 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; logged in full, reported generically.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(Envelope::fail(Value::String(msg))),
            )
                .into_response(),
            Self::StorageErr(StorageError::UnsupportedImageType(mime)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(Envelope::fail(Value::String(format!(
                    "Unsupported image type '{mime}'"
                )))),
            )
                .into_response(),
            Self::MultipartErr(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(Envelope::fail(Value::String(format!(
                    "Invalid multipart request: {err}"
                )))),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Converts any displayable error into a 500 response with a generic body.
///
/// The full error is logged; clients never see internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Envelope::fail(Value::String(
                "An internal error occurred".to_string(),
            ))),
        )
            .into_response()
    }
}
