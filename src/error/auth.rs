use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::model::api::Envelope;

/// Authentication failures. All variants map to 401 Unauthorized with the
/// message in the standard envelope.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is invalid")]
    TokenInvalid,

    #[error("Token error: could not decode token")]
    TokenMalformed,

    #[error("Authorization token is missing")]
    MissingToken,

    /// Authenticated but not a super admin; mutating operations require one.
    #[error("Unauthorized")]
    NotSuperAdmin,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(Envelope::fail(Value::String(self.to_string()))),
        )
            .into_response()
    }
}
