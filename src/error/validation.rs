use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::api::Envelope;

/// Request validation failure carrying field-level messages.
///
/// Renders as 422 Unprocessable Entity with
/// `message: {"<field>": ["<rule message>", …]}`. Validation always runs
/// before any mutation begins.
#[derive(Error, Debug, Default)]
#[error("Validation failed")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Err when any field failed, for use with `?` after collecting checks.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn to_message(&self) -> Value {
        let mut fields: Map<String, Value> = Map::new();
        for error in &self.errors {
            let entry = fields
                .entry(error.field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(messages) = entry {
                messages.push(Value::String(error.message.clone()));
            }
        }
        Value::Object(fields)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Envelope::fail(self.to_message())),
        )
            .into_response()
    }
}
