//! Multipart form splitting for the content endpoints.
//!
//! Admin create/update requests arrive as multipart forms: a `payload`
//! text part holding the JSON document and any number of file parts for
//! attachments. This module drains the stream once and hands the pieces
//! to the model layer untouched.

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::de::DeserializeOwned;

use crate::error::{validation::ValidationError, AppError};

/// One uploaded file part, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The split multipart form: the `payload` JSON text plus the file parts
/// keyed by part name.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub payload: Option<String>,
    pub files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Deserializes the `payload` part. A missing part yields the default;
    /// malformed JSON is a validation failure, not a 500.
    pub fn payload_as<T: DeserializeOwned + Default>(&self) -> Result<T, AppError> {
        match &self.payload {
            Some(raw) => serde_json::from_str(raw).map_err(|err| {
                let mut validation = ValidationError::new();
                validation.push("payload", format!("Invalid JSON payload: {err}"));
                AppError::ValidationErr(validation)
            }),
            None => Ok(T::default()),
        }
    }
}

/// Drains the multipart stream into a [`MultipartForm`].
///
/// The part named `payload` is read as text; every other named part with a
/// content type is buffered as a file. Unnamed parts are skipped.
pub async fn read_form(multipart: &mut Multipart) -> Result<MultipartForm, AppError> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "payload" {
            form.payload = Some(field.text().await?);
            continue;
        }

        let Some(content_type) = field.content_type().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?.to_vec();
        form.files.insert(name, UploadedFile { content_type, bytes });
    }

    Ok(form)
}
