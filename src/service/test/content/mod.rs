use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::data::{service::ServiceStore, LocalizedStore};
use crate::document::SectionKey;
use crate::error::AppError;
use crate::extract::UploadedFile;
use crate::model::content::{Attachments, ContentPayload};
use crate::service::content::ContentService;
use crate::storage::BlobStore;

mod delete;
mod remove_item;
mod render;
mod reorder;
mod update;

/// Blob store rooted in a fresh temp directory per test.
fn blobs() -> BlobStore {
    let dir = std::env::temp_dir().join(format!(
        "lexcms_content_test_{:08x}",
        rand::random::<u32>()
    ));
    BlobStore::new(dir, "https://cdn.example.com")
}

fn content<'a>(
    db: &'a DatabaseConnection,
    blobs: &'a BlobStore,
) -> ContentService<'a, ServiceStore> {
    ContentService::new(db, blobs, "en")
}

fn png() -> UploadedFile {
    UploadedFile {
        content_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

fn payload(translation: Value) -> ContentPayload {
    ContentPayload {
        category: Some(1),
        translation,
    }
}

fn attachments_with_image() -> Attachments {
    Attachments {
        entity_image: Some(png()),
        section_images: HashMap::new(),
    }
}
