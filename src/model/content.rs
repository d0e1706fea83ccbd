//! Parameter types for the localized content operations.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::document::SectionKey;
use crate::extract::UploadedFile;

/// JSON half of a create/update request: entity-level fields plus the raw
/// translation blob for the edited locale.
#[derive(Deserialize, ToSchema, Debug, Default, Clone)]
pub struct ContentPayload {
    /// Optional category reference; ignored by entity types without one.
    pub category: Option<i32>,
    /// Localized fields and sections for the edited locale.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub translation: Value,
}

/// Uploaded files split out of the multipart form.
///
/// `entity_image` comes from the part named `image`; section item images
/// from parts named `<section>.<index>.image`.
#[derive(Debug, Default)]
pub struct Attachments {
    pub entity_image: Option<UploadedFile>,
    pub section_images: HashMap<(SectionKey, usize), UploadedFile>,
}

impl Attachments {
    pub fn from_files(files: HashMap<String, UploadedFile>) -> Self {
        let mut attachments = Attachments::default();

        for (name, file) in files {
            if name == "image" {
                attachments.entity_image = Some(file);
                continue;
            }
            if let Some(slot) = parse_section_slot(&name) {
                attachments.section_images.insert(slot, file);
            }
            // Unrecognized part names are dropped.
        }

        attachments
    }
}

fn parse_section_slot(name: &str) -> Option<(SectionKey, usize)> {
    let mut parts = name.split('.');
    let section = SectionKey::parse(parts.next()?)?;
    let index = parts.next()?.parse::<usize>().ok()?;
    match parts.next() {
        Some("image") => (parts.next().is_none()).then_some((section, index)),
        _ => None,
    }
}

/// Body of the cross-locale section item removal endpoint.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct RemoveItemRequest {
    pub id: i32,
    pub section: String,
    pub index: usize,
}

/// Body of the bulk team reorder endpoint.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct ReorderRequest {
    pub orders: Vec<OrderAssignment>,
}

/// One explicit display position.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct OrderAssignment {
    pub id: i32,
    pub order_number: i32,
}
