//! Data layer: row/translation access for each localized content aggregate.
//!
//! Each aggregate (services, team members) implements [`LocalizedStore`],
//! the adapter the generic content service is parameterized over. Methods
//! are generic over `ConnectionTrait` so the same code runs on the pooled
//! connection for reads and on an open transaction for the mutating
//! operations. Documents are opaque JSON here; the data layer never
//! interprets sections or fields.

pub mod service;
pub mod team;

#[cfg(test)]
mod test;

use sea_orm::{ConnectionTrait, DbErr};
use serde_json::Value;

use crate::document::SectionKey;

/// Language-neutral entity row in its store-independent shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    pub id: i32,
    /// Stored relative path of the entity-level image, never a URL.
    pub image: Option<String>,
    pub category_id: Option<i32>,
    /// Display position for aggregates with an explicit ordering; `None`
    /// for aggregates listed by insertion id.
    pub order_number: Option<i32>,
}

/// Writable entity-level fields. `None` leaves the stored value untouched
/// on update.
#[derive(Debug, Clone, Default)]
pub struct EntityFields {
    pub image: Option<String>,
    pub category_id: Option<i32>,
}

/// One translation row: locale tag plus the opaque JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    pub language: String,
    pub document: Value,
}

/// Store adapter for one localized content aggregate.
///
/// Constants describe the aggregate's schema (blob bucket, known sections,
/// searchable and required text fields); the async functions cover entity
/// rows and the (entity_id, locale) translation documents. Upserts are
/// last-write-wins with no optimistic concurrency; at most one translation
/// exists per (entity, locale) pair.
pub trait LocalizedStore {
    /// Display name used in not-found messages, e.g. "Service".
    const ENTITY_NAME: &'static str;
    /// Blob store bucket for this aggregate's attachments.
    const BUCKET: &'static str;
    /// Section keys a rendered document must always expose.
    const SECTIONS: &'static [SectionKey];
    /// Document text field targeted by keyword search.
    const SEARCH_FIELD: &'static str;
    /// Localized text field required on create and update.
    const REQUIRED_TEXT_FIELD: &'static str;
    /// Whether this aggregate carries a category reference.
    const HAS_CATEGORY: bool;

    fn insert_entity(
        conn: &impl ConnectionTrait,
        fields: EntityFields,
    ) -> impl std::future::Future<Output = Result<EntityRow, DbErr>> + Send;

    fn update_entity(
        conn: &impl ConnectionTrait,
        id: i32,
        fields: EntityFields,
    ) -> impl std::future::Future<Output = Result<(), DbErr>> + Send;

    fn find_entity(
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> impl std::future::Future<Output = Result<Option<EntityRow>, DbErr>> + Send;

    fn delete_entity(
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> impl std::future::Future<Output = Result<(), DbErr>> + Send;

    /// Page of entity rows ordered by insertion id, plus the total count.
    /// `page` is 1-based.
    fn list_entities(
        conn: &impl ConnectionTrait,
        page: u64,
        per_page: u64,
    ) -> impl std::future::Future<Output = Result<(Vec<EntityRow>, u64), DbErr>> + Send;

    fn get_translation(
        conn: &impl ConnectionTrait,
        entity_id: i32,
        locale: &str,
    ) -> impl std::future::Future<Output = Result<Option<TranslationRow>, DbErr>> + Send;

    fn list_translations(
        conn: &impl ConnectionTrait,
        entity_id: i32,
    ) -> impl std::future::Future<Output = Result<Vec<TranslationRow>, DbErr>> + Send;

    /// Overwrite-or-insert the document at (entity_id, locale).
    fn upsert_translation(
        conn: &impl ConnectionTrait,
        entity_id: i32,
        locale: &str,
        document: &Value,
    ) -> impl std::future::Future<Output = Result<(), DbErr>> + Send;

    fn delete_translations(
        conn: &impl ConnectionTrait,
        entity_id: i32,
    ) -> impl std::future::Future<Output = Result<(), DbErr>> + Send;

    /// Case-insensitive substring match on `SEARCH_FIELD` inside the
    /// translation document at `locale`, joined back to entity rows.
    /// `page` is 1-based.
    fn search_entities(
        conn: &impl ConnectionTrait,
        locale: &str,
        needle: &str,
        page: u64,
        per_page: u64,
    ) -> impl std::future::Future<Output = Result<(Vec<EntityRow>, u64), DbErr>> + Send;
}
