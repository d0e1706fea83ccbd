//! Generic localized content service.
//!
//! One implementation of list/get/create/update/delete/search and
//! cross-locale section item removal, parameterized by a [`LocalizedStore`]
//! so every content aggregate (services, team members, …) shares the same
//! orchestration instead of duplicating it per controller.
//!
//! Every mutating operation runs its row writes inside a single
//! transaction; blob store writes happen outside it, so a failure between
//! a stored file and the commit can orphan that file. That gap is accepted.
//! Writes are last-write-wins with no cross-editor locking.

use std::collections::HashMap;
use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::Value;

use crate::data::{team::TeamStore, EntityFields, EntityRow, LocalizedStore};
use crate::document::{Document, RenderContext, SectionKey};
use crate::error::{validation::ValidationError, AppError};
use crate::locale;
use crate::model::api::Pagination;
use crate::model::content::{Attachments, ContentPayload};
use crate::storage::BlobStore;

pub struct ContentService<'a, S: LocalizedStore> {
    db: &'a DatabaseConnection,
    blobs: &'a BlobStore,
    default_locale: &'a str,
    _store: PhantomData<S>,
}

impl<'a, S: LocalizedStore> ContentService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, blobs: &'a BlobStore, default_locale: &'a str) -> Self {
        Self {
            db,
            blobs,
            default_locale,
            _store: PhantomData,
        }
    }

    fn not_found() -> AppError {
        AppError::NotFound(format!("{} not found", S::ENTITY_NAME))
    }

    /// Renders one entity at the requested locale with default-locale
    /// fallback, resolved image URLs and flattened entity-level fields.
    async fn render_entity(
        &self,
        row: &EntityRow,
        requested: &str,
        context: RenderContext,
    ) -> Result<Value, AppError> {
        let translations = S::list_translations(self.db, row.id).await?;
        let available: Vec<&str> = translations.iter().map(|t| t.language.as_str()).collect();
        let effective = locale::resolve(requested, &available, self.default_locale);

        let mut document = translations
            .iter()
            .find(|t| t.language == effective)
            .map(|t| Document::from_value(&t.document))
            .unwrap_or_default();
        document.default_missing_sections(S::SECTIONS);

        let url_of = |path: &str| self.blobs.url_of(path);
        let mut rendered = document.render(&url_of, context);

        rendered.insert("id".to_string(), Value::from(row.id));
        rendered.insert(
            "image".to_string(),
            match &row.image {
                Some(path) => Value::String(self.blobs.url_of(path)),
                None => Value::Null,
            },
        );
        if S::HAS_CATEGORY {
            rendered.insert(
                "category".to_string(),
                match row.category_id {
                    Some(id) => Value::from(id),
                    None => Value::String(String::new()),
                },
            );
        }
        if let Some(order_number) = row.order_number {
            rendered.insert("order_number".to_string(), Value::from(order_number));
        }

        Ok(Value::Object(rendered))
    }

    async fn render_page(
        &self,
        rows: Vec<EntityRow>,
        locale: &str,
        page: u64,
        per_page: u64,
        total: u64,
    ) -> Result<(Vec<Value>, Pagination), AppError> {
        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(self.render_entity(row, locale, RenderContext::List).await?);
        }
        Ok((items, Pagination::new(page, per_page, total)))
    }

    fn validate(
        &self,
        payload: &ContentPayload,
        attachments: &Attachments,
        require_image: bool,
    ) -> Result<(), ValidationError> {
        let mut validation = ValidationError::new();

        if require_image && attachments.entity_image.is_none() {
            validation.push("image", "The image field is required.");
        }

        let document = Document::from_value(&payload.translation);
        if document.text_field(S::REQUIRED_TEXT_FIELD).is_none() {
            validation.push(
                format!("translation.{}", S::REQUIRED_TEXT_FIELD),
                format!("The {} field is required.", S::REQUIRED_TEXT_FIELD),
            );
        }

        validation.into_result()
    }

    /// Id-ordered page of rendered items. An empty page is reported as
    /// `NotFound`.
    pub async fn list(
        &self,
        locale: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Value>, Pagination), AppError> {
        let page = page.max(1);
        let per_page = per_page.max(1);

        let (rows, total) = S::list_entities(self.db, page, per_page).await?;
        if rows.is_empty() {
            return Err(Self::not_found());
        }

        self.render_page(rows, locale, page, per_page, total).await
    }

    pub async fn get(&self, id: i32, locale: &str) -> Result<Value, AppError> {
        let row = S::find_entity(self.db, id)
            .await?
            .ok_or_else(Self::not_found)?;
        self.render_entity(&row, locale, RenderContext::Detail).await
    }

    /// Creates the entity row and its first translation atomically.
    pub async fn create(
        &self,
        locale: &str,
        payload: ContentPayload,
        attachments: Attachments,
    ) -> Result<i32, AppError> {
        self.validate(&payload, &attachments, true)?;

        let mut document = Document::from_value(&payload.translation);
        document.default_missing_sections(S::SECTIONS);

        // Blob writes precede the transaction; a later failure can orphan
        // the files already written.
        let entity_image = match &attachments.entity_image {
            Some(file) => Some(
                self.blobs
                    .store(&file.bytes, S::BUCKET, &file.content_type)
                    .await?,
            ),
            None => None,
        };

        let mut new_paths = HashMap::new();
        for ((section, index), file) in &attachments.section_images {
            if !document.contains_item(*section, *index) {
                continue;
            }
            let path = self
                .blobs
                .store(&file.bytes, S::BUCKET, &file.content_type)
                .await?;
            new_paths.insert((*section, *index), path);
        }
        // A brand-new entity has no previous document to carry from.
        document.merge_section_images(None, &new_paths);

        let txn = self.db.begin().await?;
        let row = S::insert_entity(
            &txn,
            EntityFields {
                image: entity_image,
                category_id: payload.category,
            },
        )
        .await?;
        S::upsert_translation(&txn, row.id, locale, &document.to_value()).await?;
        txn.commit().await?;

        Ok(row.id)
    }

    /// Updates entity-level fields and the edited locale's document.
    ///
    /// Attachment state is reconciled against the default locale's stored
    /// document: new uploads replace (and delete) the path recorded there,
    /// items without a new upload carry the default document's path
    /// forward. When a non-default locale is edited and a default document
    /// exists, the default document is re-upserted with the newly uploaded
    /// paths so it stays the canonical attachment record.
    pub async fn update(
        &self,
        id: i32,
        locale: &str,
        payload: ContentPayload,
        attachments: Attachments,
    ) -> Result<(), AppError> {
        let row = S::find_entity(self.db, id)
            .await?
            .ok_or_else(Self::not_found)?;
        self.validate(&payload, &attachments, false)?;

        let mut fields = EntityFields {
            image: None,
            category_id: payload.category,
        };
        if let Some(file) = &attachments.entity_image {
            // Store before deleting so a failed upload leaves the row
            // pointing at an existing file.
            let stored = self
                .blobs
                .store(&file.bytes, S::BUCKET, &file.content_type)
                .await?;
            if let Some(old) = &row.image {
                self.blobs.delete(old).await?;
            }
            fields.image = Some(stored);
        }

        let mut document = Document::from_value(&payload.translation);
        document.default_missing_sections(S::SECTIONS);

        let default_document = S::get_translation(self.db, id, self.default_locale)
            .await?
            .map(|t| Document::from_value(&t.document));

        let mut new_paths = HashMap::new();
        for ((section, index), file) in &attachments.section_images {
            if !document.contains_item(*section, *index) {
                continue;
            }
            let path = self
                .blobs
                .store(&file.bytes, S::BUCKET, &file.content_type)
                .await?;
            if let Some(old) = default_document
                .as_ref()
                .and_then(|d| d.image_at(*section, *index))
            {
                self.blobs.delete(old).await?;
            }
            new_paths.insert((*section, *index), path);
        }
        document.merge_section_images(default_document.as_ref(), &new_paths);

        let synced_default = if locale != self.default_locale && !new_paths.is_empty() {
            default_document.clone().map(|mut default| {
                for ((section, index), path) in &new_paths {
                    default.set_image_at(*section, *index, Some(path.clone()));
                }
                default
            })
        } else {
            None
        };

        let txn = self.db.begin().await?;
        S::update_entity(&txn, id, fields).await?;
        if let Some(default) = &synced_default {
            S::upsert_translation(&txn, id, self.default_locale, &default.to_value()).await?;
        }
        S::upsert_translation(&txn, id, locale, &document.to_value()).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Deletes the entity-level attachment, every translation and the row.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let row = S::find_entity(self.db, id)
            .await?
            .ok_or_else(Self::not_found)?;

        if let Some(image) = &row.image {
            self.blobs.delete(image).await?;
        }

        let txn = self.db.begin().await?;
        S::delete_translations(&txn, id).await?;
        S::delete_entity(&txn, id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Case-insensitive substring search over the designated text field,
    /// rendered identically to `list`.
    pub async fn search(
        &self,
        locale: &str,
        query: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Value>, Pagination), AppError> {
        if query.trim().is_empty() {
            let mut validation = ValidationError::new();
            validation.push("query", "The query field is required.");
            return Err(validation.into());
        }

        let page = page.max(1);
        let per_page = per_page.max(1);

        let (rows, total) = S::search_entities(self.db, locale, query, page, per_page).await?;
        if rows.is_empty() {
            return Err(Self::not_found());
        }

        self.render_page(rows, locale, page, per_page, total).await
    }

    /// Removes the item at (section, index) from every locale's document.
    ///
    /// The slot is checked across all locales before any document is
    /// mutated; when no locale contains it the operation fails with
    /// `NotFound` and nothing changes.
    pub async fn remove_section_item(
        &self,
        id: i32,
        section: SectionKey,
        index: usize,
    ) -> Result<(), AppError> {
        let translations = S::list_translations(self.db, id).await?;
        if translations.is_empty() {
            return Err(AppError::NotFound("No translation data found".to_string()));
        }

        let mut documents: Vec<(String, Document)> = translations
            .iter()
            .map(|t| (t.language.clone(), Document::from_value(&t.document)))
            .collect();

        if !documents
            .iter()
            .any(|(_, document)| document.contains_item(section, index))
        {
            return Err(AppError::NotFound(format!(
                "No item at {section}[{index}] in any locale"
            )));
        }

        let txn = self.db.begin().await?;
        for (language, document) in &mut documents {
            if document.remove_indexed_item(section, index) {
                S::upsert_translation(&txn, id, language, &document.to_value()).await?;
            }
        }
        txn.commit().await?;

        Ok(())
    }
}

impl<'a> ContentService<'a, TeamStore> {
    /// Applies a bulk display reorder in one transaction. Unknown ids are
    /// skipped rather than rejected; the list order simply reflects whatever
    /// positions were written.
    pub async fn reorder(&self, orders: &[(i32, i32)]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        TeamStore::set_order_numbers(&txn, orders).await?;
        txn.commit().await?;

        Ok(())
    }
}
