//! Service factory for creating test service entities and translations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

use crate::factory::helpers::{next_id, service_document};

/// Factory for creating test services with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::service::ServiceFactory;
///
/// let service = ServiceFactory::new(&db)
///     .category_id(Some(3))
///     .image(Some("services_images/custom.png".to_string()))
///     .build()
///     .await?;
/// ```
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: Option<i32>,
    image: Option<String>,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - category_id: `None`
    /// - image: `"services_images/service_{id}.png"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category_id: None,
            image: Some(format!("services_images/service_{id}.png")),
        }
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Builds and inserts the service entity into the database.
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            category_id: ActiveValue::Set(self.category_id),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service with default values.
///
/// Shorthand for `ServiceFactory::new(db).build().await`.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db).build().await
}

/// Inserts a translation row for `service_id` at `language` with a minimal
/// document whose heading is unique per call.
pub async fn create_service_translation(
    db: &DatabaseConnection,
    service_id: i32,
    language: &str,
) -> Result<entity::service_translation::Model, DbErr> {
    let heading = format!("Service heading {}", next_id());
    create_service_translation_with_document(db, service_id, language, service_document(&heading))
        .await
}

/// Inserts a translation row with the given document.
pub async fn create_service_translation_with_document(
    db: &DatabaseConnection,
    service_id: i32,
    language: &str,
    document: Value,
) -> Result<entity::service_translation::Model, DbErr> {
    entity::service_translation::ActiveModel {
        service_id: ActiveValue::Set(service_id),
        language: ActiveValue::Set(language.to_string()),
        document: ActiveValue::Set(document),
        ..Default::default()
    }
    .insert(db)
    .await
}
