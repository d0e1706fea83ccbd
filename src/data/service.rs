use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::data::{EntityFields, EntityRow, LocalizedStore, TranslationRow};
use crate::document::SectionKey;

/// Store adapter for the services aggregate.
pub struct ServiceStore;

fn row_from(model: entity::service::Model) -> EntityRow {
    EntityRow {
        id: model.id,
        image: model.image,
        category_id: model.category_id,
        order_number: None,
    }
}

fn translation_from(model: entity::service_translation::Model) -> TranslationRow {
    TranslationRow {
        language: model.language,
        document: model.document,
    }
}

impl LocalizedStore for ServiceStore {
    const ENTITY_NAME: &'static str = "Service";
    const BUCKET: &'static str = "services_images";
    const SECTIONS: &'static [SectionKey] = SectionKey::ALL;
    const SEARCH_FIELD: &'static str = "sec_one_heading_one";
    const REQUIRED_TEXT_FIELD: &'static str = "sec_one_heading_one";
    const HAS_CATEGORY: bool = true;

    async fn insert_entity(
        conn: &impl ConnectionTrait,
        fields: EntityFields,
    ) -> Result<EntityRow, DbErr> {
        let model = entity::service::ActiveModel {
            category_id: ActiveValue::Set(fields.category_id),
            image: ActiveValue::Set(fields.image),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        Ok(row_from(model))
    }

    async fn update_entity(
        conn: &impl ConnectionTrait,
        id: i32,
        fields: EntityFields,
    ) -> Result<(), DbErr> {
        if fields.image.is_none() && fields.category_id.is_none() {
            return Ok(());
        }

        let service = entity::prelude::Service::find_by_id(id)
            .one(conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Service with id {id} not found"
            )))?;

        let mut active: entity::service::ActiveModel = service.into();
        if let Some(image) = fields.image {
            active.image = ActiveValue::Set(Some(image));
        }
        if let Some(category_id) = fields.category_id {
            active.category_id = ActiveValue::Set(Some(category_id));
        }
        active.update(conn).await?;

        Ok(())
    }

    async fn find_entity(conn: &impl ConnectionTrait, id: i32) -> Result<Option<EntityRow>, DbErr> {
        Ok(entity::prelude::Service::find_by_id(id)
            .one(conn)
            .await?
            .map(row_from))
    }

    async fn delete_entity(conn: &impl ConnectionTrait, id: i32) -> Result<(), DbErr> {
        entity::prelude::Service::delete_by_id(id).exec(conn).await?;
        Ok(())
    }

    async fn list_entities(
        conn: &impl ConnectionTrait,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<EntityRow>, u64), DbErr> {
        let paginator = entity::prelude::Service::find()
            .order_by_asc(entity::service::Column::Id)
            .paginate(conn, per_page);

        let total = paginator.num_items().await?;
        let services = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((services.into_iter().map(row_from).collect(), total))
    }

    async fn get_translation(
        conn: &impl ConnectionTrait,
        entity_id: i32,
        locale: &str,
    ) -> Result<Option<TranslationRow>, DbErr> {
        Ok(entity::prelude::ServiceTranslation::find()
            .filter(entity::service_translation::Column::ServiceId.eq(entity_id))
            .filter(entity::service_translation::Column::Language.eq(locale))
            .one(conn)
            .await?
            .map(translation_from))
    }

    async fn list_translations(
        conn: &impl ConnectionTrait,
        entity_id: i32,
    ) -> Result<Vec<TranslationRow>, DbErr> {
        Ok(entity::prelude::ServiceTranslation::find()
            .filter(entity::service_translation::Column::ServiceId.eq(entity_id))
            .order_by_asc(entity::service_translation::Column::Language)
            .all(conn)
            .await?
            .into_iter()
            .map(translation_from)
            .collect())
    }

    async fn upsert_translation(
        conn: &impl ConnectionTrait,
        entity_id: i32,
        locale: &str,
        document: &Value,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::ServiceTranslation::find()
            .filter(entity::service_translation::Column::ServiceId.eq(entity_id))
            .filter(entity::service_translation::Column::Language.eq(locale))
            .one(conn)
            .await?;

        match existing {
            Some(model) => {
                let mut active: entity::service_translation::ActiveModel = model.into();
                active.document = ActiveValue::Set(document.clone());
                active.update(conn).await?;
            }
            None => {
                entity::service_translation::ActiveModel {
                    service_id: ActiveValue::Set(entity_id),
                    language: ActiveValue::Set(locale.to_string()),
                    document: ActiveValue::Set(document.clone()),
                    ..Default::default()
                }
                .insert(conn)
                .await?;
            }
        }

        Ok(())
    }

    async fn delete_translations(conn: &impl ConnectionTrait, entity_id: i32) -> Result<(), DbErr> {
        entity::prelude::ServiceTranslation::delete_many()
            .filter(entity::service_translation::Column::ServiceId.eq(entity_id))
            .exec(conn)
            .await?;
        Ok(())
    }

    async fn search_entities(
        conn: &impl ConnectionTrait,
        locale: &str,
        needle: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<EntityRow>, u64), DbErr> {
        let pattern = format!("%{}%", needle.to_lowercase());
        // SEARCH_FIELD is a compile-time constant, not request input.
        let predicate = Expr::cust_with_values(
            format!(
                "LOWER(json_extract(document, '$.{}')) LIKE ?",
                Self::SEARCH_FIELD
            ),
            [pattern],
        );

        let paginator = entity::prelude::ServiceTranslation::find()
            .filter(entity::service_translation::Column::Language.eq(locale))
            .filter(predicate)
            .order_by_asc(entity::service_translation::Column::ServiceId)
            .paginate(conn, per_page);

        let total = paginator.num_items().await?;
        let translations = paginator.fetch_page(page.saturating_sub(1)).await?;
        let ids: Vec<i32> = translations.iter().map(|t| t.service_id).collect();

        let services = entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(ids))
            .order_by_asc(entity::service::Column::Id)
            .all(conn)
            .await?;

        Ok((services.into_iter().map(row_from).collect(), total))
    }
}
