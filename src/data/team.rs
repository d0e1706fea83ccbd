use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::data::{EntityFields, EntityRow, LocalizedStore, TranslationRow};
use crate::document::SectionKey;

/// Store adapter for the team members aggregate.
///
/// Team members carry no category reference; the category field of incoming
/// payloads is ignored here.
pub struct TeamStore;

fn row_from(model: entity::team_member::Model) -> EntityRow {
    EntityRow {
        id: model.id,
        image: model.image,
        category_id: None,
        order_number: Some(model.order_number),
    }
}

impl TeamStore {
    /// Applies explicit display positions in bulk. Ids with no matching row
    /// are skipped; the relative order of untouched rows is preserved.
    pub async fn set_order_numbers(
        conn: &impl ConnectionTrait,
        orders: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        for (id, order_number) in orders {
            entity::prelude::TeamMember::update_many()
                .col_expr(
                    entity::team_member::Column::OrderNumber,
                    Expr::value(*order_number),
                )
                .filter(entity::team_member::Column::Id.eq(*id))
                .exec(conn)
                .await?;
        }
        Ok(())
    }
}

fn translation_from(model: entity::team_member_translation::Model) -> TranslationRow {
    TranslationRow {
        language: model.language,
        document: model.document,
    }
}

impl LocalizedStore for TeamStore {
    const ENTITY_NAME: &'static str = "Team member";
    const BUCKET: &'static str = "team_images";
    const SECTIONS: &'static [SectionKey] = &[SectionKey::SecTwo, SectionKey::Faqs];
    const SEARCH_FIELD: &'static str = "name";
    const REQUIRED_TEXT_FIELD: &'static str = "name";
    const HAS_CATEGORY: bool = false;

    async fn insert_entity(
        conn: &impl ConnectionTrait,
        fields: EntityFields,
    ) -> Result<EntityRow, DbErr> {
        // New members join at the end of the display order.
        let last = entity::prelude::TeamMember::find()
            .order_by_desc(entity::team_member::Column::OrderNumber)
            .one(conn)
            .await?;
        let order_number = last.map_or(1, |member| member.order_number + 1);

        let model = entity::team_member::ActiveModel {
            image: ActiveValue::Set(fields.image),
            order_number: ActiveValue::Set(order_number),
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
        let Some(image) = fields.image else {
            return Ok(());
        };

        let member = entity::prelude::TeamMember::find_by_id(id)
            .one(conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team member with id {id} not found"
            )))?;

        let mut active: entity::team_member::ActiveModel = member.into();
        active.image = ActiveValue::Set(Some(image));
        active.update(conn).await?;

        Ok(())
    }

    async fn find_entity(conn: &impl ConnectionTrait, id: i32) -> Result<Option<EntityRow>, DbErr> {
        Ok(entity::prelude::TeamMember::find_by_id(id)
            .one(conn)
            .await?
            .map(row_from))
    }

    async fn delete_entity(conn: &impl ConnectionTrait, id: i32) -> Result<(), DbErr> {
        entity::prelude::TeamMember::delete_by_id(id).exec(conn).await?;
        Ok(())
    }

    async fn list_entities(
        conn: &impl ConnectionTrait,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<EntityRow>, u64), DbErr> {
        let paginator = entity::prelude::TeamMember::find()
            .order_by_asc(entity::team_member::Column::OrderNumber)
            .paginate(conn, per_page);

        let total = paginator.num_items().await?;
        let members = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((members.into_iter().map(row_from).collect(), total))
    }

    async fn get_translation(
        conn: &impl ConnectionTrait,
        entity_id: i32,
        locale: &str,
    ) -> Result<Option<TranslationRow>, DbErr> {
        Ok(entity::prelude::TeamMemberTranslation::find()
            .filter(entity::team_member_translation::Column::TeamMemberId.eq(entity_id))
            .filter(entity::team_member_translation::Column::Language.eq(locale))
            .one(conn)
            .await?
            .map(translation_from))
    }

    async fn list_translations(
        conn: &impl ConnectionTrait,
        entity_id: i32,
    ) -> Result<Vec<TranslationRow>, DbErr> {
        Ok(entity::prelude::TeamMemberTranslation::find()
            .filter(entity::team_member_translation::Column::TeamMemberId.eq(entity_id))
            .order_by_asc(entity::team_member_translation::Column::Language)
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
        let existing = entity::prelude::TeamMemberTranslation::find()
            .filter(entity::team_member_translation::Column::TeamMemberId.eq(entity_id))
            .filter(entity::team_member_translation::Column::Language.eq(locale))
            .one(conn)
            .await?;

        match existing {
            Some(model) => {
                let mut active: entity::team_member_translation::ActiveModel = model.into();
                active.document = ActiveValue::Set(document.clone());
                active.update(conn).await?;
            }
            None => {
                entity::team_member_translation::ActiveModel {
                    team_member_id: ActiveValue::Set(entity_id),
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
        entity::prelude::TeamMemberTranslation::delete_many()
            .filter(entity::team_member_translation::Column::TeamMemberId.eq(entity_id))
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
        let predicate = Expr::cust_with_values(
            format!(
                "LOWER(json_extract(document, '$.{}')) LIKE ?",
                Self::SEARCH_FIELD
            ),
            [pattern],
        );

        let paginator = entity::prelude::TeamMemberTranslation::find()
            .filter(entity::team_member_translation::Column::Language.eq(locale))
            .filter(predicate)
            .order_by_asc(entity::team_member_translation::Column::TeamMemberId)
            .paginate(conn, per_page);

        let total = paginator.num_items().await?;
        let translations = paginator.fetch_page(page.saturating_sub(1)).await?;
        let ids: Vec<i32> = translations.iter().map(|t| t.team_member_id).collect();

        let members = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::Id.is_in(ids))
            .order_by_asc(entity::team_member::Column::Id)
            .all(conn)
            .await?;

        Ok((members.into_iter().map(row_from).collect(), total))
    }
}
