use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Language-neutral service row. Localized text lives in `service_translation`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Optional service category reference.
    pub category_id: Option<i32>,
    /// Relative path of the headline image in the blob store, never a URL.
    pub image: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service_translation::Entity")]
    ServiceTranslation,
}

impl Related<super::service_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceTranslation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
