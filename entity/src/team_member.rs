use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Language-neutral team member row. Localized text lives in
/// `team_member_translation`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Relative path of the portrait image in the blob store, never a URL.
    pub image: Option<String>,
    /// Display position in team listings, 1-based. Assigned as last + 1 on
    /// create and rewritten by the bulk reorder operation.
    pub order_number: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_member_translation::Entity")]
    TeamMemberTranslation,
}

impl Related<super::team_member_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMemberTranslation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
