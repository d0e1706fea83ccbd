use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-(team member, locale) translation document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "team_member_translations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_member_id: i32,
    pub language: String,
    pub document: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_member::Entity",
        from = "Column::TeamMemberId",
        to = "super::team_member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TeamMember,
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
