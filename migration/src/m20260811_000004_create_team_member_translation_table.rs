use sea_orm_migration::{prelude::*, schema::*};

use super::m20260811_000003_create_team_member_table::TeamMember;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMemberTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMemberTranslation::Id))
                    .col(integer(TeamMemberTranslation::TeamMemberId))
                    .col(string(TeamMemberTranslation::Language))
                    .col(json(TeamMemberTranslation::Document))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_translation_team_member_id")
                            .from(
                                TeamMemberTranslation::Table,
                                TeamMemberTranslation::TeamMemberId,
                            )
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_member_translation_member_language")
                    .table(TeamMemberTranslation::Table)
                    .col(TeamMemberTranslation::TeamMemberId)
                    .col(TeamMemberTranslation::Language)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(TeamMemberTranslation::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMemberTranslation {
    #[sea_orm(iden = "team_member_translations")]
    Table,
    Id,
    TeamMemberId,
    Language,
    Document,
}
