use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_service_table::Service;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceTranslation::Id))
                    .col(integer(ServiceTranslation::ServiceId))
                    .col(string(ServiceTranslation::Language))
                    .col(json(ServiceTranslation::Document))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_translation_service_id")
                            .from(ServiceTranslation::Table, ServiceTranslation::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_translation_service_language")
                    .table(ServiceTranslation::Table)
                    .col(ServiceTranslation::ServiceId)
                    .col(ServiceTranslation::Language)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceTranslation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceTranslation {
    #[sea_orm(iden = "service_translations")]
    Table,
    Id,
    ServiceId,
    Language,
    Document,
}
