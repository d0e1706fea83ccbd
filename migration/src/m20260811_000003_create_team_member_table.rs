use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(string_null(TeamMember::Image))
                    .col(integer(TeamMember::OrderNumber))
                    .col(
                        timestamp(TeamMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    #[sea_orm(iden = "team_members")]
    Table,
    Id,
    Image,
    OrderNumber,
    CreatedAt,
}
