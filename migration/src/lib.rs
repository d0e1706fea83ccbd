pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_service_table;
mod m20260810_000002_create_service_translation_table;
mod m20260811_000003_create_team_member_table;
mod m20260811_000004_create_team_member_translation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_service_table::Migration),
            Box::new(m20260810_000002_create_service_translation_table::Migration),
            Box::new(m20260811_000003_create_team_member_table::Migration),
            Box::new(m20260811_000004_create_team_member_translation_table::Migration),
        ]
    }
}
