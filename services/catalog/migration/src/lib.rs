use sea_orm_migration::prelude::*;

mod m20250601_000001_create_accounts;
mod m20250601_000002_create_contents;
mod m20250601_000003_create_favorites;
mod m20250601_000004_create_watch_progress;
mod m20250601_000005_create_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_accounts::Migration),
            Box::new(m20250601_000002_create_contents::Migration),
            Box::new(m20250601_000003_create_favorites::Migration),
            Box::new(m20250601_000004_create_watch_progress::Migration),
            Box::new(m20250601_000005_create_settings::Migration),
        ]
    }
}
