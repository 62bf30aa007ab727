use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchProgress::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WatchProgress::AccountId).uuid().not_null())
                    .col(ColumnDef::new(WatchProgress::ContentId).uuid().not_null())
                    .col(
                        ColumnDef::new(WatchProgress::WatchedSeconds)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WatchProgress::TotalSeconds)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WatchProgress::LastWatched)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(WatchProgress::AccountId)
                            .col(WatchProgress::ContentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WatchProgress::Table, WatchProgress::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatchProgress::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WatchProgress {
    Table,
    AccountId,
    ContentId,
    WatchedSeconds,
    TotalSeconds,
    LastWatched,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
}
