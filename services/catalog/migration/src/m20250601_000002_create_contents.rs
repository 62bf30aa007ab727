use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Contents::Title).string().not_null())
                    .col(ColumnDef::new(Contents::Description).text().not_null())
                    .col(ColumnDef::new(Contents::Category).string().not_null())
                    .col(ColumnDef::new(Contents::VideoUrl).string().not_null())
                    .col(ColumnDef::new(Contents::VideoSource).string_len(32).not_null())
                    .col(ColumnDef::new(Contents::CoverImage).string().not_null())
                    .col(
                        ColumnDef::new(Contents::Kind)
                            .string_len(16)
                            .not_null()
                            .default("movie"),
                    )
                    .col(ColumnDef::new(Contents::Duration).integer().null())
                    .col(ColumnDef::new(Contents::Year).integer().null())
                    .col(
                        ColumnDef::new(Contents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Contents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Contents::Table)
                    .col(Contents::Category)
                    .name("idx_contents_category")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contents {
    Table,
    Id,
    Title,
    Description,
    Category,
    VideoUrl,
    VideoSource,
    CoverImage,
    Kind,
    Duration,
    Year,
    CreatedAt,
    UpdatedAt,
}
