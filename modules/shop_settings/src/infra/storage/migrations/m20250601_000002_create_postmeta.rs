use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Postmeta::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Postmeta::PostId).big_integer().not_null())
                    .col(ColumnDef::new(Postmeta::MetaKey).string().not_null())
                    .col(ColumnDef::new(Postmeta::MetaValue).text().not_null())
                    .col(
                        ColumnDef::new(Postmeta::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Postmeta::PostId)
                            .col(Postmeta::MetaKey),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_postmeta_meta_key")
                    .table(Postmeta::Table)
                    .col(Postmeta::MetaKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Postmeta::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Postmeta {
    Table,
    PostId,
    MetaKey,
    MetaValue,
    UpdatedAt,
}
