use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addon::Table)
                    .if_not_exists()
                    .col(pk_auto(Addon::Id))
                    .col(string(Addon::GuildId))
                    .col(string(Addon::AddonType))
                    .col(string(Addon::Value))
                    .col(timestamp(Addon::CreatedAt))
                    .col(timestamp(Addon::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One selection per addon type within a guild
        manager
            .create_index(
                Index::create()
                    .name("idx_addon_guild_id_addon_type")
                    .table(Addon::Table)
                    .col(Addon::GuildId)
                    .col(Addon::AddonType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Addon {
    Table,
    Id,
    GuildId,
    AddonType,
    Value,
    CreatedAt,
    UpdatedAt,
}
