use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(string(GuildConfig::GuildId).primary_key())
                    .col(boolean(GuildConfig::CheckReactions).default(false))
                    .col(string_null(GuildConfig::NotificationChannelId))
                    .col(integer(GuildConfig::MinimumReactionCount).default(0))
                    .col(string_null(GuildConfig::RadioTextChannelId))
                    .col(string_null(GuildConfig::RadioMessageId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    GuildId,
    CheckReactions,
    NotificationChannelId,
    MinimumReactionCount,
    RadioTextChannelId,
    RadioMessageId,
}
