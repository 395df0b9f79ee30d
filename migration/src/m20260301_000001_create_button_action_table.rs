use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ButtonAction::Table)
                    .if_not_exists()
                    .col(pk_auto(ButtonAction::Id))
                    .col(string(ButtonAction::GuildId))
                    .col(string(ButtonAction::ChannelId))
                    .col(string(ButtonAction::MessageId))
                    .col(string(ButtonAction::ButtonId))
                    .col(text(ButtonAction::Action))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_button_action_message_button")
                            .col(ButtonAction::MessageId)
                            .col(ButtonAction::ButtonId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ButtonAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ButtonAction {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    ButtonId,
    Action,
}
