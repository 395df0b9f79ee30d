use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuAction::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuAction::Id))
                    .col(string(MenuAction::GuildId))
                    .col(string(MenuAction::ChannelId))
                    .col(string(MenuAction::MessageId))
                    .col(string(MenuAction::MenuId))
                    .col(string(MenuAction::OptionLabel))
                    .col(text(MenuAction::Action))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_menu_action_message_menu_option")
                            .col(MenuAction::MessageId)
                            .col(MenuAction::MenuId)
                            .col(MenuAction::OptionLabel),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuAction {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    MenuId,
    OptionLabel,
    Action,
}
