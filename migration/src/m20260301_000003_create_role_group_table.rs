use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleGroup::Id))
                    .col(string(RoleGroup::GuildId))
                    .col(string(RoleGroup::Name))
                    .col(string(RoleGroup::RoleId))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_role_group_guild_name_role")
                            .col(RoleGroup::GuildId)
                            .col(RoleGroup::Name)
                            .col(RoleGroup::RoleId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleGroup {
    Table,
    Id,
    GuildId,
    Name,
    RoleId,
}
