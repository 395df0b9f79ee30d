//! Role group data repository
//!
//! Role groups are stored one row per `(guild, name, role)`; a group exists for as
//! long as it has at least one role.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{error::AppError, model::role_group::RoleGroupEntry};

pub struct RoleGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleGroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds roles to a group, creating the group if needed
    ///
    /// Roles already in the group are skipped.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the group belongs to
    /// - `name` - Group name
    /// - `role_ids` - Roles to add
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of roles newly added
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn add_roles(
        &self,
        guild_id: u64,
        name: &str,
        role_ids: &[u64],
    ) -> Result<usize, AppError> {
        let existing = self.get_roles(guild_id, name).await?;
        let mut added = 0;

        for role_id in role_ids {
            if existing.contains(role_id) {
                continue;
            }

            entity::role_group::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                name: ActiveValue::Set(name.to_string()),
                role_id: ActiveValue::Set(role_id.to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            added += 1;
        }

        Ok(added)
    }

    /// Names of the guild's groups, sorted and without duplicates.
    pub async fn get_group_names(&self, guild_id: u64) -> Result<Vec<String>, AppError> {
        let names: Vec<String> = entity::prelude::RoleGroup::find()
            .select_only()
            .column(entity::role_group::Column::Name)
            .distinct()
            .filter(entity::role_group::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::role_group::Column::Name)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names)
    }

    /// Role IDs of a group sorted ascending; empty when the group does not exist.
    pub async fn get_roles(&self, guild_id: u64, name: &str) -> Result<Vec<u64>, AppError> {
        let mut role_ids = self
            .get_entries(guild_id, name)
            .await?
            .into_iter()
            .map(|entry| entry.role_id)
            .collect::<Vec<_>>();
        role_ids.sort_unstable();

        Ok(role_ids)
    }

    /// Stored rows of a group.
    pub async fn get_entries(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Vec<RoleGroupEntry>, AppError> {
        entity::prelude::RoleGroup::find()
            .filter(entity::role_group::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::role_group::Column::Name.eq(name))
            .all(self.db)
            .await?
            .into_iter()
            .map(RoleGroupEntry::from_entity)
            .collect()
    }

    /// Removes roles from a group, returning how many were removed.
    pub async fn remove_roles(
        &self,
        guild_id: u64,
        name: &str,
        role_ids: &[u64],
    ) -> Result<u64, AppError> {
        let role_ids: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();
        let result = entity::prelude::RoleGroup::delete_many()
            .filter(entity::role_group::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::role_group::Column::Name.eq(name))
            .filter(entity::role_group::Column::RoleId.is_in(role_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a whole group, returning how many roles it held.
    pub async fn delete_group(&self, guild_id: u64, name: &str) -> Result<u64, AppError> {
        let result = entity::prelude::RoleGroup::delete_many()
            .filter(entity::role_group::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::role_group::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
