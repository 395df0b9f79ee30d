use sea_orm::DatabaseConnection;

use crate::{data::role_group::RoleGroupRepository, error::AppError};

/// A role group with its roles, as listed by the `role groups` command.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleGroup {
    pub name: String,
    pub role_ids: Vec<u64>,
}

pub struct RoleGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every group of the guild with its roles, sorted by name.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<RoleGroup>, AppError> {
        let repo = RoleGroupRepository::new(self.db);
        let mut groups = Vec::new();

        for name in repo.get_group_names(guild_id).await? {
            let role_ids = repo.get_roles(guild_id, &name).await?;
            groups.push(RoleGroup { name, role_ids });
        }

        Ok(groups)
    }

    /// Gets one group
    ///
    /// # Returns
    /// - `Ok(RoleGroup)` - The group and its roles
    /// - `Err(AppError::NotFound)` - The guild has no group with that name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, guild_id: u64, name: &str) -> Result<RoleGroup, AppError> {
        let role_ids = RoleGroupRepository::new(self.db)
            .get_roles(guild_id, name)
            .await?;

        if role_ids.is_empty() {
            return Err(AppError::NotFound(format!("No role group named `{}`", name)));
        }

        Ok(RoleGroup {
            name: name.to_string(),
            role_ids,
        })
    }

    /// Adds roles to a group, creating it when needed
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of roles that were not yet in the group
    /// - `Err(AppError::BadRequest)` - No roles were given
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn add(&self, guild_id: u64, name: &str, role_ids: &[u64]) -> Result<usize, AppError> {
        if role_ids.is_empty() {
            return Err(AppError::BadRequest(
                "Give at least one role to add to the group".to_string(),
            ));
        }

        let added = RoleGroupRepository::new(self.db)
            .add_roles(guild_id, name, role_ids)
            .await?;

        tracing::info!("Added {} roles to group '{}' in guild {}", added, name, guild_id);

        Ok(added)
    }

    /// Removes roles from a group, or the whole group when `role_ids` is empty
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of roles removed
    /// - `Err(AppError::NotFound)` - The group does not exist
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn remove(&self, guild_id: u64, name: &str, role_ids: &[u64]) -> Result<u64, AppError> {
        let group = self.get(guild_id, name).await?;
        let repo = RoleGroupRepository::new(self.db);

        let removed = if role_ids.is_empty() {
            repo.delete_group(guild_id, &group.name).await?
        } else {
            repo.remove_roles(guild_id, &group.name, role_ids).await?
        };

        tracing::info!(
            "Removed {} roles from group '{}' in guild {}",
            removed,
            name,
            guild_id
        );

        Ok(removed)
    }
}
