//! Role group factory for creating test role group rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating one role of a role group.
pub struct RoleGroupFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    role_id: String,
}

impl<'a> RoleGroupFactory<'a> {
    /// Creates a new RoleGroupFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, role_id: unique numeric strings
    /// - name: `"group_{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: (1000 + id).to_string(),
            name: format!("group_{}", id),
            role_id: (5000 + id).to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    /// Builds and inserts the role group row into the database.
    pub async fn build(self) -> Result<entity::role_group::Model, DbErr> {
        entity::role_group::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            role_id: ActiveValue::Set(self.role_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role group row with default values.
pub async fn create_role_group_entry(
    db: &DatabaseConnection,
) -> Result<entity::role_group::Model, DbErr> {
    RoleGroupFactory::new(db).build().await
}
