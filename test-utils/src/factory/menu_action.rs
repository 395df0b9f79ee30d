//! Menu action factory for creating test menu option action rows.

use crate::factory::helpers::{ack_menu_document, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu actions with customizable fields.
pub struct MenuActionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    message_id: String,
    menu_id: String,
    option_label: String,
    action: String,
}

impl<'a> MenuActionFactory<'a> {
    /// Creates a new MenuActionFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, channel_id, message_id: unique numeric strings
    /// - menu_id: `"menu_{id}"`
    /// - option_label: `"Option {id}"`
    /// - action: an environment that only acknowledges the selection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: (1000 + id).to_string(),
            channel_id: (2000 + id).to_string(),
            message_id: (3000 + id).to_string(),
            menu_id: format!("menu_{}", id),
            option_label: format!("Option {}", id),
            action: ack_menu_document(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn menu_id(mut self, menu_id: impl Into<String>) -> Self {
        self.menu_id = menu_id.into();
        self
    }

    pub fn option_label(mut self, option_label: impl Into<String>) -> Self {
        self.option_label = option_label.into();
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Builds and inserts the menu action into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu_action::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu_action::Model, DbErr> {
        entity::menu_action::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            menu_id: ActiveValue::Set(self.menu_id),
            option_label: ActiveValue::Set(self.option_label),
            action: ActiveValue::Set(self.action),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu action with default values.
pub async fn create_menu_action(
    db: &DatabaseConnection,
) -> Result<entity::menu_action::Model, DbErr> {
    MenuActionFactory::new(db).build().await
}
