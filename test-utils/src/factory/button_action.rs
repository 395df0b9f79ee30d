//! Button action factory for creating test button action rows.

use crate::factory::helpers::{ack_button_document, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test button actions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let action = ButtonActionFactory::new(&db)
///     .message_id("42")
///     .button_id("verify")
///     .build()
///     .await?;
/// ```
pub struct ButtonActionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    message_id: String,
    button_id: String,
    action: String,
}

impl<'a> ButtonActionFactory<'a> {
    /// Creates a new ButtonActionFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, channel_id, message_id: unique numeric strings
    /// - button_id: `"button_{id}"`
    /// - action: an environment that only acknowledges the click
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: (1000 + id).to_string(),
            channel_id: (2000 + id).to_string(),
            message_id: (3000 + id).to_string(),
            button_id: format!("button_{}", id),
            action: ack_button_document(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn button_id(mut self, button_id: impl Into<String>) -> Self {
        self.button_id = button_id.into();
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Builds and inserts the button action into the database.
    ///
    /// # Returns
    /// - `Ok(entity::button_action::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::button_action::Model, DbErr> {
        entity::button_action::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            button_id: ActiveValue::Set(self.button_id),
            action: ActiveValue::Set(self.action),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a button action with default values.
pub async fn create_button_action(
    db: &DatabaseConnection,
) -> Result<entity::button_action::Model, DbErr> {
    ButtonActionFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_unique_button_actions() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(ButtonAction)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_button_action(db).await?;
        let second = create_button_action(db).await?;

        assert_ne!(first.message_id, second.message_id);
        assert_ne!(first.button_id, second.button_id);
        assert!(first.action.contains("on_button_click"));

        Ok(())
    }
}
