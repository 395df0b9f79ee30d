use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::action::{ButtonAction, SetButtonActionParam},
};

/// Repository for action documents attached to buttons.
pub struct ButtonActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ButtonActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the action document for a button, replacing any existing one.
    ///
    /// # Arguments
    /// - `param` - Location, button custom ID and validated document
    ///
    /// # Returns
    /// - `Ok(ButtonAction)` - The stored record
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: SetButtonActionParam) -> Result<ButtonAction, AppError> {
        let existing = entity::prelude::ButtonAction::find()
            .filter(
                entity::button_action::Column::MessageId.eq(param.location.message_id.to_string()),
            )
            .filter(entity::button_action::Column::ButtonId.eq(param.button_id.as_str()))
            .one(self.db)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: entity::button_action::ActiveModel = existing.into();
                active.channel_id = ActiveValue::Set(param.location.channel_id.to_string());
                active.action = ActiveValue::Set(param.action);
                active.update(self.db).await?
            }
            None => {
                entity::button_action::ActiveModel {
                    guild_id: ActiveValue::Set(param.location.guild_id.to_string()),
                    channel_id: ActiveValue::Set(param.location.channel_id.to_string()),
                    message_id: ActiveValue::Set(param.location.message_id.to_string()),
                    button_id: ActiveValue::Set(param.button_id),
                    action: ActiveValue::Set(param.action),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        ButtonAction::from_entity(model)
    }

    /// Finds the action document for a button
    ///
    /// # Returns
    /// - `Ok(Some(ButtonAction))` - A document is attached
    /// - `Ok(None)` - The button has no actions
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(
        &self,
        message_id: u64,
        button_id: &str,
    ) -> Result<Option<ButtonAction>, AppError> {
        entity::prelude::ButtonAction::find()
            .filter(entity::button_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::button_action::Column::ButtonId.eq(button_id))
            .one(self.db)
            .await?
            .map(ButtonAction::from_entity)
            .transpose()
    }

    /// Gets every button action of a message, oldest first.
    pub async fn get_by_message(&self, message_id: u64) -> Result<Vec<ButtonAction>, AppError> {
        entity::prelude::ButtonAction::find()
            .filter(entity::button_action::Column::MessageId.eq(message_id.to_string()))
            .order_by_asc(entity::button_action::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ButtonAction::from_entity)
            .collect()
    }

    /// Deletes the action document of a button
    ///
    /// # Returns
    /// - `Ok(true)` - A document was deleted
    /// - `Ok(false)` - The button had no actions
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, message_id: u64, button_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::ButtonAction::delete_many()
            .filter(entity::button_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::button_action::Column::ButtonId.eq(button_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every button action of the messages, returning how many were removed.
    pub async fn delete_by_messages(&self, message_ids: &[u64]) -> Result<u64, AppError> {
        let result = entity::prelude::ButtonAction::delete_many()
            .filter(
                entity::button_action::Column::MessageId
                    .is_in(message_ids.iter().map(|id| id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
