use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::action::{MenuAction, SetMenuActionParam},
};

/// Repository for action documents attached to select menu options.
pub struct MenuActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the action document for a menu option, replacing any existing one.
    ///
    /// # Arguments
    /// - `param` - Location, menu custom ID, option label and validated document
    ///
    /// # Returns
    /// - `Ok(MenuAction)` - The stored record
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: SetMenuActionParam) -> Result<MenuAction, AppError> {
        let existing = entity::prelude::MenuAction::find()
            .filter(entity::menu_action::Column::MessageId.eq(param.location.message_id.to_string()))
            .filter(entity::menu_action::Column::MenuId.eq(param.menu_id.as_str()))
            .filter(entity::menu_action::Column::OptionLabel.eq(param.option_label.as_str()))
            .one(self.db)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: entity::menu_action::ActiveModel = existing.into();
                active.channel_id = ActiveValue::Set(param.location.channel_id.to_string());
                active.action = ActiveValue::Set(param.action);
                active.update(self.db).await?
            }
            None => {
                entity::menu_action::ActiveModel {
                    guild_id: ActiveValue::Set(param.location.guild_id.to_string()),
                    channel_id: ActiveValue::Set(param.location.channel_id.to_string()),
                    message_id: ActiveValue::Set(param.location.message_id.to_string()),
                    menu_id: ActiveValue::Set(param.menu_id),
                    option_label: ActiveValue::Set(param.option_label),
                    action: ActiveValue::Set(param.action),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        MenuAction::from_entity(model)
    }

    /// Finds the action document for one option
    ///
    /// # Returns
    /// - `Ok(Some(MenuAction))` - A document is attached
    /// - `Ok(None)` - The option has no actions
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(
        &self,
        message_id: u64,
        menu_id: &str,
        option_label: &str,
    ) -> Result<Option<MenuAction>, AppError> {
        entity::prelude::MenuAction::find()
            .filter(entity::menu_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::menu_action::Column::MenuId.eq(menu_id))
            .filter(entity::menu_action::Column::OptionLabel.eq(option_label))
            .one(self.db)
            .await?
            .map(MenuAction::from_entity)
            .transpose()
    }

    /// Gets every option action of a menu in the order they were stored.
    pub async fn get_by_menu(
        &self,
        message_id: u64,
        menu_id: &str,
    ) -> Result<Vec<MenuAction>, AppError> {
        entity::prelude::MenuAction::find()
            .filter(entity::menu_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::menu_action::Column::MenuId.eq(menu_id))
            .order_by_asc(entity::menu_action::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MenuAction::from_entity)
            .collect()
    }

    /// Deletes the action document of one option, returning whether one existed.
    pub async fn delete(
        &self,
        message_id: u64,
        menu_id: &str,
        option_label: &str,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::MenuAction::delete_many()
            .filter(entity::menu_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::menu_action::Column::MenuId.eq(menu_id))
            .filter(entity::menu_action::Column::OptionLabel.eq(option_label))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes the action documents of every option of a menu.
    pub async fn delete_by_menu(&self, message_id: u64, menu_id: &str) -> Result<u64, AppError> {
        let result = entity::prelude::MenuAction::delete_many()
            .filter(entity::menu_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::menu_action::Column::MenuId.eq(menu_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the menu actions of every menu on the messages.
    pub async fn delete_by_messages(&self, message_ids: &[u64]) -> Result<u64, AppError> {
        let result = entity::prelude::MenuAction::delete_many()
            .filter(
                entity::menu_action::Column::MessageId
                    .is_in(message_ids.iter().map(|id| id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves stored actions to a menu's new custom ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of option actions moved
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn rename_menu(
        &self,
        message_id: u64,
        menu_id: &str,
        new_menu_id: &str,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::MenuAction::update_many()
            .col_expr(entity::menu_action::Column::MenuId, Expr::value(new_menu_id))
            .filter(entity::menu_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::menu_action::Column::MenuId.eq(menu_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves the stored action of an option to its new label.
    pub async fn rename_option(
        &self,
        message_id: u64,
        menu_id: &str,
        option_label: &str,
        new_label: &str,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::MenuAction::update_many()
            .col_expr(entity::menu_action::Column::OptionLabel, Expr::value(new_label))
            .filter(entity::menu_action::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::menu_action::Column::MenuId.eq(menu_id))
            .filter(entity::menu_action::Column::OptionLabel.eq(option_label))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
