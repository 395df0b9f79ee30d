use sea_orm::DatabaseConnection;

use crate::{
    action::{ActionEnvironment, EnvironmentType},
    data::{button_action::ButtonActionRepository, menu_action::MenuActionRepository},
    error::AppError,
    model::action::{MessageLocation, SetButtonActionParam, SetMenuActionParam},
};

/// Attaches, reads and detaches action documents on message components.
pub struct ActionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores the action document of a button
    ///
    /// The document is stored in its canonical form so later reads never have to deal
    /// with the formatting of the uploaded file.
    ///
    /// # Arguments
    /// - `location` - Message holding the button
    /// - `button_id` - Custom ID of the button
    /// - `document` - Raw JSON of the action environment
    ///
    /// # Returns
    /// - `Ok(ActionEnvironment)` - The stored environment
    /// - `Err(AppError::ActionErr)` - The document failed to parse or validate
    /// - `Err(AppError::BadRequest)` - The document is not a `buttons` environment
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_button_action(
        &self,
        location: MessageLocation,
        button_id: &str,
        document: &str,
    ) -> Result<ActionEnvironment, AppError> {
        let environment = parse_for(document, EnvironmentType::Buttons)?;

        ButtonActionRepository::new(self.db)
            .upsert(SetButtonActionParam {
                location,
                button_id: button_id.to_string(),
                action: environment.to_json()?,
            })
            .await?;

        tracing::info!(
            "Set actions for button {} on message {}: {}",
            button_id,
            location.message_id,
            environment.summary()
        );

        Ok(environment)
    }

    /// Validates and stores the action document of one select menu option
    ///
    /// # Returns
    /// - `Ok(ActionEnvironment)` - The stored environment
    /// - `Err(AppError::ActionErr)` - The document failed to parse or validate
    /// - `Err(AppError::BadRequest)` - The document is not a `menus` environment
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_menu_action(
        &self,
        location: MessageLocation,
        menu_id: &str,
        option_label: &str,
        document: &str,
    ) -> Result<ActionEnvironment, AppError> {
        let environment = parse_for(document, EnvironmentType::Menus)?;

        MenuActionRepository::new(self.db)
            .upsert(SetMenuActionParam {
                location,
                menu_id: menu_id.to_string(),
                option_label: option_label.to_string(),
                action: environment.to_json()?,
            })
            .await?;

        tracing::info!(
            "Set actions for option '{}' of menu {} on message {}: {}",
            option_label,
            menu_id,
            location.message_id,
            environment.summary()
        );

        Ok(environment)
    }

    /// Loads the stored environment of a button, if any.
    pub async fn button_action(
        &self,
        message_id: u64,
        button_id: &str,
    ) -> Result<Option<ActionEnvironment>, AppError> {
        let Some(stored) = ButtonActionRepository::new(self.db)
            .find(message_id, button_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(ActionEnvironment::parse(&stored.action)?))
    }

    /// Loads the stored environment of a menu option, if any.
    pub async fn menu_action(
        &self,
        message_id: u64,
        menu_id: &str,
        option_label: &str,
    ) -> Result<Option<ActionEnvironment>, AppError> {
        let Some(stored) = MenuActionRepository::new(self.db)
            .find(message_id, menu_id, option_label)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(ActionEnvironment::parse(&stored.action)?))
    }

    /// Detaches the actions of a button, returning whether any were attached.
    pub async fn remove_button_action(
        &self,
        message_id: u64,
        button_id: &str,
    ) -> Result<bool, AppError> {
        ButtonActionRepository::new(self.db)
            .delete(message_id, button_id)
            .await
    }

    /// Detaches the actions of a menu option, returning whether any were attached.
    pub async fn remove_menu_action(
        &self,
        message_id: u64,
        menu_id: &str,
        option_label: &str,
    ) -> Result<bool, AppError> {
        MenuActionRepository::new(self.db)
            .delete(message_id, menu_id, option_label)
            .await
    }

    /// Detaches the actions of every option of a menu.
    pub async fn remove_menu_actions(&self, message_id: u64, menu_id: &str) -> Result<u64, AppError> {
        MenuActionRepository::new(self.db)
            .delete_by_menu(message_id, menu_id)
            .await
    }

    /// Keeps option actions attached after a menu's custom ID changed.
    pub async fn rename_menu(
        &self,
        message_id: u64,
        menu_id: &str,
        new_menu_id: &str,
    ) -> Result<u64, AppError> {
        MenuActionRepository::new(self.db)
            .rename_menu(message_id, menu_id, new_menu_id)
            .await
    }

    /// Keeps an option's actions attached after its label changed.
    pub async fn rename_option(
        &self,
        message_id: u64,
        menu_id: &str,
        option_label: &str,
        new_label: &str,
    ) -> Result<u64, AppError> {
        MenuActionRepository::new(self.db)
            .rename_option(message_id, menu_id, option_label, new_label)
            .await
    }

    /// Deletes every action attached to the messages
    ///
    /// Called when the messages themselves were deleted, one at a time or in bulk.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of button and option actions removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn purge_messages(&self, message_ids: &[u64]) -> Result<u64, AppError> {
        if message_ids.is_empty() {
            return Ok(0);
        }

        let buttons = ButtonActionRepository::new(self.db)
            .delete_by_messages(message_ids)
            .await?;
        let menus = MenuActionRepository::new(self.db)
            .delete_by_messages(message_ids)
            .await?;

        let removed = buttons + menus;
        if removed > 0 {
            tracing::info!(
                "Purged {} actions of {} deleted message(s)",
                removed,
                message_ids.len()
            );
        }

        Ok(removed)
    }
}

fn parse_for(document: &str, expected: EnvironmentType) -> Result<ActionEnvironment, AppError> {
    let environment = ActionEnvironment::parse(document)?;

    if environment.kind != expected {
        return Err(AppError::BadRequest(format!(
            "Expected a `{}` action environment but the file describes `{}`",
            expected.as_str(),
            environment.kind.as_str()
        )));
    }

    Ok(environment)
}
