//! Stored action documents attached to buttons and menu options.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Where a component lives: guild, channel and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLocation {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
}

/// Action document stored for one button of a message.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAction {
    pub id: i32,
    pub location: MessageLocation,
    pub button_id: String,
    /// Validated action environment JSON.
    pub action: String,
}

impl ButtonAction {
    /// Converts an entity model to the button action domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ButtonAction)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored snowflake is not a u64
    pub fn from_entity(entity: entity::button_action::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            location: MessageLocation {
                guild_id: parse_u64_from_string(entity.guild_id)?,
                channel_id: parse_u64_from_string(entity.channel_id)?,
                message_id: parse_u64_from_string(entity.message_id)?,
            },
            button_id: entity.button_id,
            action: entity.action,
        })
    }
}

/// Action document stored for one option of a select menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuAction {
    pub id: i32,
    pub location: MessageLocation,
    pub menu_id: String,
    pub option_label: String,
    pub action: String,
}

impl MenuAction {
    /// Converts an entity model to the menu action domain model
    pub fn from_entity(entity: entity::menu_action::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            location: MessageLocation {
                guild_id: parse_u64_from_string(entity.guild_id)?,
                channel_id: parse_u64_from_string(entity.channel_id)?,
                message_id: parse_u64_from_string(entity.message_id)?,
            },
            menu_id: entity.menu_id,
            option_label: entity.option_label,
            action: entity.action,
        })
    }
}

/// Parameters for attaching an action document to a button.
#[derive(Debug, Clone)]
pub struct SetButtonActionParam {
    pub location: MessageLocation,
    pub button_id: String,
    pub action: String,
}

/// Parameters for attaching an action document to a menu option.
#[derive(Debug, Clone)]
pub struct SetMenuActionParam {
    pub location: MessageLocation,
    pub menu_id: String,
    pub option_label: String,
    pub action: String,
}
