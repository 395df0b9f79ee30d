use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{
        button_action::ButtonActionRepository, guild_config::GuildConfigRepository,
        menu_action::MenuActionRepository, role_group::RoleGroupRepository,
    },
    error::AppError,
    model::{
        action::{MessageLocation, SetButtonActionParam, SetMenuActionParam},
        guild_config::{ConfigKey, ConfigValue},
    },
};

mod button_action;
mod guild_config;
mod role_group;

fn location(message_id: u64) -> MessageLocation {
    MessageLocation {
        guild_id: 1,
        channel_id: 2,
        message_id,
    }
}
