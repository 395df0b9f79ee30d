pub use super::button_action::Entity as ButtonAction;
pub use super::guild_config::Entity as GuildConfig;
pub use super::menu_action::Entity as MenuAction;
pub use super::role_group::Entity as RoleGroup;
