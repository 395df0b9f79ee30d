//! SeaORM entity models mirroring the tables created by the `migration` crate.

pub mod prelude;

pub mod button_action;
pub mod guild_config;
pub mod menu_action;
pub mod role_group;
