//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and return domain models from
//! `crate::model`, keeping entity types out of services and command handlers.

pub mod button_action;
pub mod guild_config;
pub mod menu_action;
pub mod role_group;

#[cfg(test)]
mod test;
