//! Business logic sitting between the bot's event handlers and the repositories.
//!
//! Services borrow the database connection the same way repositories do and are
//! constructed per call. Modules that talk to Discord (`embed`, `pins`, `music`)
//! keep their decision making in plain functions so it can be tested without a
//! gateway connection.

pub mod action;
pub mod embed;
pub mod guild_config;
pub mod interaction;
pub mod music;
pub mod permissions;
pub mod pins;
pub mod role_group;
pub mod spotify;

#[cfg(test)]
mod test;
