//! Factory methods for creating test data.
//!
//! Each table has a `Factory` struct with builder methods for customization and a
//! `create_*` shorthand for quick default creation. Snowflakes and names default to
//! unique values from [`helpers::next_id`].
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let action = factory::create_button_action(&db).await?;
//!
//! let action = factory::button_action::ButtonActionFactory::new(&db)
//!     .message_id("42")
//!     .button_id("verify")
//!     .build()
//!     .await?;
//! ```

pub mod button_action;
pub mod guild_config;
pub mod helpers;
pub mod menu_action;
pub mod role_group;

pub use button_action::create_button_action;
pub use guild_config::create_guild_config;
pub use menu_action::create_menu_action;
pub use role_group::create_role_group_entry;
