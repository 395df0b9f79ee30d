//! Dungeon Whisperer Test Utils
//!
//! Shared testing utilities for the bot: a builder for test contexts backed by
//! in-memory SQLite databases, factories inserting rows with sensible defaults, and
//! serenity model fixtures created from JSON.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::ButtonAction;
//!
//! #[tokio::test]
//! async fn test_button_actions() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_table(ButtonAction)
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let action = factory::create_button_action(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
