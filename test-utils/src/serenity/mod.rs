//! Test fixtures for serenity model types.
//!
//! Fixtures are created by deserializing JSON shaped like Discord's API responses,
//! so they are valid serenity structs without a gateway connection.
//!
//! - `role::create_test_role` - Guild roles with permissions
//! - `component::create_test_action_rows` - Message component rows

pub mod component;
pub mod role;

pub use component::create_test_action_rows;
pub use role::create_test_role;
