//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, parsing
//! stored snowflake strings into `u64` so services and commands never handle raw
//! database rows.

pub mod action;
pub mod guild_config;
pub mod role_group;
