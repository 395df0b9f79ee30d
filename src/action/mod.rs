//! Declarative responses to message component interactions.
//!
//! An *action environment* is a JSON document stored per button, or per select menu
//! option, describing what the bot does when that component is used. An environment
//! holds one or more *events* (`on_button_click`, `on_menu_select`, `on_menu_unselect`),
//! each of which is a small graph of *actions* starting at an entrypoint:
//!
//! ```json
//! {
//!     "type": "buttons",
//!     "events": [{
//!         "id": "on_button_click",
//!         "entrypoint": "check",
//!         "actions": [
//!             { "id": "check", "command": "PREDICATE", "data": {
//!                 "conditions": [[{ "condition": "USER_HAS_ROLE", "data": { "role_id": "1" } }]],
//!                 "on_success": "give", "on_failure": "deny" } },
//!             { "id": "give", "command": "ADD_ROLE", "data": { "role_id": "2" }, "next": "ack" },
//!             { "id": "deny", "command": "SEND_EPHEMERAL_MESSAGE", "data": { "content": "Nope" } },
//!             { "id": "ack", "command": "ACK" }
//!         ]
//!     }]
//! }
//! ```
//!
//! Documents are fully validated when parsed, so a stored environment can never
//! reference a missing action. Execution talks to Discord only through the
//! [`InteractionGateway`] trait, which keeps the engine independent of serenity.

pub mod command;
pub mod condition;
pub mod environment;
pub mod gateway;
pub mod snowflake;

pub use command::{Action, ActionCommand, ActionKind, Step};
pub use condition::Condition;
pub use environment::{ActionEnvironment, ActionEvent, EnvironmentType, EventKind};
pub use gateway::{EphemeralMessage, InteractionGateway};

#[cfg(test)]
pub(crate) mod test;
