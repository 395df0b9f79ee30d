use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    action::{
        test::{Call, MockGateway},
        EnvironmentType,
    },
    error::AppError,
    model::action::MessageLocation,
};

mod action;

fn location(message_id: u64) -> MessageLocation {
    MessageLocation {
        guild_id: 1,
        channel_id: 2,
        message_id,
    }
}

/// A button environment that sends one ephemeral message.
fn say_button(text: &str) -> String {
    json!({
        "type": "buttons",
        "events": [{
            "id": "on_button_click",
            "entrypoint": "say",
            "actions": [{ "id": "say", "command": "SEND_EPHEMERAL_MESSAGE", "data": { "content": text } }]
        }]
    })
    .to_string()
}

/// A menu environment giving a role on select and taking it on unselect.
fn toggle_role_menu(role_id: u64) -> String {
    json!({
        "type": "menus",
        "events": [
            {
                "id": "on_menu_select",
                "entrypoint": "add",
                "actions": [{ "id": "add", "command": "ADD_ROLE", "data": { "role_id": role_id.to_string() } }]
            },
            {
                "id": "on_menu_unselect",
                "entrypoint": "remove",
                "actions": [{ "id": "remove", "command": "REMOVE_ROLE", "data": { "role_id": role_id.to_string() } }]
            }
        ]
    })
    .to_string()
}
