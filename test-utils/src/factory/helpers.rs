//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A minimal valid button action document.
pub fn ack_button_document() -> String {
    serde_json::json!({
        "type": "buttons",
        "events": [{
            "id": "on_button_click",
            "entrypoint": "ack",
            "actions": [{ "id": "ack", "command": "ACK" }]
        }]
    })
    .to_string()
}

/// A minimal valid menu action document.
pub fn ack_menu_document() -> String {
    serde_json::json!({
        "type": "menus",
        "events": [{
            "id": "on_menu_select",
            "entrypoint": "ack",
            "actions": [{ "id": "ack", "command": "ACK" }]
        }]
    })
    .to_string()
}
