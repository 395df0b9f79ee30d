//! Test factory for message component rows.

use serenity::all::ActionRow;

/// Creates action rows from Discord's component JSON.
///
/// # Arguments
/// - `rows` - JSON array of action rows, as found under a message's `components`
///
/// # Panics
/// - If the JSON cannot be deserialized into action rows
///
/// # Examples
///
/// ```rust,ignore
/// let rows = create_test_action_rows(serde_json::json!([
///     { "type": 1, "components": [
///         { "type": 2, "style": 1, "custom_id": "verify", "label": "Verify" }
///     ]}
/// ]));
/// ```
pub fn create_test_action_rows(rows: serde_json::Value) -> Vec<ActionRow> {
    serde_json::from_value(rows).expect("Failed to create test action rows - invalid JSON structure")
}

/// JSON for a button row, one primary button per custom ID.
pub fn button_row(custom_ids: &[&str]) -> serde_json::Value {
    let buttons: Vec<_> = custom_ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "type": 2,
                "style": 1,
                "custom_id": id,
                "label": format!("Label {}", id)
            })
        })
        .collect();

    serde_json::json!({ "type": 1, "components": buttons })
}

/// JSON for a string select menu row whose option values are `"{label}-value"`.
pub fn menu_row(custom_id: &str, labels: &[&str]) -> serde_json::Value {
    let options: Vec<_> = labels
        .iter()
        .map(|label| serde_json::json!({ "label": label, "value": format!("{}-value", label) }))
        .collect();

    serde_json::json!({
        "type": 1,
        "components": [{
            "type": 3,
            "custom_id": custom_id,
            "placeholder": "Pick one",
            "min_values": 1,
            "max_values": 1,
            "options": options
        }]
    })
}
